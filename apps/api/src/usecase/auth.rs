//! ログインユースケース
//!
//! 設定された 1 組のユーザー名・パスワードと照合し、成功したらトークンを発行する。
//! 発行したトークンは保存せず、以降のリクエストでも検証しない。

use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::{config::AuthConfig, error::ApiError};

/// ログイン成功時の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
   pub token:    String,
   pub username: String,
}

/// ログインユースケース
pub struct AuthUseCaseImpl {
   credentials: AuthConfig,
}

impl AuthUseCaseImpl {
   pub fn new(credentials: AuthConfig) -> Self {
      Self { credentials }
   }

   /// 資格情報を照合する
   ///
   /// 比較は定数時間で行い、どちらが違っていたかは応答に含めない。
   #[tracing::instrument(skip_all, fields(username = %username))]
   pub fn login(&self, username: &str, password: &str) -> Result<LoginResult, ApiError> {
      let user_matches = username
         .as_bytes()
         .ct_eq(self.credentials.username.as_bytes());
      let pass_matches = password
         .as_bytes()
         .ct_eq(self.credentials.password.as_bytes());

      if !bool::from(user_matches & pass_matches) {
         tracing::info!("ログインに失敗しました");
         return Err(ApiError::Unauthorized(
            "ユーザー名またはパスワードが正しくありません".to_string(),
         ));
      }

      Ok(LoginResult {
         token:    Uuid::new_v4().to_string(),
         username: username.to_string(),
      })
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::{assert_eq, assert_ne};
   use rstest::rstest;

   use super::*;

   fn sut() -> AuthUseCaseImpl {
      AuthUseCaseImpl::new(AuthConfig {
         username: "admin".to_string(),
         password: "s3cret".to_string(),
      })
   }

   #[test]
   fn test_正しい資格情報でトークンが発行される() {
      let result = sut().login("admin", "s3cret").unwrap();

      assert_eq!(result.username, "admin");
      assert!(Uuid::parse_str(&result.token).is_ok());
   }

   #[test]
   fn test_ログインのたびに異なるトークンが発行される() {
      let sut = sut();

      let first = sut.login("admin", "s3cret").unwrap();
      let second = sut.login("admin", "s3cret").unwrap();

      assert_ne!(first.token, second.token);
   }

   #[rstest]
   #[case("admin", "wrong")]
   #[case("root", "s3cret")]
   #[case("", "")]
   #[case("admin", "s3cret ")]
   fn test_資格情報が一致しなければunauthorized(#[case] username: &str, #[case] password: &str) {
      let result = sut().login(username, password);

      assert!(matches!(result, Err(ApiError::Unauthorized(_))));
   }
}
