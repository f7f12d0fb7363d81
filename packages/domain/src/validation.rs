//! # フィールド単位のバリデーションエラー
//!
//! リクエスト全体を検証し、違反しているフィールドをすべて集めて返すための型。
//! 最初の違反で打ち切らないため、クライアントは一度の応答で全エラーを表示できる。
//!
//! ```rust
//! use todo_domain::{DomainError, validation::ValidationErrors};
//!
//! let mut errors = ValidationErrors::new();
//! let name: Option<String> = errors.capture(
//!     "name",
//!     Err::<String, _>(DomainError::Validation("短すぎます".to_string())),
//! );
//!
//! assert!(name.is_none());
//! assert_eq!(errors.len(), 1);
//! assert!(errors.into_result(()).is_err());
//! ```

use std::fmt;

use crate::DomainError;

/// 1 フィールド分の検証エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
   /// JSON 上のフィールド名
   pub field:   &'static str,
   pub message: String,
}

/// 検証エラーの集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
   errors: Vec<FieldError>,
}

impl ValidationErrors {
   pub fn new() -> Self {
      Self::default()
   }

   /// エラーを追加する
   pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
      self.errors.push(FieldError {
         field,
         message: message.into(),
      });
   }

   /// 値オブジェクト生成の結果を取り込む
   ///
   /// 成功なら値を返し、失敗ならエラーを記録して `None` を返す。
   /// `DomainError::Validation` 以外のエラーも表示文字列で記録する。
   pub fn capture<T>(&mut self, field: &'static str, result: Result<T, DomainError>) -> Option<T> {
      match result {
         Ok(value) => Some(value),
         Err(DomainError::Validation(message)) => {
            self.push(field, message);
            None
         }
         Err(other) => {
            self.push(field, other.to_string());
            None
         }
      }
   }

   /// `other` のエラーを末尾に移す
   pub fn append(&mut self, mut other: ValidationErrors) {
      self.errors.append(&mut other.errors);
   }

   pub fn is_empty(&self) -> bool {
      self.errors.is_empty()
   }

   pub fn len(&self) -> usize {
      self.errors.len()
   }

   pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
      self.errors.iter()
   }

   /// エラーが無ければ `value` を、あれば自身を返す
   pub fn into_result<T>(self, value: T) -> Result<T, Self> {
      if self.errors.is_empty() {
         Ok(value)
      } else {
         Err(self)
      }
   }
}

impl IntoIterator for ValidationErrors {
   type Item = FieldError;
   type IntoIter = std::vec::IntoIter<FieldError>;

   fn into_iter(self) -> Self::IntoIter {
      self.errors.into_iter()
   }
}

impl fmt::Display for ValidationErrors {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      let mut first = true;
      for error in &self.errors {
         if !first {
            f.write_str(", ")?;
         }
         write!(f, "{}: {}", error.field, error.message)?;
         first = false;
      }
      Ok(())
   }
}

impl std::error::Error for ValidationErrors {}
