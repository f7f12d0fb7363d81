//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! API で共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API クレートの責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除
//! - バリデーションエラーはフィールド単位の詳細を `errors` 配列で返す
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "type": "https://todo-liste.example.com/errors/validation-error",
//!   "title": "Validation Error",
//!   "status": 400,
//!   "detail": "入力内容に誤りがあります",
//!   "errors": [
//!     { "field": "name", "message": "名前は 3 文字以上 100 文字以内で入力してください" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://todo-liste.example.com/errors";

/// フィールド単位のエラー詳細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorBody {
   /// JSON 上のフィールド名（例: `"dueTime"`）
   pub field:   String,
   /// 人間可読なエラーメッセージ
   pub message: String,
}

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
/// `errors` はバリデーションエラーのときのみ出力される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
   #[serde(default, skip_serializing_if = "Vec::is_empty")]
   pub errors:     Vec<FieldErrorBody>,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// `error_type_suffix` はベース URI に付加される（例: `"not-found"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
         errors: Vec::new(),
      }
   }

   /// 400 Bad Request
   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::new("bad-request", "Bad Request", 400, detail)
   }

   /// 401 Unauthorized
   pub fn unauthorized(detail: impl Into<String>) -> Self {
      Self::new("unauthorized", "Unauthorized", 401, detail)
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new("not-found", "Not Found", 404, detail)
   }

   /// 400 Validation Error（フィールド単位の詳細付き）
   pub fn validation_error(detail: impl Into<String>, errors: Vec<FieldErrorBody>) -> Self {
      Self {
         errors,
         ..Self::new("validation-error", "Validation Error", 400, detail)
      }
   }

   /// 500 Internal Server Error
   ///
   /// detail は固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(
         "internal-error",
         "Internal Server Error",
         500,
         "内部エラーが発生しました",
      )
   }
}
