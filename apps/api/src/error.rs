//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ValidationErrors / InfraError
//!        ↓ From
//! ApiError
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + RFC 9457 JSON)
//! ```
//!
//! | ApiError | HTTP Status |
//! |----------|-------------|
//! | Validation | 400（`errors` 配列付き） |
//! | BadRequest | 400 |
//! | Unauthorized | 401 |
//! | NotFound | 404 |
//! | Database | 500 |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::validation::ValidationErrors;
use todo_infra::InfraError;
use todo_shared::{ErrorResponse, FieldErrorBody};

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// フィールド単位の入力検証エラー
   #[error("バリデーションエラー: {0}")]
   Validation(ValidationErrors),

   /// 不正なリクエスト（JSON 構文エラー、不正なパスパラメータ等）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 認証失敗
   #[error("認証エラー: {0}")]
   Unauthorized(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(InfraError),
}

impl From<ValidationErrors> for ApiError {
   fn from(errors: ValidationErrors) -> Self {
      Self::Validation(errors)
   }
}

/// 更新中に行が消えた場合（`RowMissing`）は 404 として扱う
impl From<InfraError> for ApiError {
   fn from(err: InfraError) -> Self {
      match err.as_row_missing() {
         Some((entity, id)) => Self::NotFound(format!("{entity} が見つかりません: {id}")),
         None => Self::Database(err),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let body = match self {
         ApiError::NotFound(msg) => ErrorResponse::not_found(msg),
         ApiError::Validation(errors) => {
            let fields = errors
               .into_iter()
               .map(|e| FieldErrorBody {
                  field:   e.field.to_string(),
                  message: e.message,
               })
               .collect();
            ErrorResponse::validation_error("入力内容に誤りがあります", fields)
         }
         ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg),
         ApiError::Unauthorized(msg) => ErrorResponse::unauthorized(msg),
         ApiError::Database(e) => {
            tracing::error!(error = %e, span_trace = %e.span_trace(), "データベースエラー");
            ErrorResponse::internal_error()
         }
      };

      let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
      (status, Json(body)).into_response()
   }
}
