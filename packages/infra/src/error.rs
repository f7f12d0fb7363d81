//! # インフラ層エラー定義
//!
//! ストアとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Database, RowMissing 等）
//!
//! `From` 実装や convenience constructor でエラーを生成すると、
//! その時点のスパン情報（どのリポジトリメソッドから来たか）が自動で記録される。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::RowMissing { entity, id } => { /* 404 扱い */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// データベースエラー
   ///
   /// SQL の実行失敗、接続エラー、制約違反など。
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// マイグレーションエラー
   #[error("マイグレーションエラー: {0}")]
   Migration(#[source] sqlx::migrate::MigrateError),

   /// 更新対象の行が存在しない
   ///
   /// 存在確認の後、更新までの間に別リクエストが削除した場合に発生する。
   #[error("{entity} が存在しません: id={id}")]
   RowMissing {
      /// エンティティ名（例: "ToDo"）
      entity: String,
      /// エンティティの ID
      id:     String,
   },

   /// 予期しないエラー
   ///
   /// ストアに格納された値がドメインの不変条件を満たさない場合など。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// RowMissing バリアントの場合、entity と id を返す
   pub fn as_row_missing(&self) -> Option<(&str, &str)> {
      match &self.kind {
         InfraErrorKind::RowMissing { entity, id } => Some((entity, id)),
         _ => None,
      }
   }

   // ===== Convenience constructors =====

   /// 更新対象の行が存在しないエラーを生成する
   pub fn row_missing(entity: impl Into<String>, id: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::RowMissing {
            entity: entity.into(),
            id:     id.into(),
         },
         span_trace: SpanTrace::capture(),
      }
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(msg.into()),
         span_trace: SpanTrace::capture(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      std::error::Error::source(&self.kind)
   }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<sqlx::Error> for InfraError {
   fn from(err: sqlx::Error) -> Self {
      Self {
         kind:       InfraErrorKind::Database(err),
         span_trace: SpanTrace::capture(),
      }
   }
}

impl From<sqlx::migrate::MigrateError> for InfraError {
   fn from(err: sqlx::migrate::MigrateError) -> Self {
      Self {
         kind:       InfraErrorKind::Migration(err),
         span_trace: SpanTrace::capture(),
      }
   }
}
