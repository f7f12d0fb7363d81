//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 単一の値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! 複数フィールドをまとめて検証する場合は
//! [`ValidationErrors`](crate::validation::ValidationErrors) を使用する。
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::DomainError;
//!
//! let error = DomainError::NotFound {
//!     entity_type: "ToDo",
//!     id:          "42".to_string(),
//! };
//! assert_eq!(error.to_string(), "ToDo が見つかりません: 42");
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 値オブジェクトの生成時に、入力値がビジネスルールに違反している場合に使用する。
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// エンティティが見つからない
   ///
   /// 指定された ID のエンティティがストアに存在しない場合に使用する。
   #[error("{entity_type} が見つかりません: {id}")]
   NotFound {
      /// エンティティの種類（"ToDo" など）
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },
}
