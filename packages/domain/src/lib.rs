//! # ToDo Liste ドメイン層
//!
//! ToDo 管理の中核となるドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`todo`] - ToDo エントリと値オブジェクト
//! - [`validation`] - フィールド単位のバリデーションエラー
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use todo_domain::todo::{TodoEntry, TodoInput};
//!
//! let now = Utc::now();
//! let input = TodoInput {
//!     name:        Some("Buy milk".to_string()),
//!     description: None,
//!     due_time:    Some(now + Duration::days(1)),
//!     done:        false,
//! };
//!
//! let entry = TodoEntry::for_create(input, now).unwrap();
//! assert!(entry.id().is_none());
//! ```

pub mod clock;
pub mod error;
pub mod todo;
pub mod validation;

pub use error::DomainError;
