//! # ユースケース層
//!
//! ToDo 管理のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: ストアを `Arc<dyn TodoRepository>` で外部から注入
//! - **薄いハンドラ**: ハンドラはデコードと応答の組み立てのみを行う
//!
//! ## モジュール構成
//!
//! - `todo`: ToDo の CRUD
//! - `auth`: 固定資格情報によるログイン

pub mod auth;
pub mod todo;

pub use auth::{AuthUseCaseImpl, LoginResult};
pub use todo::TodoUseCaseImpl;
