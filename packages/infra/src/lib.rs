//! # ToDo Liste インフラ層
//!
//! 外部システム（SQLite）との接続を担当する。
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プールの作成とマイグレーション
//! - [`repository`] - ToDo ストアのトレイトと SQLite 実装
//! - [`error`] - インフラ層のエラー定義
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
