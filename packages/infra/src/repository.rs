//! # リポジトリ実装
//!
//! ToDo エントリの永続化を担当する。
//!
//! - **トレイト境界**: ユースケースは [`TodoRepository`] にのみ依存する
//! - **SQLite 実装**: 本番では [`SqliteTodoRepository`] を注入する

pub mod todo_repository;

pub use todo_repository::{SqliteTodoRepository, TodoRepository};
