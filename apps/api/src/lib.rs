//! # ToDo Liste API サーバー
//!
//! ToDo エントリを管理する REST API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   handler   │────▶│   usecase   │────▶│ repository  │────▶│   SQLite    │
//! │  (axum)     │     │             │     │  (infra)    │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーターとミドルウェアの組み立て
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ビジネスロジック
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use todo_api::{app::create_router, config::AppConfig};
//! use todo_domain::clock::SystemClock;
//! use todo_infra::{db, repository::SqliteTodoRepository};
//!
//! let config = AppConfig::from_env()?;
//! let pool = db::create_pool(&config.database.url).await?;
//! let app = create_router(
//!     &config,
//!     Arc::new(SqliteTodoRepository::new(pool)),
//!     Arc::new(SystemClock),
//! );
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
