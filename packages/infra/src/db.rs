//! # SQLite データベース接続管理
//!
//! データベース接続プールの作成とマイグレーションを行う。
//!
//! ## 設計方針
//!
//! - **組み込み DB**: 単一テナントの小規模ユーティリティのため、
//!   別プロセスのデータベースサーバーを必要としない SQLite を採用
//! - **接続プール**: sqlx の `SqlitePool` で接続を再利用
//! - **埋め込みマイグレーション**: `sqlx::migrate!()` でスキーマをバイナリに埋め込む
//!
//! ## 接続 URL の例
//!
//! | URL | 用途 |
//! |-----|------|
//! | `sqlite://todos.db` | ファイル（存在しなければ作成） |
//! | `sqlite::memory:` | インメモリ（テスト・一時実行） |
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::db;
//!
//! let pool = db::create_pool("sqlite://todos.db").await?;
//! db::run_migrations(&pool).await?;
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
   SqlitePool,
   sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::InfraError;

/// データベースマイグレーションを実行する
///
/// 適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
   sqlx::migrate!("../../migrations").run(pool).await?;
   Ok(())
}

/// SQLite 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを共有する。
/// データベースファイルが存在しない場合は作成する。
///
/// `sqlite::memory:` が指定された場合は [`create_in_memory_pool`] に委譲する
/// （インメモリ DB は接続ごとに別の DB になるため）。
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, InfraError> {
   if is_in_memory(database_url) {
      return create_in_memory_pool().await;
   }

   let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

   let pool = SqlitePoolOptions::new()
      .max_connections(5)
      .acquire_timeout(Duration::from_secs(5))
      .connect_with(options)
      .await?;

   Ok(pool)
}

/// インメモリ SQLite の接続プールを作成する
///
/// 接続を 1 本に固定し、アイドル切断もしない。
/// 接続が閉じられると DB の内容が失われるため。
pub async fn create_in_memory_pool() -> Result<SqlitePool, InfraError> {
   let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

   let pool = SqlitePoolOptions::new()
      .max_connections(1)
      .min_connections(1)
      .idle_timeout(None)
      .max_lifetime(None)
      .connect_with(options)
      .await?;

   Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
   database_url == "sqlite::memory:" || database_url.contains(":memory:")
}
