//! テスト共通フィクスチャ
//!
//! インメモリ SQLite を使う統合テストで共通利用するヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;
use todo_domain::todo::{TodoDescription, TodoEntry, TodoName};
use todo_infra::db;

/// マイグレーション適用済みのインメモリ DB を用意する
pub async fn setup_pool() -> SqlitePool {
   let pool = db::create_in_memory_pool().await.unwrap();
   db::run_migrations(&pool).await.unwrap();
   pool
}

/// テスト用の固定時刻
pub fn test_due_time() -> DateTime<Utc> {
   Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap()
}

/// 識別子を持たないエントリを作成する
pub fn new_entry(name: &str) -> TodoEntry {
   TodoEntry::new(
      TodoName::new(name).unwrap(),
      Some(TodoDescription::new("").unwrap()),
      Some(test_due_time()),
      false,
   )
}
