//! # TodoRepository
//!
//! ToDo エントリの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ストアが採番**: `id` を持たないエントリは INSERT し、
//!   SQLite の AUTOINCREMENT で採番する（削除済みの ID は再利用されない）
//! - **全置換**: `id` を持つエントリは可変カラムをすべて UPDATE する
//! - **不在は空の結果**: 見つからない場合はエラーではなく `None` / `false`

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use todo_domain::todo::{TodoDescription, TodoEntry, TodoId, TodoName};

use crate::error::InfraError;

/// ToDo ストアのトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
   /// エントリを保存する
   ///
   /// `id` が無ければ新規作成して採番し、あれば同じ `id` の行を置き換える。
   /// 置き換え対象の行が存在しない場合は `RowMissing` を返す。
   async fn put(&self, entry: &TodoEntry) -> Result<TodoEntry, InfraError>;

   /// ID でエントリを検索する
   async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoEntry>, InfraError>;

   /// 全エントリを ID 昇順で取得する
   async fn find_all(&self) -> Result<Vec<TodoEntry>, InfraError>;

   /// ID のエントリが存在するか
   async fn exists_by_id(&self, id: TodoId) -> Result<bool, InfraError>;

   /// ID のエントリを削除する（存在しなければ何もしない）
   async fn delete_by_id(&self, id: TodoId) -> Result<(), InfraError>;
}

/// `todos` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
   id:          i64,
   name:        String,
   description: Option<String>,
   due_time:    Option<DateTime<Utc>>,
   done:        bool,
}

impl TryFrom<TodoRow> for TodoEntry {
   type Error = InfraError;

   fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
      let name = TodoName::new(row.name)
         .map_err(|e| InfraError::unexpected(format!("不正な name (id={}): {e}", row.id)))?;
      let description = row
         .description
         .map(TodoDescription::new)
         .transpose()
         .map_err(|e| InfraError::unexpected(format!("不正な description (id={}): {e}", row.id)))?;

      Ok(TodoEntry::from_db(
         TodoId::from_i64(row.id),
         name,
         description,
         row.due_time,
         row.done,
      ))
   }
}

/// SQLite 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
   pool: SqlitePool,
}

impl SqliteTodoRepository {
   pub fn new(pool: SqlitePool) -> Self {
      Self { pool }
   }

   async fn insert(&self, entry: &TodoEntry) -> Result<TodoEntry, InfraError> {
      let result = sqlx::query(
         r#"
         INSERT INTO todos (name, description, due_time, done)
         VALUES (?, ?, ?, ?)
         "#,
      )
      .bind(entry.name().as_str())
      .bind(entry.description().map(TodoDescription::as_str))
      .bind(entry.due_time())
      .bind(entry.done())
      .execute(&self.pool)
      .await?;

      let id = TodoId::from_i64(result.last_insert_rowid());
      tracing::debug!(%id, "ToDo を作成しました");
      Ok(entry.clone().with_id(id))
   }

   async fn update(&self, id: TodoId, entry: &TodoEntry) -> Result<TodoEntry, InfraError> {
      let result = sqlx::query(
         r#"
         UPDATE todos
         SET name = ?, description = ?, due_time = ?, done = ?
         WHERE id = ?
         "#,
      )
      .bind(entry.name().as_str())
      .bind(entry.description().map(TodoDescription::as_str))
      .bind(entry.due_time())
      .bind(entry.done())
      .bind(id.as_i64())
      .execute(&self.pool)
      .await?;

      if result.rows_affected() == 0 {
         return Err(InfraError::row_missing("ToDo", id.to_string()));
      }

      Ok(entry.clone())
   }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(id = ?entry.id()))]
   async fn put(&self, entry: &TodoEntry) -> Result<TodoEntry, InfraError> {
      match entry.id() {
         Some(id) => self.update(id, entry).await,
         None => self.insert(entry).await,
      }
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoEntry>, InfraError> {
      let row: Option<TodoRow> = sqlx::query_as(
         r#"
         SELECT id, name, description, due_time, done
         FROM todos
         WHERE id = ?
         "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      row.map(TodoEntry::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<TodoEntry>, InfraError> {
      let rows: Vec<TodoRow> = sqlx::query_as(
         r#"
         SELECT id, name, description, due_time, done
         FROM todos
         ORDER BY id ASC
         "#,
      )
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(TodoEntry::try_from).collect()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn exists_by_id(&self, id: TodoId) -> Result<bool, InfraError> {
      let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos WHERE id = ?")
         .bind(id.as_i64())
         .fetch_one(&self.pool)
         .await?;

      Ok(count > 0)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete_by_id(&self, id: TodoId) -> Result<(), InfraError> {
      sqlx::query("DELETE FROM todos WHERE id = ?")
         .bind(id.as_i64())
         .execute(&self.pool)
         .await?;

      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<SqliteTodoRepository>();
      assert_send_sync::<Box<dyn TodoRepository>>();
   }

   #[test]
   fn test_不正な名前の行はunexpectedエラーになる() {
      let row = TodoRow {
         id:          3,
         name:        "x".to_string(),
         description: None,
         due_time:    None,
         done:        false,
      };

      let err = TodoEntry::try_from(row).unwrap_err();

      assert!(matches!(err.kind(), crate::InfraErrorKind::Unexpected(_)));
   }
}
