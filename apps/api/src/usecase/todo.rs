//! ToDo 管理ユースケース

use std::sync::Arc;

use todo_domain::{
   DomainError,
   todo::{TodoEntry, TodoId},
};
use todo_infra::repository::TodoRepository;

use crate::error::ApiError;

fn not_found(id: TodoId) -> ApiError {
   let err = DomainError::NotFound {
      entity_type: "ToDo",
      id:          id.to_string(),
   };
   ApiError::NotFound(err.to_string())
}

/// ToDo 管理ユースケース
///
/// 入力値の検証は呼び出し側（ハンドラ）で済ませておく。
pub struct TodoUseCaseImpl {
   todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
   pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
      Self { todo_repository }
   }

   /// エントリを新規作成する
   ///
   /// 呼び出し元が識別子を指定していても破棄し、ストアに採番させる。
   #[tracing::instrument(skip_all, level = "debug")]
   pub async fn save(&self, mut entry: TodoEntry) -> Result<TodoEntry, ApiError> {
      entry.clear_id();
      let stored = self.todo_repository.put(&entry).await?;
      Ok(stored)
   }

   /// ID でエントリを取得する
   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   pub async fn get(&self, id: TodoId) -> Result<TodoEntry, ApiError> {
      self
         .todo_repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| not_found(id))
   }

   /// 全エントリを ID 昇順で取得する
   #[tracing::instrument(skip_all, level = "debug")]
   pub async fn get_all(&self) -> Result<Vec<TodoEntry>, ApiError> {
      let entries = self.todo_repository.find_all().await?;
      Ok(entries)
   }

   /// エントリの可変フィールドを丸ごと置き換える
   ///
   /// `values` で省略されたフィールドは既定値に戻る（部分更新ではない）。
   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   pub async fn update(&self, id: TodoId, values: TodoEntry) -> Result<TodoEntry, ApiError> {
      let mut entry = self.get(id).await?;
      entry.replace_values(values);

      let updated = self.todo_repository.put(&entry).await?;
      Ok(updated)
   }

   /// エントリを削除する
   ///
   /// 存在確認と削除は 1 つのトランザクションではない。
   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   pub async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
      if !self.todo_repository.exists_by_id(id).await? {
         return Err(not_found(id));
      }

      self.todo_repository.delete_by_id(id).await?;
      Ok(())
   }
}
