//! # テスト用インメモリリポジトリ
//!
//! ユースケース・ハンドラのテストで使用する。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
   collections::BTreeMap,
   sync::{Arc, Mutex},
};

use async_trait::async_trait;
use todo_domain::todo::{TodoEntry, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

#[derive(Debug, Default)]
struct Store {
   last_id: i64,
   entries: BTreeMap<TodoId, TodoEntry>,
}

/// `BTreeMap` に保持するインメモリ実装
///
/// SQLite 実装と同じく、ID は 1 から単調増加し再利用されない。
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
   store: Arc<Mutex<Store>>,
}

impl InMemoryTodoRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 保持しているエントリ数
   pub fn len(&self) -> usize {
      self.store.lock().unwrap().entries.len()
   }

   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
   async fn put(&self, entry: &TodoEntry) -> Result<TodoEntry, InfraError> {
      let mut store = self.store.lock().unwrap();

      let stored = match entry.id() {
         Some(id) => {
            if !store.entries.contains_key(&id) {
               return Err(InfraError::row_missing("ToDo", id.to_string()));
            }
            entry.clone()
         }
         None => {
            store.last_id += 1;
            entry.clone().with_id(TodoId::from_i64(store.last_id))
         }
      };

      if let Some(id) = stored.id() {
         store.entries.insert(id, stored.clone());
      }
      Ok(stored)
   }

   async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoEntry>, InfraError> {
      Ok(self.store.lock().unwrap().entries.get(&id).cloned())
   }

   async fn find_all(&self) -> Result<Vec<TodoEntry>, InfraError> {
      Ok(self.store.lock().unwrap().entries.values().cloned().collect())
   }

   async fn exists_by_id(&self, id: TodoId) -> Result<bool, InfraError> {
      Ok(self.store.lock().unwrap().entries.contains_key(&id))
   }

   async fn delete_by_id(&self, id: TodoId) -> Result<(), InfraError> {
      self.store.lock().unwrap().entries.remove(&id);
      Ok(())
   }
}
