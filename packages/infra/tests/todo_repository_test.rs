//! TodoRepository 統合テスト
//!
//! テストごとにインメモリ SQLite を作成するため、外部の DB は不要。
//!
//! 実行方法:
//! ```bash
//! cargo test -p todo-infra --test todo_repository_test
//! ```

mod common;

use common::{new_entry, setup_pool, test_due_time};
use pretty_assertions::assert_eq;
use todo_domain::todo::{TodoEntry, TodoId, TodoName};
use todo_infra::repository::{SqliteTodoRepository, TodoRepository};

#[tokio::test]
async fn test_putはidを採番して保存する() {
   let sut = SqliteTodoRepository::new(setup_pool().await);

   let stored = sut.put(&new_entry("Buy milk")).await.unwrap();

   assert_eq!(stored.id(), Some(TodoId::from_i64(1)));
   let found = sut.find_by_id(TodoId::from_i64(1)).await.unwrap();
   assert_eq!(found, Some(stored));
}

#[tokio::test]
async fn test_期限と説明が往復で保持される() {
   let sut = SqliteTodoRepository::new(setup_pool().await);

   let stored = sut.put(&new_entry("Walk the dog")).await.unwrap();
   let found = sut.find_by_id(stored.id().unwrap()).await.unwrap().unwrap();

   assert_eq!(found.due_time(), Some(test_due_time()));
   assert_eq!(found.description().map(|d| d.as_str()), Some(""));
   assert!(!found.done());
}

#[tokio::test]
async fn test_削除したidは再利用されない() {
   let sut = SqliteTodoRepository::new(setup_pool().await);

   let first = sut.put(&new_entry("first")).await.unwrap();
   sut.delete_by_id(first.id().unwrap()).await.unwrap();
   let second = sut.put(&new_entry("second")).await.unwrap();

   assert_eq!(second.id(), Some(TodoId::from_i64(2)));
}

#[tokio::test]
async fn test_find_allはid昇順で返す() {
   let sut = SqliteTodoRepository::new(setup_pool().await);
   for name in ["ccc", "aaa", "bbb"] {
      sut.put(&new_entry(name)).await.unwrap();
   }

   let all = sut.find_all().await.unwrap();

   let ids: Vec<i64> = all.iter().filter_map(|e| e.id()).map(|id| id.as_i64()).collect();
   let names: Vec<&str> = all.iter().map(|e| e.name().as_str()).collect();
   assert_eq!(ids, vec![1, 2, 3]);
   assert_eq!(names, vec!["ccc", "aaa", "bbb"]);
}

#[tokio::test]
async fn test_find_allは空のストアで空を返す() {
   let sut = SqliteTodoRepository::new(setup_pool().await);

   assert!(sut.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_idを持つエントリのputは全フィールドを置き換える() {
   let sut = SqliteTodoRepository::new(setup_pool().await);
   let stored = sut.put(&new_entry("Buy milk")).await.unwrap();
   let id = stored.id().unwrap();

   let replacement =
      TodoEntry::new(TodoName::new("Buy oat milk").unwrap(), None, None, true).with_id(id);
   sut.put(&replacement).await.unwrap();

   let found = sut.find_by_id(id).await.unwrap().unwrap();
   assert_eq!(found.name().as_str(), "Buy oat milk");
   assert_eq!(found.description(), None);
   assert_eq!(found.due_time(), None);
   assert!(found.done());
}

#[tokio::test]
async fn test_存在しない行へのputはrow_missingになる() {
   let sut = SqliteTodoRepository::new(setup_pool().await);

   let ghost = new_entry("ghost").with_id(TodoId::from_i64(42));
   let err = sut.put(&ghost).await.unwrap_err();

   assert_eq!(err.as_row_missing(), Some(("ToDo", "42")));
   assert!(sut.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_exists_by_idは存在を判定する() {
   let sut = SqliteTodoRepository::new(setup_pool().await);
   let stored = sut.put(&new_entry("exists")).await.unwrap();

   assert!(sut.exists_by_id(stored.id().unwrap()).await.unwrap());
   assert!(!sut.exists_by_id(TodoId::from_i64(99)).await.unwrap());
}

#[tokio::test]
async fn test_存在しないidの削除は何もしない() {
   let sut = SqliteTodoRepository::new(setup_pool().await);
   sut.put(&new_entry("keep me")).await.unwrap();

   sut.delete_by_id(TodoId::from_i64(99)).await.unwrap();

   assert_eq!(sut.find_all().await.unwrap().len(), 1);
}
