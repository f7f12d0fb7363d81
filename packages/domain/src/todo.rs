//! # ToDo エントリ
//!
//! 1 件の ToDo（名前・説明・期限・完了フラグ）を表現するドメインモデル。
//!
//! ## 識別子の扱い
//!
//! 識別子（[`TodoId`]）はストアが採番する。エントリは永続化されるまで
//! 識別子を持たず、作成時に呼び出し元が指定した識別子は必ず破棄される
//! （[`TodoEntry::clear_id`]）。
//!
//! ## 検証ルール
//!
//! | フィールド | ルール |
//! |-----------|--------|
//! | `name` | 必須（空白のみは不可）、3〜100 文字 |
//! | `description` | 任意、500 文字以内 |
//! | `dueTime` | 任意、指定時は現在より未来であること |
//! | `done` | 省略時は `false` |
//!
//! 検証は API の入口で [`TodoEntry::for_create`] / [`TodoEntry::for_update`]
//! を通して行い、ストアは検証しない。
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use todo_domain::todo::{TodoEntry, TodoId, TodoInput};
//!
//! let now = Utc::now();
//! let mut entry = TodoEntry::for_create(
//!     TodoInput {
//!         name:        Some("Buy milk".to_string()),
//!         description: Some(String::new()),
//!         due_time:    Some(now + Duration::days(1)),
//!         done:        false,
//!     },
//!     now,
//! )
//! .unwrap();
//!
//! entry = entry.with_id(TodoId::from_i64(1));
//! assert_eq!(entry.id(), Some(TodoId::from_i64(1)));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, validation::ValidationErrors};

/// 名前の最小文字数
pub const MIN_NAME_LENGTH: usize = 3;

/// 名前の最大文字数
pub const MAX_NAME_LENGTH: usize = 100;

/// 説明の最大文字数
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

// =========================================================================
// TodoId
// =========================================================================

/// ToDo の一意識別子
///
/// ストアが採番する正の整数。一度割り当てられた値は変更されず、
/// 削除後も再利用されない。
#[derive(
   Debug,
   Clone,
   Copy,
   PartialEq,
   Eq,
   Hash,
   PartialOrd,
   Ord,
   Serialize,
   Deserialize,
   derive_more::Display,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
   pub fn from_i64(value: i64) -> Self {
      Self(value)
   }

   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

// =========================================================================
// TodoName
// =========================================================================

/// ToDo の名前（値オブジェクト）
///
/// # 不変条件
///
/// - 空白以外の文字を 1 文字以上含む
/// - 3 文字以上 100 文字以内（Unicode スカラー値単位、前後の空白も数える）
///
/// 入力された文字列をそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoName(String);

impl TodoName {
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();

      if value.trim().is_empty() {
         return Err(DomainError::Validation("名前は必須です".to_string()));
      }

      let length = value.chars().count();
      if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
         return Err(DomainError::Validation(format!(
            "名前は {MIN_NAME_LENGTH} 文字以上 {MAX_NAME_LENGTH} 文字以内で入力してください"
         )));
      }

      Ok(Self(value))
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl std::fmt::Display for TodoName {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "{}", self.0)
   }
}

// =========================================================================
// TodoDescription
// =========================================================================

/// ToDo の説明（値オブジェクト）
///
/// 空文字列を許容する。入力された文字列をそのまま保持する（トリムしない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDescription(String);

impl TodoDescription {
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();

      if value.chars().count() > MAX_DESCRIPTION_LENGTH {
         return Err(DomainError::Validation(format!(
            "説明は {MAX_DESCRIPTION_LENGTH} 文字以内で入力してください"
         )));
      }

      Ok(Self(value))
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// 期限が `now` より未来であることを確認する
pub fn ensure_future(
   due_time: DateTime<Utc>,
   now: DateTime<Utc>,
) -> Result<DateTime<Utc>, DomainError> {
   if due_time <= now {
      return Err(DomainError::Validation(
         "期限は未来の日時を指定してください".to_string(),
      ));
   }
   Ok(due_time)
}

// =========================================================================
// TodoInput
// =========================================================================

/// 未検証の入力値
///
/// API 層がリクエストボディをデコードした直後の値。
/// [`TodoEntry::for_create`] / [`TodoEntry::for_update`] で検証する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoInput {
   pub name:        Option<String>,
   pub description: Option<String>,
   pub due_time:    Option<DateTime<Utc>>,
   pub done:        bool,
}

// =========================================================================
// TodoEntry
// =========================================================================

/// ToDo エントリ
///
/// `id` は永続化されるまで `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
   id:          Option<TodoId>,
   name:        TodoName,
   description: Option<TodoDescription>,
   due_time:    Option<DateTime<Utc>>,
   done:        bool,
}

impl TodoEntry {
   /// 検証済みの値からエントリを作成する（識別子なし）
   pub fn new(
      name: TodoName,
      description: Option<TodoDescription>,
      due_time: Option<DateTime<Utc>>,
      done: bool,
   ) -> Self {
      Self {
         id: None,
         name,
         description,
         due_time,
         done,
      }
   }

   /// 作成リクエストの入力を検証する
   ///
   /// 期限が指定されている場合は `now` より未来であることも検証する。
   /// 違反したフィールドはすべて [`ValidationErrors`] に集められる。
   pub fn for_create(input: TodoInput, now: DateTime<Utc>) -> Result<Self, ValidationErrors> {
      Self::validate(input, now)
   }

   /// 更新リクエストの入力を検証する
   ///
   /// 作成時と同じルールで検証する。
   pub fn for_update(input: TodoInput, now: DateTime<Utc>) -> Result<Self, ValidationErrors> {
      Self::validate(input, now)
   }

   fn validate(input: TodoInput, now: DateTime<Utc>) -> Result<Self, ValidationErrors> {
      let mut errors = ValidationErrors::new();

      let name = errors.capture("name", TodoName::new(input.name.unwrap_or_default()));
      let description = input
         .description
         .and_then(|d| errors.capture("description", TodoDescription::new(d)));
      let due_time = input
         .due_time
         .and_then(|due| errors.capture("dueTime", ensure_future(due, now)));

      match name {
         Some(name) => errors.into_result(Self::new(name, description, due_time, input.done)),
         None => Err(errors),
      }
   }

   /// ストアから読み出した値でエントリを復元する
   pub fn from_db(
      id: TodoId,
      name: TodoName,
      description: Option<TodoDescription>,
      due_time: Option<DateTime<Utc>>,
      done: bool,
   ) -> Self {
      Self {
         id: Some(id),
         name,
         description,
         due_time,
         done,
      }
   }

   /// 識別子を破棄する
   ///
   /// 作成時に呼び出し元が指定した識別子を無視するために使う。
   pub fn clear_id(&mut self) {
      self.id = None;
   }

   /// ストアが採番した識別子を付与する
   pub fn with_id(self, id: TodoId) -> Self {
      Self { id: Some(id), ..self }
   }

   /// 可変フィールドを `values` で丸ごと置き換える
   ///
   /// 部分更新ではない。`values` で省略されたフィールドは
   /// 既定値（`None` / `false`）になる。識別子は保持する。
   pub fn replace_values(&mut self, values: TodoEntry) {
      self.name = values.name;
      self.description = values.description;
      self.due_time = values.due_time;
      self.done = values.done;
   }

   // --- ゲッター ---

   pub fn id(&self) -> Option<TodoId> {
      self.id
   }

   pub fn name(&self) -> &TodoName {
      &self.name
   }

   pub fn description(&self) -> Option<&TodoDescription> {
      self.description.as_ref()
   }

   pub fn due_time(&self) -> Option<DateTime<Utc>> {
      self.due_time
   }

   pub fn done(&self) -> bool {
      self.done
   }
}

#[cfg(test)]
mod tests {
   use chrono::Duration;
   use pretty_assertions::assert_eq;
   use rstest::{fixture, rstest};

   use super::*;

   #[fixture]
   fn now() -> DateTime<Utc> {
      DateTime::from_timestamp(1_700_000_000, 0).unwrap()
   }

   fn input(name: &str, due_time: Option<DateTime<Utc>>) -> TodoInput {
      TodoInput {
         name: Some(name.to_string()),
         description: Some("Beschreibung".to_string()),
         due_time,
         done: false,
      }
   }

   fn fields(errors: &ValidationErrors) -> Vec<&'static str> {
      errors.iter().map(|e| e.field).collect()
   }

   // =========================================================================
   // TodoName
   // =========================================================================

   #[rstest]
   #[case("abc")]
   #[case("Buy milk")]
   #[case("牛乳を買う")]
   fn test_名前は3文字以上を受け入れる(#[case] value: &str) {
      assert_eq!(TodoName::new(value).unwrap().as_str(), value);
   }

   #[rstest]
   #[case("")]
   #[case("   ")]
   #[case("ab")]
   fn test_名前は空白や3文字未満を拒否する(#[case] value: &str) {
      assert!(TodoName::new(value).is_err());
   }

   #[test]
   fn test_名前は100文字ちょうどを受け入れ101文字を拒否する() {
      assert!(TodoName::new("a".repeat(100)).is_ok());
      assert!(TodoName::new("a".repeat(101)).is_err());
   }

   #[test]
   fn test_名前はマルチバイト文字を文字数で数える() {
      // 3 文字だがバイト数は 9
      assert!(TodoName::new("買い物").is_ok());
   }

   #[rstest]
   #[case("  ab  ")]
   #[case("  Task  ")]
   fn test_名前は前後の空白も文字数に含めそのまま保持する(#[case] value: &str) {
      assert_eq!(TodoName::new(value).unwrap().as_str(), value);
   }

   #[test]
   fn test_名前は前後の空白を含めて100文字を超えると拒否する() {
      let value = format!(" {} ", "a".repeat(99));

      assert!(TodoName::new(value).is_err());
   }

   // =========================================================================
   // TodoDescription
   // =========================================================================

   #[test]
   fn test_説明は空文字列と500文字を受け入れる() {
      assert!(TodoDescription::new("").is_ok());
      assert!(TodoDescription::new("x".repeat(500)).is_ok());
   }

   #[test]
   fn test_説明は501文字を拒否する() {
      assert!(TodoDescription::new("x".repeat(501)).is_err());
   }

   // =========================================================================
   // for_create / for_update
   // =========================================================================

   #[rstest]
   fn test_for_createは正しい入力から識別子なしのエントリを作る(now: DateTime<Utc>) {
      let due = now + Duration::days(1);

      let entry = TodoEntry::for_create(input("Buy milk", Some(due)), now).unwrap();

      assert_eq!(entry.id(), None);
      assert_eq!(entry.name().as_str(), "Buy milk");
      assert_eq!(entry.description().map(|d| d.as_str()), Some("Beschreibung"));
      assert_eq!(entry.due_time(), Some(due));
      assert!(!entry.done());
   }

   #[rstest]
   fn test_for_createは名前が短いと拒否する(now: DateTime<Utc>) {
      let errors = TodoEntry::for_create(input("ab", None), now).unwrap_err();

      assert_eq!(fields(&errors), vec!["name"]);
   }

   #[rstest]
   fn test_for_createは名前と過去の期限の両方を報告する(now: DateTime<Utc>) {
      let yesterday = now - Duration::days(1);

      let errors = TodoEntry::for_create(input("ab", Some(yesterday)), now).unwrap_err();

      assert_eq!(fields(&errors), vec!["name", "dueTime"]);
   }

   #[rstest]
   fn test_for_createは現在時刻ちょうどの期限を拒否する(now: DateTime<Utc>) {
      let errors = TodoEntry::for_create(input("Task", Some(now)), now).unwrap_err();

      assert_eq!(fields(&errors), vec!["dueTime"]);
   }

   #[rstest]
   fn test_for_createは名前の欠落を報告する(now: DateTime<Utc>) {
      let errors = TodoEntry::for_create(TodoInput::default(), now).unwrap_err();

      assert_eq!(fields(&errors), vec!["name"]);
   }

   #[rstest]
   fn test_for_createは長すぎる説明を報告する(now: DateTime<Utc>) {
      let mut input = input("Task", None);
      input.description = Some("x".repeat(501));

      let errors = TodoEntry::for_create(input, now).unwrap_err();

      assert_eq!(fields(&errors), vec!["description"]);
   }

   #[rstest]
   fn test_for_updateは過去の期限を拒否する(now: DateTime<Utc>) {
      let yesterday = now - Duration::days(1);

      let errors = TodoEntry::for_update(input("Task", Some(yesterday)), now).unwrap_err();

      assert_eq!(fields(&errors), vec!["dueTime"]);
   }

   #[rstest]
   fn test_for_updateは未来の期限を受け入れる(now: DateTime<Utc>) {
      let tomorrow = now + Duration::days(1);

      let entry = TodoEntry::for_update(input("Task", Some(tomorrow)), now).unwrap();

      assert_eq!(entry.due_time(), Some(tomorrow));
   }

   #[rstest]
   fn test_for_updateも名前のルールは検証する(now: DateTime<Utc>) {
      assert!(TodoEntry::for_update(input("ab", None), now).is_err());
   }

   // =========================================================================
   // 識別子と置き換え
   // =========================================================================

   #[rstest]
   fn test_clear_idは呼び出し元の識別子を破棄する(now: DateTime<Utc>) {
      let mut entry = TodoEntry::for_create(input("Task", None), now)
         .unwrap()
         .with_id(TodoId::from_i64(99));

      entry.clear_id();

      assert_eq!(entry.id(), None);
   }

   #[rstest]
   fn test_replace_valuesは全フィールドを置き換え識別子を保持する(now: DateTime<Utc>) {
      let mut existing = TodoEntry::for_create(input("Task", Some(now + Duration::days(1))), now)
         .unwrap()
         .with_id(TodoId::from_i64(10));
      let values = TodoEntry::for_update(
         TodoInput {
            name: Some("Updated".to_string()),
            ..TodoInput::default()
         },
         now,
      )
      .unwrap();

      existing.replace_values(values);

      assert_eq!(existing.id(), Some(TodoId::from_i64(10)));
      assert_eq!(existing.name().as_str(), "Updated");
      // 省略したフィールドは既定値になる
      assert_eq!(existing.description(), None);
      assert_eq!(existing.due_time(), None);
      assert!(!existing.done());
   }

   #[test]
   fn test_todo_idは数値として表示される() {
      assert_eq!(TodoId::from_i64(5).to_string(), "5");
      assert_eq!(TodoId::from_i64(5).as_i64(), 5);
   }
}
