//! # ToDo ハンドラ
//!
//! ToDo の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /todos` - 作成
//! - `GET /todos` - 一覧（ID 昇順）
//! - `GET /todos/{id}` - 取得
//! - `PUT /todos/{id}`, `PATCH /todos/{id}` - 全フィールド置換
//! - `DELETE /todos/{id}` - 削除
//!
//! リクエストボディとパスの ID は抽出器に任せず明示的にデコードする。
//! JSON の構文エラーや整数でない ID は RFC 9457 形式の 400 になる。

use std::sync::Arc;

use axum::{
   Json,
   body::Bytes,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use todo_domain::{
   clock::Clock,
   todo::{TodoEntry, TodoId, TodoInput},
   validation::ValidationErrors,
};

use crate::{error::ApiError, usecase::TodoUseCaseImpl};

/// ToDo API の共有状態
pub struct TodoState {
   pub usecase: TodoUseCaseImpl,
   pub clock:   Arc<dyn Clock>,
}

// --- リクエスト/レスポンス型 ---

/// 作成・更新リクエスト
///
/// `id` は受け付けるが使用しない（作成時はストアが採番し、
/// 更新時はパスの ID が優先される）。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
   pub id:          Option<i64>,
   pub name:        Option<String>,
   pub description: Option<String>,
   pub due_time:    Option<String>,
   pub done:        Option<bool>,
}

/// ToDo DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
   pub id:          Option<i64>,
   pub name:        String,
   pub description: Option<String>,
   pub due_time:    Option<String>,
   pub done:        bool,
}

impl From<&TodoEntry> for TodoDto {
   fn from(entry: &TodoEntry) -> Self {
      Self {
         id:          entry.id().map(|id| id.as_i64()),
         name:        entry.name().as_str().to_string(),
         description: entry.description().map(|d| d.as_str().to_string()),
         due_time:    entry
            .due_time()
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
         done:        entry.done(),
      }
   }
}

// --- デコード ---

/// 期限の文字列を解釈する
///
/// RFC 3339（`2030-01-01T10:00:00Z`）と、オフセットなしの ISO 8601
/// （`2030-01-01T10:00:00`, `2030-01-01T10:00`）を受け付ける。
/// オフセットなしの値は UTC として扱う。
pub fn parse_due_time(value: &str) -> Option<DateTime<Utc>> {
   let value = value.trim();

   if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
      return Some(parsed.with_timezone(&Utc));
   }

   ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
      .iter()
      .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
      .map(|naive| naive.and_utc())
}

/// デコード済みの入力と、デコード時に見つかったフィールドエラー
struct DecodedInput {
   input:  TodoInput,
   errors: ValidationErrors,
}

impl DecodedInput {
   /// 入力を検証し、デコード時のエラーと合わせて返す
   ///
   /// 解釈できなかった期限は `None` として検証に渡すため、
   /// `dueTime` のエラーが二重に記録されることはない。
   fn validate(
      self,
      validate: impl FnOnce(TodoInput) -> Result<TodoEntry, ValidationErrors>,
   ) -> Result<TodoEntry, ApiError> {
      match validate(self.input) {
         Ok(entry) => Ok(self.errors.into_result(entry)?),
         Err(mut errors) => {
            errors.append(self.errors);
            Err(errors.into())
         }
      }
   }
}

/// リクエストボディを検証前の入力値にデコードする
fn decode_input(body: &Bytes) -> Result<DecodedInput, ApiError> {
   let request: TodoRequest = serde_json::from_slice(body)
      .map_err(|e| ApiError::BadRequest(format!("リクエストボディが不正です: {e}")))?;

   let mut errors = ValidationErrors::new();
   let due_time = request.due_time.as_deref().and_then(|raw| {
      let parsed = parse_due_time(raw);
      if parsed.is_none() {
         errors.push("dueTime", format!("日時の形式が不正です: {raw}"));
      }
      parsed
   });

   Ok(DecodedInput {
      input: TodoInput {
         name: request.name,
         description: request.description,
         due_time,
         done: request.done.unwrap_or(false),
      },
      errors,
   })
}

/// パスパラメータの ID を解釈する
fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
   raw.trim()
      .parse::<i64>()
      .map(TodoId::from_i64)
      .map_err(|_| ApiError::BadRequest(format!("ID は整数で指定してください: {raw}")))
}

// --- ハンドラ ---

/// POST /todos
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたエントリ
/// - `400 Bad Request`: JSON 構文エラー、バリデーションエラー
#[tracing::instrument(skip_all)]
pub async fn create_todo(
   State(state): State<Arc<TodoState>>,
   body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
   let decoded = decode_input(&body)?;
   tracing::info!(name = ?decoded.input.name, "ToDo を作成します");

   let now = state.clock.now();
   let entry = decoded.validate(|input| TodoEntry::for_create(input, now))?;
   let stored = state.usecase.save(entry).await?;

   Ok((StatusCode::CREATED, Json(TodoDto::from(&stored))))
}

/// GET /todos
#[tracing::instrument(skip_all)]
pub async fn list_todos(
   State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, ApiError> {
   tracing::info!("ToDo 一覧を取得します");
   let entries = state.usecase.get_all().await?;

   let items: Vec<TodoDto> = entries.iter().map(TodoDto::from).collect();
   Ok(Json(items))
}

/// GET /todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: エントリ
/// - `400 Bad Request`: ID が整数でない
/// - `404 Not Found`: エントリが存在しない
#[tracing::instrument(skip_all)]
pub async fn get_todo(
   State(state): State<Arc<TodoState>>,
   Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let id = parse_id(&raw_id)?;
   tracing::info!(%id, "ToDo を取得します");

   let entry = state.usecase.get(id).await?;
   Ok(Json(TodoDto::from(&entry)))
}

/// PUT /todos/{id}, PATCH /todos/{id}
///
/// どちらのメソッドも全フィールドを置き換える。
/// ボディで省略したフィールドは既定値（`null` / `false`）になる。
/// 検証ルールは作成時と同じ。
#[tracing::instrument(skip_all)]
pub async fn update_todo(
   State(state): State<Arc<TodoState>>,
   Path(raw_id): Path<String>,
   body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
   let id = parse_id(&raw_id)?;
   let decoded = decode_input(&body)?;
   tracing::info!(%id, "ToDo を更新します");

   let now = state.clock.now();
   let values = decoded.validate(|input| TodoEntry::for_update(input, now))?;
   let updated = state.usecase.update(id, values).await?;

   Ok(Json(TodoDto::from(&updated)))
}

/// DELETE /todos/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: エントリが存在しない
#[tracing::instrument(skip_all)]
pub async fn delete_todo(
   State(state): State<Arc<TodoState>>,
   Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let id = parse_id(&raw_id)?;
   tracing::info!(%id, "ToDo を削除します");

   state.usecase.delete(id).await?;
   Ok(StatusCode::NO_CONTENT)
}
