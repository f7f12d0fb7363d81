//! # 認証ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /auth/login` - 固定資格情報でログインし、トークンを発行する
//!
//! 発行されたトークンは他のエンドポイントで検証されない。

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, usecase::AuthUseCaseImpl};

/// 認証 API の共有状態
pub struct AuthState {
   pub usecase: AuthUseCaseImpl,
}

/// ログインリクエスト
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
   #[serde(default)]
   pub username: String,
   #[serde(default)]
   pub password: String,
}

/// ログインレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
   pub token:    String,
   pub username: String,
}

/// POST /auth/login
///
/// ## レスポンス
///
/// - `200 OK`: トークンとユーザー名
/// - `400 Bad Request`: JSON 構文エラー
/// - `401 Unauthorized`: 資格情報が一致しない
#[tracing::instrument(skip_all)]
pub async fn login(
   State(state): State<Arc<AuthState>>,
   body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
   let req: LoginRequest = serde_json::from_slice(&body)
      .map_err(|e| ApiError::BadRequest(format!("リクエストボディが不正です: {e}")))?;

   let result = state.usecase.login(&req.username, &req.password)?;
   tracing::info!(username = %result.username, "ログインしました");

   Ok(Json(LoginResponse {
      token:    result.token,
      username: result.username,
   }))
}
