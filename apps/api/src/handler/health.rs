//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! {"status":"healthy","version":"0.1.0"}
//! ```
//!
//! ストアへの接続は確認せず、プロセスが応答できることだけを返す。

use axum::Json;
use todo_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK を返す。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
