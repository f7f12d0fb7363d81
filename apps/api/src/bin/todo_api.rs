//! # ToDo Liste API サーバー
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env を読み込む）
//! cargo run -p todo-api
//!
//! # 環境変数を指定
//! TODO_PORT=9000 DATABASE_URL=sqlite::memory: cargo run -p todo-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use todo_api::{app::create_router, config::AppConfig};
use todo_domain::clock::SystemClock;
use todo_infra::{db, repository::SqliteTodoRepository};
use todo_shared::observability::{LogFormat, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(LogFormat::from_env());

   let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "ToDo API サーバーを起動します: {}:{}",
      config.server.host,
      config.server.port
   );

   let pool = db::create_pool(&config.database.url)
      .await
      .context("データベース接続に失敗しました")?;
   db::run_migrations(&pool)
      .await
      .context("マイグレーションに失敗しました")?;
   tracing::info!(url = %config.database.url, "データベースに接続しました");

   let app = create_router(
      &config,
      Arc::new(SqliteTodoRepository::new(pool)),
      Arc::new(SystemClock),
   );

   let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
      .parse()
      .context("バインドアドレスが不正です")?;
   let listener = TcpListener::bind(addr)
      .await
      .with_context(|| format!("{addr} にバインドできません"))?;
   tracing::info!("ToDo API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
