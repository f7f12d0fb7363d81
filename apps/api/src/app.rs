//! # ルーター構築
//!
//! ルーティングとミドルウェア（リクエストトレース、CORS）を組み立てる。
//! バイナリと統合テストの双方から使用する。

use std::sync::Arc;

use axum::{
   Router,
   http::HeaderValue,
   routing::{get, post},
};
use todo_domain::clock::Clock;
use todo_infra::repository::TodoRepository;
use tower_http::{
   cors::{AllowOrigin, Any, CorsLayer},
   trace::TraceLayer,
};

use crate::{
   config::{AllowedOrigins, AppConfig},
   handler::{
      AuthState,
      TodoState,
      create_todo,
      delete_todo,
      get_todo,
      health_check,
      list_todos,
      login,
      update_todo,
   },
   usecase::{AuthUseCaseImpl, TodoUseCaseImpl},
};

/// 設定されたオリジンから CORS レイヤーを作成する
///
/// ヘッダ値として解釈できないオリジンは警告を出して除外する。
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
   let allow_origin = match origins {
      AllowedOrigins::Any => AllowOrigin::from(Any),
      AllowedOrigins::List(list) => {
         let values: Vec<HeaderValue> = list
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
               Ok(value) => Some(value),
               Err(_) => {
                  tracing::warn!(%origin, "CORS オリジンを解釈できないため無視します");
                  None
               }
            })
            .collect();
         AllowOrigin::list(values)
      }
   };

   CorsLayer::new()
      .allow_origin(allow_origin)
      .allow_methods(Any)
      .allow_headers(Any)
}

/// アプリケーションのルーターを作成する
///
/// ストアと時刻プロバイダは呼び出し側で用意して注入する。
pub fn create_router(
   config: &AppConfig,
   todo_repository: Arc<dyn TodoRepository>,
   clock: Arc<dyn Clock>,
) -> Router {
   let todo_state = Arc::new(TodoState {
      usecase: TodoUseCaseImpl::new(todo_repository),
      clock,
   });
   let auth_state = Arc::new(AuthState {
      usecase: AuthUseCaseImpl::new(config.auth.clone()),
   });

   let todo_routes = Router::new()
      .route("/todos", get(list_todos).post(create_todo))
      .route(
         "/todos/{id}",
         get(get_todo)
            .put(update_todo)
            .patch(update_todo)
            .delete(delete_todo),
      )
      .with_state(todo_state);

   let auth_routes = Router::new()
      .route("/auth/login", post(login))
      .with_state(auth_state);

   Router::new()
      .route("/health", get(health_check))
      .merge(todo_routes)
      .merge(auth_routes)
      .layer(TraceLayer::new_for_http())
      .layer(cors_layer(&config.cors_origins))
}

#[cfg(test)]
mod tests {
   use axum::{
      body::Body,
      http::{Method, Request, StatusCode, header},
   };
   use todo_domain::clock::SystemClock;
   use todo_infra::mock::InMemoryTodoRepository;
   use tower::ServiceExt;

   use super::*;

   fn config(origins: &str) -> AppConfig {
      AppConfig::from_lookup(|name| match name {
         "CORS_ALLOWED_ORIGINS" => Some(origins.to_string()),
         _ => None,
      })
      .unwrap()
   }

   fn create_test_app(origins: &str) -> Router {
      create_router(
         &config(origins),
         Arc::new(InMemoryTodoRepository::new()),
         Arc::new(SystemClock),
      )
   }

   #[tokio::test]
   async fn test_healthエンドポイントが200を返す() {
      let sut = create_test_app("*");

      let response = sut
         .oneshot(Request::get("/health").body(Body::empty()).unwrap())
         .await
         .unwrap();

      assert_eq!(response.status(), StatusCode::OK);
   }

   #[tokio::test]
   async fn test_既定ではすべてのオリジンを許可する() {
      let sut = create_test_app("*");
      let request = Request::builder()
         .method(Method::GET)
         .uri("/todos")
         .header(header::ORIGIN, "http://localhost:5173")
         .body(Body::empty())
         .unwrap();

      let response = sut.oneshot(request).await.unwrap();

      assert_eq!(
         response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
         Some(&HeaderValue::from_static("*"))
      );
   }

   #[tokio::test]
   async fn test_列挙したオリジンのみ許可する() {
      let sut = create_test_app("http://localhost:5173");
      let request = Request::builder()
         .method(Method::GET)
         .uri("/todos")
         .header(header::ORIGIN, "http://evil.example")
         .body(Body::empty())
         .unwrap();

      let response = sut.oneshot(request).await.unwrap();

      assert!(
         response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
      );
   }
}
