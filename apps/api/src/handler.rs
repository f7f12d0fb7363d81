//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラはデコードとレスポンスの組み立てに徹し、処理はユースケースに委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── auth.rs     # ログイン
//!     ├── health.rs   # ヘルスチェック
//!     └── todo.rs     # ToDo CRUD
//! ```

pub mod auth;
pub mod health;
pub mod todo;

pub use auth::{AuthState, login};
pub use health::health_check;
pub use todo::{TodoState, create_todo, delete_todo, get_todo, list_todos, update_todo};
