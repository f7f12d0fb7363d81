//! # ToDo Liste 共有ユーティリティ
//!
//! ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, api）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum などの Web フレームワークには依存しない
//!
//! ## モジュール構成
//!
//! - [`error_response`] - RFC 9457 Problem Details 形式のエラーボディ
//! - [`health`] - ヘルスチェックのレスポンス型
//! - [`observability`] - トレーシング初期化

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::{ErrorResponse, FieldErrorBody};
pub use health::HealthResponse;
