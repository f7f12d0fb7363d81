//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。開発時は `.env` ファイルを
//! `dotenvy` で読み込んでから [`AppConfig::from_env`] を呼ぶ。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `TODO_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `TODO_PORT` | No | `8080` | ポート番号 |
//! | `DATABASE_URL` | No | `sqlite://todos.db` | SQLite 接続 URL |
//! | `AUTH_USER` | No | `admin` | ログイン用ユーザー名 |
//! | `AUTH_PASS` | No | `admin` | ログイン用パスワード |
//! | `CORS_ALLOWED_ORIGINS` | No | `*` | 許可するオリジン（カンマ区切り） |
//!
//! ログ出力形式（`LOG_FORMAT`）は `todo_shared::observability` が読み込む。

use std::{env, fmt};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";
const DEFAULT_AUTH_USER: &str = "admin";
const DEFAULT_AUTH_PASS: &str = "admin";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
   #[error("{name} の値が不正です: {value}")]
   Invalid { name: &'static str, value: String },
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
   pub host: String,
   pub port: u16,
}

/// データベース接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
   /// 接続 URL（例: `sqlite://todos.db`, `sqlite::memory:`）
   pub url: String,
}

/// ログイン用の固定資格情報
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
   pub username: String,
   pub password: String,
}

// パスワードをログに出さない
impl fmt::Debug for AuthConfig {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("AuthConfig")
         .field("username", &self.username)
         .field("password", &"********")
         .finish()
   }
}

/// CORS で許可するオリジン
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
   /// すべてのオリジンを許可（`*`）
   Any,
   /// 列挙したオリジンのみ許可
   List(Vec<String>),
}

impl AllowedOrigins {
   /// カンマ区切りの文字列を解釈する
   ///
   /// `*` を含む場合、または空の場合は [`AllowedOrigins::Any`]。
   pub fn parse(value: &str) -> Self {
      let origins: Vec<String> = value
         .split(',')
         .map(str::trim)
         .filter(|s| !s.is_empty())
         .map(str::to_string)
         .collect();

      if origins.is_empty() || origins.iter().any(|o| o == "*") {
         Self::Any
      } else {
         Self::List(origins)
      }
   }
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
   pub server:       ServerConfig,
   pub database:     DatabaseConfig,
   pub auth:         AuthConfig,
   pub cors_origins: AllowedOrigins,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   ///
   /// 未設定の変数はデフォルト値を使用する。
   /// ポート番号が数値として解釈できない場合はエラーを返す。
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を構築する
   ///
   /// テストでは環境変数の代わりにクロージャを渡す。
   pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
   where
      F: Fn(&str) -> Option<String>,
   {
      let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

      let port = match lookup("TODO_PORT") {
         Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name: "TODO_PORT",
            value,
         })?,
         None => DEFAULT_PORT,
      };

      Ok(Self {
         server:       ServerConfig {
            host: var("TODO_HOST", DEFAULT_HOST),
            port,
         },
         database:     DatabaseConfig {
            url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
         },
         auth:         AuthConfig {
            username: var("AUTH_USER", DEFAULT_AUTH_USER),
            password: var("AUTH_PASS", DEFAULT_AUTH_PASS),
         },
         cors_origins: AllowedOrigins::parse(&var("CORS_ALLOWED_ORIGINS", "*")),
      })
   }
}
