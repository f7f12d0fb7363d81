//! # ログ出力の初期化
//!
//! API サーバーの起動時に一度だけ [`init_tracing`] を呼び、
//! `tracing` のイベントを標準出力へ流す subscriber を登録する。
//!
//! | 環境変数 | 既定値 | 内容 |
//! |----------|--------|------|
//! | `RUST_LOG` | [`DEFAULT_FILTER`] | 出力するレベルとターゲット |
//! | `LOG_FORMAT` | `pretty` | `json` で 1 行 1 イベントの JSON 出力 |

/// `RUST_LOG` が未設定のときのフィルタ
pub const DEFAULT_FILTER: &str = "info,todo=debug";

/// ログの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// ログ収集基盤に取り込む場合
   Json,
   /// ターミナルで読む場合
   #[default]
   Pretty,
}

impl LogFormat {
   /// `LOG_FORMAT` の値を解釈する
   ///
   /// 大文字小文字は区別しない。解釈できない値は `Pretty` になり、
   /// subscriber の登録前なので stderr に直接警告を書く。
   pub fn parse(value: &str) -> Self {
      if value.eq_ignore_ascii_case("json") {
         Self::Json
      } else if value.eq_ignore_ascii_case("pretty") {
         Self::Pretty
      } else {
         eprintln!("LOG_FORMAT={value:?} は解釈できないため pretty で出力します");
         Self::Pretty
      }
   }

   pub fn from_env() -> Self {
      std::env::var("LOG_FORMAT")
         .map(|value| Self::parse(&value))
         .unwrap_or_default()
   }
}

/// グローバル subscriber を登録する
///
/// `ErrorLayer` を重ねるので、`InfraError` が生成時に取る `SpanTrace` には
/// その時点のハンドラとリポジトリのスパンが入る。
#[cfg(feature = "observability")]
pub fn init_tracing(format: LogFormat) {
   use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

   let output = match format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().with_target(false).boxed(),
   };

   tracing_subscriber::registry()
      .with(filter)
      .with(output)
      .with(tracing_error::ErrorLayer::default())
      .init();
}
