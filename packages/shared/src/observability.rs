//! # Observability 基盤
//!
//! トレーシング初期化、ログ出力形式の設定、Request ID 関連のヘルパーを提供する。
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。
//!
//! ## HTTP レイヤーの構成
//!
//! ```text
//! SetRequestIdLayer → TraceLayer(make_request_span) → PropagateRequestIdLayer → handler
//! ```
//!
//! `SetRequestIdLayer` が [`MakeRequestUuidV7`] で `X-Request-Id` を補完し、
//! [`make_request_span`] がその値をスパンフィールドに載せる。

/// Request ID を運ぶ HTTP ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// デフォルトのログフィルタ（`RUST_LOG` 未設定時）
pub const DEFAULT_LOG_FILTER: &str = "info,fitness=debug";

/// ログの出力形式
///
/// `LOG_FORMAT` 環境変数で選ぶ。`json` 以外はすべて [`Pretty`](LogFormat::Pretty)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 イベントの JSON
    Json,
    /// 開発用の人間向け出力
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する
    ///
    /// 大文字小文字と前後の空白は無視する。
    /// 未知の値はサブスクライバ初期化前なので stderr に警告して `Pretty` を使う。
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else if value.eq_ignore_ascii_case("pretty") {
            Self::Pretty
        } else {
            eprintln!("WARNING: LOG_FORMAT={value:?} is not json or pretty, using pretty");
            Self::Pretty
        }
    }

    /// `LOG_FORMAT` 環境変数から取得する
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT").map_or_else(|_| Self::default(), |value| Self::parse(&value))
    }
}

/// [`init_tracing`] に渡す設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// 起動ログに載せるサービス名
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// 出力形式を環境変数から決める
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// グローバルサブスクライバを登録する
///
/// フィルタは `RUST_LOG` を優先し、無ければ [`DEFAULT_LOG_FILTER`]。
/// プロセスで 1 回だけ呼ぶこと（2 回目はパニックする）。
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) {
    use tracing_subscriber::{
        EnvFilter,
        Layer as _,
        fmt,
        layer::SubscriberExt,
        util::SubscriberInitExt,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let output = if config.log_format == LogFormat::Json {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed()
    } else {
        fmt::layer().with_target(false).boxed()
    };

    tracing_subscriber::registry().with(filter).with(output).init();

    tracing::info!(
        service = %config.service_name,
        log_format = ?config.log_format,
        "ログ出力を開始しました"
    );
}

/// UUID v7 で Request ID を生成する
///
/// クライアントが `X-Request-Id` を送ってきた場合は `SetRequestIdLayer` が
/// その値を優先するため、ここは呼ばれない。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let value = http::HeaderValue::from_str(&uuid::Uuid::now_v7().to_string()).ok()?;
        Some(tower_http::request_id::RequestId::new(value))
    }
}

/// リクエストごとのスパンを作成する
///
/// `TraceLayer::make_span_with` に渡す。`request_id` が無い場合は `"-"`。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
