//! # Fitness Tracker API サーバー
//!
//! アクティビティ記録（種目、運動時間、消費カロリー）を操作する HTTP API。
//!
//! ## 役割
//!
//! - **アクティビティ操作**: 追加、並べ替え、絞り込み、集計、更新、削除
//! - **静的ファイル配信**: 未一致のパスは `FITNESS_STATIC_DIR` から配信
//!
//! データはプロセス内メモリにのみ保持し、再起動すると初期データに戻る。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `FITNESS_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `FITNESS_PORT` | No | ポート番号（デフォルト: `3010`） |
//! | `FITNESS_STATIC_DIR` | No | 静的ファイルのディレクトリ（デフォルト: `static`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,fitness=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p fitness-api
//!
//! curl 'http://localhost:3010/activities/add?activityId=4&type=Walking&duration=20&caloriesBurned=150'
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use fitness_api::{app_builder::build_app, config::ApiConfig};
use fitness_infra::{ActivityRepository, InMemoryActivityRepository};
use fitness_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ストアとルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("fitness-api"));

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let repository: Arc<dyn ActivityRepository> = Arc::new(InMemoryActivityRepository::seeded());
    let app = build_app(&config, repository);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
