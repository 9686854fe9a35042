//! # ヘルスチェック・ルートハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /` - ウェルカムメッセージ（プレーンテキスト）
//! - `GET /health` - 稼働状態
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0"
//! }
//! ```

use axum::Json;
use fitness_shared::HealthResponse;

/// ルートパスで返すメッセージ
pub const WELCOME_MESSAGE: &str = "Welcome to Fitness Tracker";

/// GET /
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_checkはhealthyとバージョンを返す() {
        let Json(response) = health_check().await;

        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}
