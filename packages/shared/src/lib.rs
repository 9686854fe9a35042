//! # Fitness Tracker 共有ユーティリティ
//!
//! API サーバーとテストで共通に使うユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は API 側の責務）
//! - トレーシング関連は `observability` feature で有効化する

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::{ErrorEnvelope, ErrorResponse};
pub use health::HealthResponse;
