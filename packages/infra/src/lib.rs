//! # Fitness Tracker インフラ層
//!
//! アクティビティの保存先を提供するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! ストレージの詳細は [`repository::ActivityRepository`] トレイトの背後に隠す。
//! API 層はトレイトオブジェクト（`Arc<dyn ActivityRepository>`）として受け取るため、
//! テストごとに独立したストアを注入できる。
//!
//! 現在の実装はプロセス内メモリのみ（[`InMemoryActivityRepository`]）。
//! 再起動すると [`seed_activities`] の初期データに戻る。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```

pub mod repository;

pub use repository::{ActivityRepository, InMemoryActivityRepository, seed_activities};
