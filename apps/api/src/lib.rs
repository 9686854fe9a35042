//! # Fitness Tracker API ライブラリ
//!
//! アクティビティ API のハンドラ、ユースケース、ルーター構築を公開する。
//! バイナリ（`main.rs`）と統合テストの両方から利用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
