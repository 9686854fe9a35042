//! # ユースケース層
//!
//! アクティビティ API のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入力の検証と変換のみ、操作はユースケースに集約

pub mod activity;

pub use activity::{ActivityUseCaseImpl, AddActivityInput, UpdateDurationInput};
