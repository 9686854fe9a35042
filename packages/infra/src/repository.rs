//! # リポジトリ実装
//!
//! アクティビティストアのトレイトと実装を提供する。

pub mod activity_repository;

pub use activity_repository::{ActivityRepository, InMemoryActivityRepository, seed_activities};
