//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、操作はユースケースに委譲

pub mod activity;
pub mod health;

pub use activity::{
    ActivitiesResponse,
    ActivityDto,
    ActivityState,
    TotalCaloriesResponse,
    add_activity,
    delete_activity,
    delete_by_type,
    filter_by_type,
    sort_by_duration,
    total_calories,
    update_duration,
};
pub use health::{health_check, welcome};
