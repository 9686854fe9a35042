//! # Fitness Tracker ドメイン層
//!
//! アクティビティ記録を表現するドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層は HTTP やストレージの詳細に一切依存しない。
//! クエリ文字列などの生の入力は、値オブジェクトの生成時に検証される。
//!
//! ## モジュール構成
//!
//! - [`activity`] - アクティビティエンティティと値オブジェクト
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use fitness_domain::activity::{Activity, ActivityId, ActivityType, Calories, Duration};
//!
//! let activity = Activity::new(
//!     ActivityId::parse("4")?,
//!     ActivityType::new("Walking")?,
//!     Duration::parse("20")?,
//!     Calories::parse("150")?,
//! );
//!
//! assert_eq!(activity.activity_type().as_str(), "Walking");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod activity;
pub mod error;

pub use error::DomainError;
