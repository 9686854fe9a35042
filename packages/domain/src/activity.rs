//! # アクティビティ
//!
//! 1 回分の運動セッション（種目、時間、消費カロリー）を表現するドメインモデル。
//!
//! ## 識別子の扱い
//!
//! [`ActivityId`] は一意性を保証しない。同じ ID のアクティビティを複数登録でき、
//! ID による検索・削除はすべて「一致するもの」を対象とする。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use fitness_domain::activity::{Activity, ActivityId, ActivityType, Calories, Duration};
//!
//! let mut activity = Activity::new(
//!     ActivityId::new(1),
//!     ActivityType::new("Running")?,
//!     Duration::new(30),
//!     Calories::new(300),
//! );
//!
//! activity.update_duration(Duration::parse("35")?);
//! assert_eq!(activity.duration().value(), 35);
//! # Ok(())
//! # }
//! ```

use crate::DomainError;

define_numeric_value! {
    /// アクティビティの識別子
    ///
    /// 一意性は保証されない（重複登録を許容する）。
    pub struct ActivityId(u64) {
        label: "activityId",
    }
}

define_numeric_value! {
    /// 運動時間（分）
    pub struct Duration(u32) {
        label: "duration",
    }
}

define_numeric_value! {
    /// 消費カロリー（kcal）
    pub struct Calories(u32) {
        label: "caloriesBurned",
    }
}

// =========================================================================
// ActivityType（種目）
// =========================================================================

/// 種目名の最大文字数
const MAX_ACTIVITY_TYPE_LENGTH: usize = 100;

/// 種目（値オブジェクト）
///
/// 入力された文字列をそのまま保持する。比較は大文字小文字を区別し、
/// 前後の空白も除去しない（`"Running"` と `" Running"` は別の種目）。
///
/// # 不変条件
///
/// - 空白のみの文字列ではない
/// - 最大 100 文字
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct ActivityType(String);

impl ActivityType {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::Validation("type は必須です".to_string()));
        }

        if value.chars().count() > MAX_ACTIVITY_TYPE_LENGTH {
            return Err(DomainError::Validation(format!(
                "type は {MAX_ACTIVITY_TYPE_LENGTH} 文字以内である必要があります"
            )));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 指定した文字列と完全一致するか
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other
    }
}

// =========================================================================
// Activity（アクティビティエンティティ）
// =========================================================================

/// アクティビティエンティティ
///
/// 生成後に変更できるのは運動時間のみ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    id:              ActivityId,
    activity_type:   ActivityType,
    duration:        Duration,
    calories_burned: Calories,
}

impl Activity {
    pub fn new(
        id: ActivityId,
        activity_type: ActivityType,
        duration: Duration,
        calories_burned: Calories,
    ) -> Self {
        Self {
            id,
            activity_type,
            duration,
            calories_burned,
        }
    }

    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn activity_type(&self) -> &ActivityType {
        &self.activity_type
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn calories_burned(&self) -> Calories {
        self.calories_burned
    }

    /// 運動時間を上書きする
    pub fn update_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}
