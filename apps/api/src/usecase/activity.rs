//! アクティビティ管理ユースケース

use std::sync::Arc;

use fitness_domain::{
    DomainError,
    activity::{Activity, ActivityId, ActivityType, Calories, Duration},
};
use fitness_infra::ActivityRepository;

use crate::error::ApiError;

/// アクティビティ追加の入力
pub struct AddActivityInput {
    pub id:              ActivityId,
    pub activity_type:   ActivityType,
    pub duration:        Duration,
    pub calories_burned: Calories,
}

/// 運動時間更新の入力
pub struct UpdateDurationInput {
    pub id:       ActivityId,
    pub duration: Duration,
}

/// アクティビティ管理ユースケース
pub struct ActivityUseCaseImpl {
    repository: Arc<dyn ActivityRepository>,
}

impl ActivityUseCaseImpl {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    /// アクティビティを末尾に追加する
    ///
    /// ID の重複チェックは行わない。
    pub async fn add_activity(&self, input: AddActivityInput) -> Result<Vec<Activity>, ApiError> {
        let activity = Activity::new(
            input.id,
            input.activity_type,
            input.duration,
            input.calories_burned,
        );

        let activities = self.repository.insert(activity).await;
        tracing::info!(
            activity_id = %input.id,
            count = activities.len(),
            "アクティビティを追加しました"
        );
        Ok(activities)
    }

    /// 運動時間の昇順に並べ替える
    ///
    /// 並び順はストアに保存され、以降の一覧にも反映される。
    pub async fn sort_by_duration(&self) -> Result<Vec<Activity>, ApiError> {
        let activities = self.repository.sort_by_duration().await;
        tracing::info!(count = activities.len(), "運動時間順に並べ替えました");
        Ok(activities)
    }

    /// 種目で絞り込む
    ///
    /// 種目が指定されていない場合は空の一覧を返す。
    pub async fn filter_by_type(
        &self,
        activity_type: Option<&str>,
    ) -> Result<Vec<Activity>, ApiError> {
        let Some(activity_type) = activity_type else {
            tracing::debug!("type 未指定のため空の一覧を返します");
            return Ok(Vec::new());
        };

        Ok(self.repository.find_by_type(activity_type).await)
    }

    /// 消費カロリーの合計を算出する
    pub async fn total_calories(&self) -> Result<u64, ApiError> {
        Ok(self.repository.total_calories().await)
    }

    /// 運動時間を更新する
    ///
    /// ID が一致する最初のアクティビティのみ更新する。
    /// 一致するものがなければ `NotFound`。
    pub async fn update_duration(
        &self,
        input: UpdateDurationInput,
    ) -> Result<Vec<Activity>, ApiError> {
        let activities = self
            .repository
            .update_duration(input.id, input.duration)
            .await
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Activity",
                id:          input.id.to_string(),
            })?;

        tracing::info!(
            activity_id = %input.id,
            duration = %input.duration,
            "運動時間を更新しました"
        );
        Ok(activities)
    }

    /// ID が一致するアクティビティをすべて削除する
    pub async fn delete_by_id(&self, id: ActivityId) -> Result<Vec<Activity>, ApiError> {
        let activities = self.repository.delete_by_id(id).await;
        tracing::info!(activity_id = %id, remaining = activities.len(), "アクティビティを削除しました");
        Ok(activities)
    }

    /// 種目が一致するアクティビティをすべて削除する
    pub async fn delete_by_type(
        &self,
        activity_type: &ActivityType,
    ) -> Result<Vec<Activity>, ApiError> {
        let activities = self.repository.delete_by_type(activity_type).await;
        tracing::info!(
            %activity_type,
            remaining = activities.len(),
            "種目指定でアクティビティを削除しました"
        );
        Ok(activities)
    }
}
