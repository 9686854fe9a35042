//! # ActivityRepository
//!
//! アクティビティの順序付きコレクションを管理するリポジトリ。
//!
//! ## 設計方針
//!
//! - **順序を保持**: 追加順に並び、`sort_by_duration` を呼ぶと並び順そのものが変わる
//! - **操作単位の原子性**: 各メソッドはロックを 1 回だけ取得し、
//!   変更後のスナップショットを返す。途中状態が他のリクエストから見えることはない
//! - **ID の重複を許容**: `insert` は一意性チェックを行わない

use async_trait::async_trait;
use fitness_domain::activity::{Activity, ActivityId, ActivityType, Calories, Duration};
use tokio::sync::RwLock;

/// 起動時の初期データを作成する
///
/// | activityId | type | duration | caloriesBurned |
/// |---|---|---|---|
/// | 1 | Running | 30 | 300 |
/// | 2 | Swimming | 45 | 400 |
/// | 3 | Cycling | 60 | 500 |
pub fn seed_activities() -> Vec<Activity> {
    [
        (1, "Running", 30, 300),
        (2, "Swimming", 45, 400),
        (3, "Cycling", 60, 500),
    ]
    .into_iter()
    .map(|(id, activity_type, duration, calories)| {
        // 種目名はすべて空でない 100 文字以内のリテラル
        Activity::new(
            ActivityId::new(id),
            ActivityType::new(activity_type).expect("初期データの種目名は有効である"),
            Duration::new(duration),
            Calories::new(calories),
        )
    })
    .collect()
}

/// アクティビティリポジトリトレイト
///
/// 変更系のメソッドは、変更後のコレクション全体を返す。
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// 全件を現在の並び順で取得する
    async fn find_all(&self) -> Vec<Activity>;

    /// 末尾に追加する
    async fn insert(&self, activity: Activity) -> Vec<Activity>;

    /// 運動時間の昇順に並べ替える（安定ソート）
    ///
    /// 並び替えはストア自体に反映され、以降のリクエストにも影響する。
    async fn sort_by_duration(&self) -> Vec<Activity>;

    /// 種目が完全一致するものを取得する（ストアは変更しない）
    async fn find_by_type(&self, activity_type: &str) -> Vec<Activity>;

    /// 消費カロリーの合計を算出する
    async fn total_calories(&self) -> u64;

    /// ID が一致する最初のアクティビティの運動時間を更新する
    ///
    /// 一致するものがなければ `None` を返し、ストアは変更しない。
    async fn update_duration(&self, id: ActivityId, duration: Duration) -> Option<Vec<Activity>>;

    /// ID が一致するものをすべて削除する
    async fn delete_by_id(&self, id: ActivityId) -> Vec<Activity>;

    /// 種目が完全一致するものをすべて削除する
    async fn delete_by_type(&self, activity_type: &ActivityType) -> Vec<Activity>;
}

/// プロセス内メモリのアクティビティリポジトリ
///
/// 永続化は行わない。プロセスが終了すると内容は失われる。
#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    activities: RwLock<Vec<Activity>>,
}

impl InMemoryActivityRepository {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// 初期データ入りのリポジトリを作成する
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find_all(&self) -> Vec<Activity> {
        self.activities.read().await.clone()
    }

    async fn insert(&self, activity: Activity) -> Vec<Activity> {
        let mut activities = self.activities.write().await;
        activities.push(activity);
        activities.clone()
    }

    async fn sort_by_duration(&self) -> Vec<Activity> {
        let mut activities = self.activities.write().await;
        activities.sort_by_key(Activity::duration);
        activities.clone()
    }

    async fn find_by_type(&self, activity_type: &str) -> Vec<Activity> {
        self.activities
            .read()
            .await
            .iter()
            .filter(|a| a.activity_type().matches(activity_type))
            .cloned()
            .collect()
    }

    async fn total_calories(&self) -> u64 {
        self.activities
            .read()
            .await
            .iter()
            .map(|a| u64::from(a.calories_burned().value()))
            .sum()
    }

    async fn update_duration(&self, id: ActivityId, duration: Duration) -> Option<Vec<Activity>> {
        let mut activities = self.activities.write().await;
        let activity = activities.iter_mut().find(|a| a.id() == id)?;
        activity.update_duration(duration);
        Some(activities.clone())
    }

    async fn delete_by_id(&self, id: ActivityId) -> Vec<Activity> {
        let mut activities = self.activities.write().await;
        let before = activities.len();
        activities.retain(|a| a.id() != id);
        tracing::debug!(removed = before - activities.len(), %id, "ID 指定で削除");
        activities.clone()
    }

    async fn delete_by_type(&self, activity_type: &ActivityType) -> Vec<Activity> {
        let mut activities = self.activities.write().await;
        let before = activities.len();
        activities.retain(|a| a.activity_type() != activity_type);
        tracing::debug!(removed = before - activities.len(), %activity_type, "種目指定で削除");
        activities.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn activity(id: u64, activity_type: &str, duration: u32, calories: u32) -> Activity {
        Activity::new(
            ActivityId::new(id),
            ActivityType::new(activity_type).unwrap(),
            Duration::new(duration),
            Calories::new(calories),
        )
    }

    fn ids(activities: &[Activity]) -> Vec<u64> {
        activities.iter().map(|a| a.id().value()).collect()
    }

    #[test]
    fn test_初期データは3件() {
        let seed = seed_activities();

        assert_eq!(ids(&seed), vec![1, 2, 3]);
        assert_eq!(seed[1].activity_type().as_str(), "Swimming");
    }

    #[tokio::test]
    async fn test_insertは末尾に追加し重複idも許容する() {
        let sut = InMemoryActivityRepository::seeded();

        sut.insert(activity(4, "Walking", 20, 150)).await;
        let result = sut.insert(activity(4, "Walking", 25, 180)).await;

        assert_eq!(ids(&result), vec![1, 2, 3, 4, 4]);
        assert_eq!(result[4].duration(), Duration::new(25));
    }

    #[tokio::test]
    async fn test_sort_by_durationは昇順に並べ替えストアにも反映される() {
        let sut = InMemoryActivityRepository::new(vec![
            activity(1, "Cycling", 60, 500),
            activity(2, "Running", 30, 300),
            activity(3, "Swimming", 45, 400),
        ]);

        let sorted = sut.sort_by_duration().await;

        assert_eq!(ids(&sorted), vec![2, 3, 1]);
        assert_eq!(ids(&sut.find_all().await), vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_sort_by_durationは同じ運動時間の順序を保つ() {
        let sut = InMemoryActivityRepository::new(vec![
            activity(1, "Yoga", 30, 100),
            activity(2, "Running", 10, 120),
            activity(3, "Walking", 30, 90),
        ]);

        let sorted = sut.sort_by_duration().await;

        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn test_find_by_typeは完全一致のみ返しストアを変更しない() {
        let sut = InMemoryActivityRepository::seeded();

        let result = sut.find_by_type("Running").await;

        assert_eq!(ids(&result), vec![1]);
        assert!(sut.find_by_type("running").await.is_empty());
        assert_eq!(sut.find_all().await.len(), 3);
    }

    #[tokio::test]
    async fn test_total_caloriesは全件の合計() {
        let sut = InMemoryActivityRepository::seeded();

        assert_eq!(sut.total_calories().await, 1200);
    }

    #[tokio::test]
    async fn test_total_caloriesは空のストアで0() {
        let sut = InMemoryActivityRepository::default();

        assert_eq!(sut.total_calories().await, 0);
    }

    #[tokio::test]
    async fn test_update_durationは最初に一致したものだけ更新する() {
        let sut = InMemoryActivityRepository::new(vec![
            activity(7, "Running", 30, 300),
            activity(7, "Running", 40, 350),
        ]);

        let result = sut
            .update_duration(ActivityId::new(7), Duration::new(99))
            .await
            .unwrap();

        assert_eq!(result[0].duration(), Duration::new(99));
        assert_eq!(result[1].duration(), Duration::new(40));
    }

    #[tokio::test]
    async fn test_update_durationは存在しないidでnoneを返す() {
        let sut = InMemoryActivityRepository::seeded();

        let result = sut
            .update_duration(ActivityId::new(99), Duration::new(10))
            .await;

        assert!(result.is_none());
        assert_eq!(sut.find_all().await, seed_activities());
    }

    #[tokio::test]
    async fn test_delete_by_idは一致するものをすべて削除する() {
        let sut = InMemoryActivityRepository::seeded();
        sut.insert(activity(2, "Diving", 15, 90)).await;

        let result = sut.delete_by_id(ActivityId::new(2)).await;

        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_delete_by_idは一致しなければ何もしない() {
        let sut = InMemoryActivityRepository::seeded();

        let result = sut.delete_by_id(ActivityId::new(42)).await;

        assert_eq!(result, seed_activities());
    }

    #[tokio::test]
    async fn test_delete_by_typeは同じ種目をすべて削除する() {
        let sut = InMemoryActivityRepository::seeded();
        sut.insert(activity(5, "Running", 10, 100)).await;

        let result = sut
            .delete_by_type(&ActivityType::new("Running").unwrap())
            .await;

        assert_eq!(ids(&result), vec![2, 3]);
    }
}
