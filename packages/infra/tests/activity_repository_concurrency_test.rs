//! 並行アクセステスト
//!
//! 複数タスクから同時に操作しても、各操作が原子的に適用されることを検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p fitness-infra --test activity_repository_concurrency_test
//! ```

use std::sync::Arc;

use fitness_domain::activity::{Activity, ActivityId, ActivityType, Calories, Duration};
use fitness_infra::{ActivityRepository, InMemoryActivityRepository};

fn walking(id: u64) -> Activity {
    Activity::new(
        ActivityId::new(id),
        ActivityType::new("Walking").unwrap(),
        Duration::new(20),
        Calories::new(150),
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_並行したinsertがすべて反映される() {
    let repo: Arc<dyn ActivityRepository> = Arc::new(InMemoryActivityRepository::seeded());

    let handles: Vec<_> = (100..150)
        .map(|id| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.insert(walking(id)).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let all = repo.find_all().await;
    assert_eq!(all.len(), 53);
    assert_eq!(repo.total_calories().await, 1200 + 50 * 150);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_insertとdelete_by_typeが混在しても途中状態が残らない() {
    let repo: Arc<dyn ActivityRepository> = Arc::new(InMemoryActivityRepository::seeded());

    let inserts: Vec<_> = (10..30)
        .map(|id| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.insert(walking(id)).await })
        })
        .collect();
    let deletes: Vec<_> = (0..5)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.delete_by_type(&ActivityType::new("Walking").unwrap())
                    .await
            })
        })
        .collect();

    for handle in inserts {
        handle.await.unwrap();
    }
    for handle in deletes {
        // 削除直後のスナップショットには Walking が 1 件も含まれない
        let snapshot = handle.await.unwrap();
        assert!(snapshot.iter().all(|a| !a.activity_type().matches("Walking")));
    }

    let all = repo.find_all().await;
    let walking_count = repo.find_by_type("Walking").await.len();
    assert!(walking_count <= 20);
    assert_eq!(all.len(), 3 + walking_count);
}
