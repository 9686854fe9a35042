//! # アクティビティハンドラ
//!
//! アクティビティ記録の操作 API を提供する。入力はすべてクエリ文字列で受け取る。
//!
//! ## エンドポイント
//!
//! - `GET /activities/add` - アクティビティ追加
//! - `GET /activities/sort-by-duration` - 運動時間の昇順に並べ替え
//! - `GET /activities/filter-by-type` - 種目で絞り込み
//! - `GET /activities/total-calories` - 消費カロリーの合計
//! - `GET /activities/update-duration` - 運動時間の更新
//! - `GET /activities/delete` - ID 指定で削除
//! - `GET /activities/delete-by-type` - 種目指定で削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use fitness_domain::{
    DomainError,
    activity::{Activity, ActivityId, ActivityType, Calories, Duration},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    usecase::{ActivityUseCaseImpl, AddActivityInput, UpdateDurationInput},
};

/// アクティビティ API の共有状態
pub struct ActivityState {
    pub usecase: ActivityUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// アクティビティ追加クエリ
///
/// 欠落と不正値を区別してエラーにするため、すべて文字列で受け取る。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddActivityQuery {
    pub activity_id:     Option<String>,
    #[serde(rename = "type")]
    pub activity_type:   Option<String>,
    pub duration:        Option<String>,
    pub calories_burned: Option<String>,
}

/// 種目クエリ
#[derive(Debug, Deserialize)]
pub struct ActivityTypeQuery {
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
}

/// 運動時間更新クエリ
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDurationQuery {
    pub activity_id: Option<String>,
    pub duration:    Option<String>,
}

/// ID 指定削除クエリ
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteActivityQuery {
    pub activity_id: Option<String>,
}

/// アクティビティ DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub activity_id:     u64,
    #[serde(rename = "type")]
    pub activity_type:   String,
    pub duration:        u32,
    pub calories_burned: u32,
}

impl From<&Activity> for ActivityDto {
    fn from(activity: &Activity) -> Self {
        Self {
            activity_id:     activity.id().value(),
            activity_type:   activity.activity_type().as_str().to_string(),
            duration:        activity.duration().value(),
            calories_burned: activity.calories_burned().value(),
        }
    }
}

/// `{ "activities": [...] }` 形式のレスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivityDto>,
}

impl From<Vec<Activity>> for ActivitiesResponse {
    fn from(activities: Vec<Activity>) -> Self {
        Self {
            activities: activities.iter().map(ActivityDto::from).collect(),
        }
    }
}

/// `{ "totalCalories": n }` 形式のレスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TotalCaloriesResponse {
    pub total_calories: u64,
}

/// 必須パラメータを取り出す
fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, DomainError> {
    value
        .as_deref()
        .ok_or_else(|| DomainError::Validation(format!("{name} は必須です")))
}

// --- ハンドラ ---

/// GET /activities/add
///
/// アクティビティを末尾に追加し、全件を返す。
///
/// ## レスポンス
///
/// - `200 OK`: 追加後の全件
/// - `400 Bad Request`: パラメータの欠落、数値として解釈できない値
#[tracing::instrument(skip_all)]
pub async fn add_activity(
    State(state): State<Arc<ActivityState>>,
    query: Result<Query<AddActivityQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;

    let input = AddActivityInput {
        id:              ActivityId::parse(required(&query.activity_id, "activityId")?)?,
        activity_type:   ActivityType::new(required(&query.activity_type, "type")?)?,
        duration:        Duration::parse(required(&query.duration, "duration")?)?,
        calories_burned: Calories::parse(required(&query.calories_burned, "caloriesBurned")?)?,
    };

    let activities = state.usecase.add_activity(input).await?;

    Ok((StatusCode::OK, Json(ActivitiesResponse::from(activities))))
}

/// GET /activities/sort-by-duration
///
/// 運動時間の昇順に並べ替え、全件を返す。並び順はストアに残る。
#[tracing::instrument(skip_all)]
pub async fn sort_by_duration(
    State(state): State<Arc<ActivityState>>,
) -> Result<impl IntoResponse, ApiError> {
    let activities = state.usecase.sort_by_duration().await?;

    Ok((StatusCode::OK, Json(ActivitiesResponse::from(activities))))
}

/// GET /activities/filter-by-type
///
/// 種目が完全一致するものを返す。`type` が無ければ空の一覧。
#[tracing::instrument(skip_all)]
pub async fn filter_by_type(
    State(state): State<Arc<ActivityState>>,
    query: Result<Query<ActivityTypeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;

    let activities = state
        .usecase
        .filter_by_type(query.activity_type.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ActivitiesResponse::from(activities))))
}

/// GET /activities/total-calories
///
/// 全件の消費カロリー合計を返す。`type` は受け付けるが集計には使わない。
#[tracing::instrument(skip_all)]
pub async fn total_calories(
    State(state): State<Arc<ActivityState>>,
    query: Result<Query<ActivityTypeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    if let Some(activity_type) = &query.activity_type {
        tracing::debug!(%activity_type, "type は合計に影響しません");
    }

    let total_calories = state.usecase.total_calories().await?;

    Ok((StatusCode::OK, Json(TotalCaloriesResponse { total_calories })))
}

/// GET /activities/update-duration
///
/// ID が一致する最初のアクティビティの運動時間を更新し、全件を返す。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の全件
/// - `400 Bad Request`: パラメータの欠落、数値として解釈できない値
/// - `404 Not Found`: ID が一致するアクティビティが無い
#[tracing::instrument(skip_all)]
pub async fn update_duration(
    State(state): State<Arc<ActivityState>>,
    query: Result<Query<UpdateDurationQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;

    let input = UpdateDurationInput {
        id:       ActivityId::parse(required(&query.activity_id, "activityId")?)?,
        duration: Duration::parse(required(&query.duration, "duration")?)?,
    };

    let activities = state.usecase.update_duration(input).await?;

    Ok((StatusCode::OK, Json(ActivitiesResponse::from(activities))))
}

/// GET /activities/delete
///
/// ID が一致するアクティビティをすべて削除し、残りを返す。
#[tracing::instrument(skip_all)]
pub async fn delete_activity(
    State(state): State<Arc<ActivityState>>,
    query: Result<Query<DeleteActivityQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let id = ActivityId::parse(required(&query.activity_id, "activityId")?)?;

    let activities = state.usecase.delete_by_id(id).await?;

    Ok((StatusCode::OK, Json(ActivitiesResponse::from(activities))))
}

/// GET /activities/delete-by-type
///
/// 種目が一致するアクティビティをすべて削除し、残りを返す。
/// `type` が無い場合は 400（全件削除を防ぐ）。
#[tracing::instrument(skip_all)]
pub async fn delete_by_type(
    State(state): State<Arc<ActivityState>>,
    query: Result<Query<ActivityTypeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let activity_type = ActivityType::new(required(&query.activity_type, "type")?)?;

    let activities = state.usecase.delete_by_type(&activity_type).await?;

    Ok((StatusCode::OK, Json(ActivitiesResponse::from(activities))))
}
