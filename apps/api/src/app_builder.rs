//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//!
//! ## レイヤー構成（外側から）
//!
//! ```text
//! SetRequestIdLayer → TraceLayer → PropagateRequestIdLayer → CorsLayer
//!     → CatchPanicLayer → Router（未一致のパスは静的ファイル）
//! ```

use std::{any::Any, sync::Arc};

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::get,
};
use fitness_infra::ActivityRepository;
use fitness_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::ApiConfig,
    error::ApiError,
    handler::{
        ActivityState,
        add_activity,
        delete_activity,
        delete_by_type,
        filter_by_type,
        health_check,
        sort_by_duration,
        total_calories,
        update_duration,
        welcome,
    },
    usecase::ActivityUseCaseImpl,
};

/// ルーターを構築する
///
/// ストアは呼び出し側から注入する。テストではテストごとに新しいストアを渡す。
pub fn build_app(config: &ApiConfig, repository: Arc<dyn ActivityRepository>) -> Router {
    let activity_state = Arc::new(ActivityState {
        usecase: ActivityUseCaseImpl::new(repository),
    });

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/activities/add", get(add_activity))
        .route("/activities/sort-by-duration", get(sort_by_duration))
        .route("/activities/filter-by-type", get(filter_by_type))
        .route("/activities/total-calories", get(total_calories))
        .route("/activities/update-duration", get(update_duration))
        .route("/activities/delete", get(delete_activity))
        .route("/activities/delete-by-type", get(delete_by_type))
        .with_state(activity_state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// ハンドラ内のパニックを 500 レスポンスに変換する
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "不明なパニック".to_string()
    };

    ApiError::Internal(detail).into_response()
}
