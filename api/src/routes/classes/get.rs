use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::response::ApiResponse;
use common::messages::msg;
use util::state::AppState;

use super::common::{ClassDetailResponse, ClassResponse, ListQuery};
use db::models::class::{self, ClassStatus, Model as ClassModel};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

/// GET /api/classes
///
/// Catalogue of approved classes, newest first, for any signed-in user.
/// `?q=` narrows the listing to titles containing the query.
pub async fn list_classes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> (StatusCode, Json<ApiResponse<Vec<ClassResponse>>>) {
    let db = state.db();

    let mut select = class::Entity::find()
        .filter(class::Column::Status.eq(ClassStatus::Approved))
        .order_by_desc(class::Column::CreatedAt);

    if let Some(q) = query.q.as_deref().filter(|q| !q.is_empty()) {
        select = select.filter(class::Column::Title.contains(q));
    }

    match select.all(db).await {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                classes.into_iter().map(ClassResponse::from).collect(),
                msg("class.list"),
            )),
        ),
        Err(e) => {
            tracing::error!("Failed to list classes: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}

/// GET /api/classes/{class_id}
///
/// A single class with its full meeting plan. Unlike the listing this does
/// not hide pending or rejected classes, so tutors can inspect their own
/// proposals while review is underway.
pub async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<ClassDetailResponse>>) {
    let db = state.db();

    match ClassModel::get_with_meetings(db, class_id).await {
        Ok(Some((class, meetings))) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ClassDetailResponse::from_parts(class, meetings),
                msg("class.retrieved"),
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(msg("class.not_found"))),
        ),
        Err(e) => {
            tracing::error!("Failed to load class {class_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
