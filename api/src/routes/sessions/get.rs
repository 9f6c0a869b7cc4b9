use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use common::messages::msg;
use util::state::AppState;

use super::common::{ListQuery, ListResponse, SessionResponse};
use db::models::class;
use db::models::session_assignment::{Column as SessionCol, Entity as SessionEntity};

/// GET /api/tutor/sessions
///
/// Lists slots across every class the caller owns, newest first.
///
/// ### Query
/// - `class_id`, `meeting_number`, `status` *(optional filters)*
/// - `page` *(default 1)*
/// - `per_page` *(default 20, max 100)*
pub async fn list_sessions(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Query(q): Query<ListQuery>,
) -> (StatusCode, Json<ApiResponse<ListResponse>>) {
    let db = state.db();
    let page = q.page.unwrap_or(1).max(1) as u64;
    let per_page = q.per_page.unwrap_or(20).clamp(1, 100) as u64;

    let mut sel = SessionEntity::find()
        .inner_join(class::Entity)
        .filter(class::Column::TutorId.eq(claims.sub));
    if let Some(class_id) = q.class_id {
        sel = sel.filter(SessionCol::ClassId.eq(class_id));
    }
    if let Some(meeting_number) = q.meeting_number {
        sel = sel.filter(SessionCol::MeetingNumber.eq(meeting_number));
    }
    if let Some(status) = q.status {
        sel = sel.filter(SessionCol::Status.eq(status));
    }
    let sel = sel.order_by_desc(SessionCol::CreatedAt);

    let paginator = sel.paginate(db, per_page);
    let total = match paginator.num_items().await {
        Ok(n) => n as i32,
        Err(e) => {
            tracing::error!("Failed to count sessions: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            );
        }
    };

    match paginator.fetch_page(page.saturating_sub(1)).await {
        Ok(rows) => {
            let resp = ListResponse {
                sessions: rows.into_iter().map(SessionResponse::from).collect(),
                page: page as i32,
                per_page: per_page as i32,
                total,
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(resp, msg("session.list"))),
            )
        }
        Err(e) => {
            tracing::error!("Failed to list sessions: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
