use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use common::messages::msg;
use util::state::AppState;

use super::common::load_owned_session;
use db::models::session_assignment::Model as SessionModel;

/// DELETE /api/tutor/sessions/{session_id}
///
/// Removes a slot the caller owns.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` when the caller does not own the class
/// - `404 Not Found` when the slot does not exist
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    if let Err((status, message)) = load_owned_session(&state, session_id, claims.sub).await {
        return (status, Json(ApiResponse::error(message)));
    }

    match SessionModel::delete_by_id(state.db(), session_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success((), msg("session.deleted"))),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(msg("session.not_found"))),
        ),
        Err(e) => {
            tracing::error!("Failed to delete session {session_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
