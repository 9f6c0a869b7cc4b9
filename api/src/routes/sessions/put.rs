use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use common::messages::msg;
use util::state::AppState;

use super::common::{AssignRequest, SessionResponse, load_owned_session};
use db::models::session_assignment::{Model as SessionModel, SessionStatus};
use db::models::user::Entity as UserEntity;
use sea_orm::EntityTrait;

/// PUT /api/tutor/sessions/{session_id}/assign
///
/// Binds (or rebinds) a student to a slot the caller owns.
///
/// ### Responses
/// - `200 OK` with the updated slot
/// - `403 Forbidden` when the caller does not own the class
/// - `404 Not Found` when the slot or the student does not exist
pub async fn assign_session(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<AssignRequest>,
) -> (StatusCode, Json<ApiResponse<SessionResponse>>) {
    if let Err((status, message)) = load_owned_session(&state, session_id, claims.sub).await {
        return (status, Json(ApiResponse::error(message)));
    }

    let db = state.db();
    match UserEntity::find_by_id(req.student_id).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(msg("user.not_found"))),
            );
        }
        Err(e) => {
            tracing::error!("Failed to load user {}: {e}", req.student_id);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            );
        }
    }

    match SessionModel::assign_student(db, session_id, req.student_id).await {
        Ok(Some(session)) => (
            StatusCode::OK,
            Json(ApiResponse::success(session.into(), msg("session.assigned"))),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(msg("session.not_found"))),
        ),
        Err(e) => {
            tracing::error!("Failed to assign session {session_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}

/// PUT /api/tutor/sessions/{session_id}/{action}
///
/// Toggles a slot's status. `activate` makes it `Active`, `deactivate`
/// makes it `Inactive`; any other action is rejected. The slot's class
/// must belong to the caller.
///
/// ### Responses
/// - `200 OK` with the updated slot
/// - `400 Bad Request` on an unknown action
/// - `403 Forbidden` when the caller does not own the class
/// - `404 Not Found` when the slot does not exist
pub async fn session_action(
    State(state): State<AppState>,
    Path((session_id, action)): Path<(i64, String)>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<SessionResponse>>) {
    let (target, message_key) = match action.as_str() {
        "activate" => (SessionStatus::Active, "session.activated"),
        "deactivate" => (SessionStatus::Inactive, "session.deactivated"),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(msg("session.bad_action"))),
            );
        }
    };

    if let Err((status, message)) = load_owned_session(&state, session_id, claims.sub).await {
        return (status, Json(ApiResponse::error(message)));
    }

    match SessionModel::set_status(state.db(), session_id, target).await {
        Ok(Some(session)) => (
            StatusCode::OK,
            Json(ApiResponse::success(session.into(), msg(message_key))),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(msg("session.not_found"))),
        ),
        Err(e) => {
            tracing::error!("Failed to update session {session_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
