use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use common::messages::msg;
use util::state::AppState;

use super::common::{CreateSessionRequest, SessionResponse};
use db::models::class;
use db::models::session_assignment::Model as SessionModel;
use sea_orm::EntityTrait;

/// POST /api/tutor/sessions
///
/// Creates a tutoring slot for one meeting of a class the caller owns.
/// The slot starts `Inactive` and may optionally be pre-bound to a
/// student.
///
/// ### Responses
/// - `201 Created` with the slot
/// - `403 Forbidden` when the caller does not own the class
/// - `404 Not Found` when the class does not exist
pub async fn create_session(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateSessionRequest>,
) -> (StatusCode, Json<ApiResponse<SessionResponse>>) {
    let db = state.db();

    let class = match class::Entity::find_by_id(req.class_id).one(db).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(msg("class.not_found"))),
            );
        }
        Err(e) => {
            tracing::error!("Failed to load class {}: {e}", req.class_id);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            );
        }
    };

    if class.tutor_id != claims.sub {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(msg("class.not_owner"))),
        );
    }

    match SessionModel::create(
        db,
        req.class_id,
        req.meeting_number,
        req.student_id,
        req.session_date,
    )
    .await
    {
        Ok(session) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(session.into(), msg("session.created"))),
        ),
        Err(e) => {
            tracing::error!("Failed to create session: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
