use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use common::format_validation_errors;
use common::messages::msg;
use util::state::AppState;
use validator::Validate;

use super::common::{ClassDetailResponse, ClassRequest, MeetingResponse, WindowRequest};
use db::models::class::{self, Model as ClassModel};
use db::models::class_meeting::Model as MeetingModel;
use sea_orm::EntityTrait;

/// Loads a class and rejects the call unless `tutor_id` owns it.
async fn load_owned_class(
    state: &AppState,
    class_id: i64,
    tutor_id: i64,
) -> Result<class::Model, (StatusCode, String)> {
    match class::Entity::find_by_id(class_id).one(state.db()).await {
        Ok(Some(class)) if class.tutor_id == tutor_id => Ok(class),
        Ok(Some(_)) => Err((StatusCode::FORBIDDEN, msg("class.not_owner"))),
        Ok(None) => Err((StatusCode::NOT_FOUND, msg("class.not_found"))),
        Err(e) => {
            tracing::error!("Failed to load class {class_id}: {e}");
            Err((StatusCode::INTERNAL_SERVER_ERROR, msg("error.internal")))
        }
    }
}

/// PUT /api/classes/{class_id}
///
/// Rewrite a class and its whole meeting plan. Only the owning tutor may
/// edit; the plan in the request replaces the stored one wholesale and
/// renumbers meetings from 1.
///
/// ### Responses
/// - `200 OK` with the updated class and meetings
/// - `400 Bad Request` on validation failure
/// - `403 Forbidden` when the caller does not own the class
/// - `404 Not Found` when the class does not exist
pub async fn edit_class(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<ClassRequest>,
) -> (StatusCode, Json<ApiResponse<ClassDetailResponse>>) {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(error_message)),
        );
    }

    if let Err((status, message)) = load_owned_class(&state, class_id, claims.sub).await {
        return (status, Json(ApiResponse::error(message)));
    }

    match ClassModel::edit_with_meetings(
        state.db(),
        class_id,
        &req.title,
        &req.description,
        &req.meeting_plan(),
    )
    .await
    {
        Ok(Some((class, meetings))) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ClassDetailResponse::from_parts(class, meetings),
                msg("class.updated"),
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(msg("class.not_found"))),
        ),
        Err(e) => {
            tracing::error!("Failed to edit class {class_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}

/// PUT /api/classes/{class_id}/meetings/{meeting_number}/window
///
/// Move a meeting's attendance window between `Locked`, `Active` and
/// `Finished`, optionally with an expiry instant. Only the owning tutor
/// may operate the window.
///
/// ### Responses
/// - `200 OK` with the updated meeting
/// - `403 Forbidden` when the caller does not own the class
/// - `404 Not Found` when the class or meeting does not exist
pub async fn set_window(
    State(state): State<AppState>,
    Path((class_id, meeting_number)): Path<(i64, i32)>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<WindowRequest>,
) -> (StatusCode, Json<ApiResponse<MeetingResponse>>) {
    if let Err((status, message)) = load_owned_class(&state, class_id, claims.sub).await {
        return (status, Json(ApiResponse::error(message)));
    }

    match MeetingModel::set_window(state.db(), class_id, meeting_number, req.status, req.expires_at)
        .await
    {
        Ok(Some(meeting)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MeetingResponse::from(meeting),
                msg("meeting.window_updated"),
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(msg("meeting.not_found"))),
        ),
        Err(e) => {
            tracing::error!(
                "Failed to update window for class {class_id} meeting {meeting_number}: {e}"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
