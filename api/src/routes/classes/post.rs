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

use super::common::{ClassDetailResponse, ClassRequest};
use db::models::class::{ClassStatus, Model as ClassModel};
use db::models::enrollment::{self, Model as EnrollmentModel};
use db::models::user::Entity as UserEntity;
use sea_orm::EntityTrait;

/// POST /api/classes
///
/// Propose a new class with its full meeting plan. Tutor-only; the tutor
/// must already be approved. The class starts `Pending` until an admin
/// reviews it, and every meeting's attendance window starts `Locked`.
///
/// ### Responses
/// - `201 Created` with the class and its meetings
/// - `400 Bad Request` on validation failure
/// - `403 Forbidden` when the tutor is not approved yet
pub async fn create_class(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<ClassRequest>,
) -> (StatusCode, Json<ApiResponse<ClassDetailResponse>>) {
    let db = state.db();

    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(error_message)),
        );
    }

    let tutor = match UserEntity::find_by_id(claims.sub).one(db).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(msg("user.not_found"))),
            );
        }
        Err(e) => {
            tracing::error!("Failed to load tutor {}: {e}", claims.sub);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            );
        }
    };

    if !tutor.approved {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(msg("class.tutor_unapproved"))),
        );
    }

    match ClassModel::create_with_meetings(
        db,
        claims.sub,
        &req.title,
        &req.description,
        &req.meeting_plan(),
    )
    .await
    {
        Ok((class, meetings)) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ClassDetailResponse::from_parts(class, meetings),
                msg("class.created"),
            )),
        ),
        Err(e) => {
            tracing::error!("Failed to create class: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}

/// POST /api/classes/{class_id}/enroll
///
/// Enroll the calling student in an approved class.
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` when the class is not approved
/// - `404 Not Found` when the class does not exist
/// - `409 Conflict` when already enrolled
pub async fn enroll(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<Option<enrollment::Model>>>) {
    let db = state.db();

    let class = match db::models::Class::find_by_id(class_id).one(db).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(msg("class.not_found"))),
            );
        }
        Err(e) => {
            tracing::error!("Failed to load class {class_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            );
        }
    };

    if class.status != ClassStatus::Approved {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(msg("class.not_open"))),
        );
    }

    match EnrollmentModel::enroll(db, class_id, claims.sub).await {
        Ok(enrollment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(Some(enrollment), msg("class.enrolled"))),
        ),
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::error(msg("class.already_enrolled"))),
        ),
        Err(e) => {
            tracing::error!("Failed to enroll in class {class_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
