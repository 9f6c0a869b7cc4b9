use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::response::ApiResponse;
use crate::routes::classes::common::ClassResponse;
use common::messages::msg;
use util::state::AppState;

use super::common::AdminUserResponse;
use db::models::class::{ClassStatus, Model as ClassModel};
use db::models::user::{Entity as UserEntity, Model as UserModel, Role};
use sea_orm::EntityTrait;

/// PUT /api/admin/tutors/{user_id}/{action}
///
/// Approves or rejects a tutor account. Only accounts with the tutor role
/// are eligible; everyone else reads as missing.
///
/// ### Responses
/// - `200 OK` with the updated account
/// - `400 Bad Request` on an unknown action
/// - `404 Not Found` when the user is absent or not a tutor
pub async fn tutor_action(
    State(state): State<AppState>,
    Path((user_id, action)): Path<(i64, String)>,
) -> (StatusCode, Json<ApiResponse<AdminUserResponse>>) {
    let (approved, message_key) = match action.as_str() {
        "approve" => (true, "admin.tutor_approved"),
        "reject" => (false, "admin.tutor_rejected"),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(msg("admin.bad_action"))),
            );
        }
    };

    let db = state.db();
    match UserEntity::find_by_id(user_id).one(db).await {
        Ok(Some(user)) if user.role == Role::Tutor => {}
        Ok(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(msg("user.not_found"))),
            );
        }
        Err(e) => {
            tracing::error!("Failed to load user {user_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            );
        }
    }

    match UserModel::set_approved(db, user_id, approved).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(user.into(), msg(message_key))),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(msg("user.not_found"))),
        ),
        Err(e) => {
            tracing::error!("Failed to update approval for user {user_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}

/// PUT /api/admin/classes/{class_id}/{action}
///
/// Moves a class proposal to `Approved` or `Rejected`.
///
/// ### Responses
/// - `200 OK` with the updated class
/// - `400 Bad Request` on an unknown action
/// - `404 Not Found` when the class does not exist
pub async fn class_action(
    State(state): State<AppState>,
    Path((class_id, action)): Path<(i64, String)>,
) -> (StatusCode, Json<ApiResponse<ClassResponse>>) {
    let (status, message_key) = match action.as_str() {
        "approve" => (ClassStatus::Approved, "admin.class_approved"),
        "reject" => (ClassStatus::Rejected, "admin.class_rejected"),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(msg("admin.bad_action"))),
            );
        }
    };

    match ClassModel::set_status(state.db(), class_id, status).await {
        Ok(Some(class)) => (
            StatusCode::OK,
            Json(ApiResponse::success(class.into(), msg(message_key))),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(msg("class.not_found"))),
        ),
        Err(e) => {
            tracing::error!("Failed to update status for class {class_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
