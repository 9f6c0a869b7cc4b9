use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::response::ApiResponse;
use common::messages::msg;
use util::state::AppState;

use super::common::RosterEntry;
use db::models::attendance_record::Model as AttendanceRecord;
use db::models::class;
use db::models::class_meeting::Model as MeetingModel;
use sea_orm::EntityTrait;

/// GET /api/admin/classes/{class_id}/meetings/{meeting_number}/attendance
///
/// The full roster for one meeting: every enrolled student in enrollment
/// order with their current attendance state. Students who never started
/// a check-in read as `NotRecorded`. Pure read.
///
/// ### Responses
/// - `200 OK` with the roster
/// - `404 Not Found` when the class or meeting does not exist
pub async fn attendance_roster(
    State(state): State<AppState>,
    Path((class_id, meeting_number)): Path<(i64, i32)>,
) -> (StatusCode, Json<ApiResponse<Vec<RosterEntry>>>) {
    let db = state.db();

    match class::Entity::find_by_id(class_id).one(db).await {
        Ok(Some(_)) => {}
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
    }

    match MeetingModel::find_by_class_and_number(db, class_id, meeting_number).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(msg("meeting.not_found"))),
            );
        }
        Err(e) => {
            tracing::error!("Failed to load meeting {meeting_number} of class {class_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            );
        }
    }

    match AttendanceRecord::roster_for_meeting(db, class_id, meeting_number).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter()
                    .map(|(student, record)| RosterEntry::from_parts(student, record))
                    .collect(),
                msg("attendance.roster"),
            )),
        ),
        Err(e) => {
            tracing::error!("Failed to load roster for class {class_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
