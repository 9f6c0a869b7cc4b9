use axum::{Extension, Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use common::messages::msg;
use util::state::AppState;
use db::models::attendance_record::Model as AttendanceRecord;

use super::common::{AttendanceRecordResponse, ConfirmRequest, StartRequest, attendance_error};

/// POST /api/attendance/start
///
/// Opens a check-in for the calling student. Succeeds only while the
/// meeting's attendance window is `Active` and unexpired, and only once
/// per meeting.
///
/// ### Responses
/// - `201 Created` with the `InProgress` record
/// - `400 Bad Request` when the window is closed or expired
/// - `403 Forbidden` when the student is not enrolled
/// - `404 Not Found` when the class or meeting does not exist
/// - `409 Conflict` when a record for this meeting already exists
pub async fn start_attendance(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<StartRequest>,
) -> (StatusCode, Json<ApiResponse<AttendanceRecordResponse>>) {
    match AttendanceRecord::start(
        state.db(),
        req.class_id,
        claims.sub,
        req.meeting_number,
        Utc::now(),
    )
    .await
    {
        Ok(record) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                record.into(),
                msg("attendance.started"),
            )),
        ),
        Err(err) => {
            let (status, message) = attendance_error(err);
            (status, Json(ApiResponse::error(message)))
        }
    }
}

/// POST /api/attendance/confirm
///
/// Completes the calling student's check-in. The named tutor must be the
/// one recorded at start time. Window expiry is not re-checked here; a
/// started session stays confirmable.
///
/// ### Responses
/// - `201 Created` with the `Present` record
/// - `404 Not Found` when no matching `InProgress` session exists
pub async fn confirm_attendance(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<ConfirmRequest>,
) -> (StatusCode, Json<ApiResponse<AttendanceRecordResponse>>) {
    match AttendanceRecord::confirm(
        state.db(),
        req.class_id,
        claims.sub,
        req.meeting_number,
        req.tutor_id,
        Utc::now(),
    )
    .await
    {
        Ok(record) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                record.into(),
                msg("attendance.confirmed"),
            )),
        ),
        Err(err) => {
            let (status, message) = attendance_error(err);
            (status, Json(ApiResponse::error(message)))
        }
    }
}
