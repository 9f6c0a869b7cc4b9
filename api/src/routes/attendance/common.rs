use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use common::messages::msg;
use db::models::attendance_record::{self, AttendanceError, AttendanceStatus};

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub class_id: i64,
    pub meeting_number: i32,
}

/// Confirmation names the tutor the student is sitting in front of; it must
/// match the tutor recorded when the check-in started.
#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub class_id: i64,
    pub tutor_id: i64,
    pub meeting_number: i32,
}

#[derive(Debug, Serialize, Default)]
pub struct AttendanceRecordResponse {
    pub class_id: i64,
    pub student_id: i64,
    pub meeting_number: i32,
    pub tutor_id: i64,
    pub status: Option<AttendanceStatus>,
    pub started_at: String,
    pub confirmed_at: Option<String>,
}

impl From<attendance_record::Model> for AttendanceRecordResponse {
    fn from(record: attendance_record::Model) -> Self {
        Self {
            class_id: record.class_id,
            student_id: record.student_id,
            meeting_number: record.meeting_number,
            tutor_id: record.tutor_id,
            status: Some(record.status),
            started_at: record.started_at.to_rfc3339(),
            confirmed_at: record.confirmed_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Maps a check-in failure onto its HTTP status and user-facing message.
pub fn attendance_error(err: AttendanceError) -> (StatusCode, String) {
    match err {
        AttendanceError::ClassNotFound => (StatusCode::NOT_FOUND, msg("class.not_found")),
        AttendanceError::MeetingNotFound => (StatusCode::NOT_FOUND, msg("meeting.not_found")),
        AttendanceError::NotEnrolled => (StatusCode::FORBIDDEN, msg("attendance.not_enrolled")),
        AttendanceError::WindowClosed => {
            (StatusCode::BAD_REQUEST, msg("attendance.window_closed"))
        }
        AttendanceError::WindowExpired => {
            (StatusCode::BAD_REQUEST, msg("attendance.window_expired"))
        }
        AttendanceError::AlreadyStarted => (StatusCode::CONFLICT, msg("attendance.duplicate")),
        AttendanceError::SessionNotFound => {
            (StatusCode::NOT_FOUND, msg("attendance.session_gone"))
        }
        AttendanceError::Database(e) => {
            tracing::error!("Attendance check-in failed on the database: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, msg("error.internal"))
        }
    }
}
