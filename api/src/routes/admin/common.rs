use serde::Serialize;

use db::models::attendance_record::{self, AttendanceStatus};
use db::models::user::{self, Role};

/// Attendance state as the roster reports it. `NotRecorded` stands in for
/// students who never started a check-in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RosterStatus {
    NotRecorded,
    InProgress,
    Present,
}

#[derive(Debug, Serialize)]
pub struct RosterEntry {
    pub student_id: i64,
    pub username: String,
    pub display_name: String,
    pub status: RosterStatus,
    pub started_at: Option<String>,
    pub confirmed_at: Option<String>,
}

impl RosterEntry {
    pub fn from_parts(student: user::Model, record: Option<attendance_record::Model>) -> Self {
        let (status, started_at, confirmed_at) = match record {
            None => (RosterStatus::NotRecorded, None, None),
            Some(record) => {
                let status = match record.status {
                    AttendanceStatus::InProgress => RosterStatus::InProgress,
                    AttendanceStatus::Present => RosterStatus::Present,
                };
                (
                    status,
                    Some(record.started_at.to_rfc3339()),
                    record.confirmed_at.map(|t| t.to_rfc3339()),
                )
            }
        };

        Self {
            student_id: student.id,
            username: student.username,
            display_name: student.display_name,
            status,
            started_at,
            confirmed_at,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct AdminUserResponse {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: Option<Role>,
    pub approved: bool,
}

impl From<user::Model> for AdminUserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            email: user.email,
            role: Some(user.role),
            approved: user.approved,
        }
    }
}
