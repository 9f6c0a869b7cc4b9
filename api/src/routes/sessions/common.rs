use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::messages::msg;
use util::state::AppState;
use db::models::class;
use db::models::session_assignment::{self, SessionStatus};
use sea_orm::EntityTrait;

#[derive(Debug, Serialize, Default)]
pub struct SessionResponse {
    pub id: i64,
    pub class_id: i64,
    pub meeting_number: i32,
    pub student_id: Option<i64>,
    pub session_date: String,
    pub status: Option<SessionStatus>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<session_assignment::Model> for SessionResponse {
    fn from(m: session_assignment::Model) -> Self {
        Self {
            id: m.id,
            class_id: m.class_id,
            meeting_number: m.meeting_number,
            student_id: m.student_id,
            session_date: m.session_date.to_rfc3339(),
            status: Some(m.status),
            created_at: m.created_at.to_rfc3339(),
            updated_at: m.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i32>,
    pub per_page: Option<i32>,
    pub class_id: Option<i64>,
    pub meeting_number: Option<i32>,
    pub status: Option<SessionStatus>,
}

#[derive(Debug, Serialize, Default)]
pub struct ListResponse {
    pub sessions: Vec<SessionResponse>,
    pub page: i32,
    pub per_page: i32,
    pub total: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub class_id: i64,
    pub meeting_number: i32,
    pub student_id: Option<i64>,
    pub session_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub student_id: i64,
}

/// Loads a slot and rejects the call unless `tutor_id` owns its class.
pub async fn load_owned_session(
    state: &AppState,
    session_id: i64,
    tutor_id: i64,
) -> Result<session_assignment::Model, (StatusCode, String)> {
    let db = state.db();

    let session = match session_assignment::Entity::find_by_id(session_id).one(db).await {
        Ok(Some(session)) => session,
        Ok(None) => return Err((StatusCode::NOT_FOUND, msg("session.not_found"))),
        Err(e) => {
            tracing::error!("Failed to load session {session_id}: {e}");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, msg("error.internal")));
        }
    };

    match class::Entity::find_by_id(session.class_id).one(db).await {
        Ok(Some(class)) if class.tutor_id == tutor_id => Ok(session),
        Ok(Some(_)) => Err((StatusCode::FORBIDDEN, msg("class.not_owner"))),
        Ok(None) => Err((StatusCode::NOT_FOUND, msg("class.not_found"))),
        Err(e) => {
            tracing::error!("Failed to load class for session {session_id}: {e}");
            Err((StatusCode::INTERNAL_SERVER_ERROR, msg("error.internal")))
        }
    }
}
