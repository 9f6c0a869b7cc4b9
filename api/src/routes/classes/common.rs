//! Shared request/response types for the `/classes` group.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::class::{self, ClassStatus};
use db::models::class_meeting::{self, NewMeeting, WindowStatus};

#[derive(Debug, Deserialize, Validate)]
pub struct MeetingInput {
    #[validate(length(min = 1, message = "Meeting title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub meet_url: Option<String>,
    pub pdf_url: Option<String>,
}

impl From<&MeetingInput> for NewMeeting {
    fn from(input: &MeetingInput) -> Self {
        NewMeeting {
            title: input.title.clone(),
            description: input.description.clone(),
            video_url: input.video_url.clone(),
            meet_url: input.meet_url.clone(),
            pdf_url: input.pdf_url.clone(),
        }
    }
}

/// Body for both class creation and class edits; edits replace the whole
/// meeting plan.
#[derive(Debug, Deserialize, Validate)]
pub struct ClassRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: String,

    #[validate(nested)]
    pub meetings: Vec<MeetingInput>,
}

impl ClassRequest {
    pub fn meeting_plan(&self) -> Vec<NewMeeting> {
        self.meetings.iter().map(NewMeeting::from).collect()
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ClassResponse {
    pub id: i64,
    pub tutor_id: i64,
    pub title: String,
    pub description: String,
    pub status: Option<ClassStatus>,
    pub meeting_count: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<class::Model> for ClassResponse {
    fn from(model: class::Model) -> Self {
        Self {
            id: model.id,
            tutor_id: model.tutor_id,
            title: model.title,
            description: model.description,
            status: Some(model.status),
            meeting_count: model.meeting_count,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct MeetingResponse {
    pub id: i64,
    pub meeting_number: i32,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub meet_url: Option<String>,
    pub pdf_url: Option<String>,
    pub window_status: Option<WindowStatus>,
    pub window_expires_at: Option<DateTime<Utc>>,
}

impl From<class_meeting::Model> for MeetingResponse {
    fn from(model: class_meeting::Model) -> Self {
        Self {
            id: model.id,
            meeting_number: model.meeting_number,
            title: model.title,
            description: model.description,
            video_url: model.video_url,
            meet_url: model.meet_url,
            pdf_url: model.pdf_url,
            window_status: Some(model.window_status),
            window_expires_at: model.window_expires_at,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ClassDetailResponse {
    #[serde(flatten)]
    pub class: ClassResponse,
    pub meetings: Vec<MeetingResponse>,
}

impl ClassDetailResponse {
    pub fn from_parts(class: class::Model, meetings: Vec<class_meeting::Model>) -> Self {
        Self {
            class: ClassResponse::from(class),
            meetings: meetings.into_iter().map(MeetingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Optional fuzzy match on the class title.
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WindowRequest {
    pub status: WindowStatus,
    pub expires_at: Option<DateTime<Utc>>,
}
