//! Moderation and oversight endpoints.

pub mod common;
pub mod get;
pub mod put;

use axum::{
    Router,
    routing::{get as get_method, put},
};
use util::state::AppState;

use get::attendance_roster;
use put::{class_action, tutor_action};

/// Routes under `/api/admin`. The admin guard sits on the group nest.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/tutors/{user_id}/{action}", put(tutor_action))
        .route("/classes/{class_id}/{action}", put(class_action))
        .route(
            "/classes/{class_id}/meetings/{meeting_number}/attendance",
            get_method(attendance_roster),
        )
}
