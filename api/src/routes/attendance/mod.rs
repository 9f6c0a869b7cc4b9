//! Student attendance check-in.

pub mod common;
pub mod post;

use axum::{Router, middleware::from_fn, routing::post as post_method};
use util::state::AppState;

use crate::auth::guards::allow_student;
use post::{confirm_attendance, start_attendance};

/// Routes under `/api/attendance`. Both endpoints act on behalf of the
/// calling student, so the whole group is student-only.
pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/start", post_method(start_attendance))
        .route("/confirm", post_method(confirm_attendance))
        .route_layer(from_fn(allow_student))
}
