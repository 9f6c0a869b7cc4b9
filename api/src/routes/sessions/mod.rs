//! Tutoring slot management for tutors.

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{delete as delete_method, get, post, put},
};
use util::state::AppState;

use delete::delete_session;
use get::list_sessions;
use post::create_session;
use put::{assign_session, session_action};

/// Routes under `/api/tutor/sessions`. The tutor guard sits on the group
/// nest; ownership of the slot's class is checked per handler.
pub fn sessions_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/", get(list_sessions))
        .route("/{session_id}/assign", put(assign_session))
        .route("/{session_id}/{action}", put(session_action))
        .route("/{session_id}", delete_method(delete_session))
}
