//! Class catalogue, meeting plans and enrollment.

pub mod common;
pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use util::state::AppState;

use crate::auth::guards::{allow_authenticated, allow_student, allow_tutor};
use get::{get_class, list_classes};
use post::{create_class, enroll};
use put::{edit_class, set_window};

/// Routes under `/api/classes`. The required role varies per endpoint, so
/// guards sit on the individual routes instead of the whole group.
pub fn classes_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_class).route_layer(from_fn(allow_tutor)),
        )
        .route(
            "/",
            get(list_classes).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{class_id}",
            get(get_class).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{class_id}",
            put(edit_class).route_layer(from_fn(allow_tutor)),
        )
        .route(
            "/{class_id}/enroll",
            post(enroll).route_layer(from_fn(allow_student)),
        )
        .route(
            "/{class_id}/meetings/{meeting_number}/window",
            put(set_window).route_layer(from_fn(allow_tutor)),
        )
}
