//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/auth` → registration, login, current-user echo
//! - `/classes` → class catalog, enrollment, attendance windows
//! - `/attendance` → student check-in lifecycle
//! - `/tutor/sessions` → session slot management (tutor-only)
//! - `/admin` → tutor/class approval and attendance rosters (admin-only)

use crate::auth::guards::{allow_admin, allow_tutor};
use crate::routes::{
    admin::admin_routes, attendance::attendance_routes, auth::auth_routes,
    classes::classes_routes, health::health_routes, sessions::sessions_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod admin;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod health;
pub mod sessions;

/// Builds the complete application router.
///
/// Role guards sit on the route groups; per-route guards live inside the
/// group builders where the required role varies by endpoint.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/classes", classes_routes())
        .nest("/attendance", attendance_routes())
        .nest(
            "/tutor/sessions",
            sessions_routes().route_layer(from_fn(allow_tutor)),
        )
        .nest("/admin", admin_routes().route_layer(from_fn(allow_admin)))
        .with_state(app_state)
}
