use axum::{Extension, Json, http::StatusCode};
use serde::Serialize;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use common::messages::msg;
use db::models::user::Role;

#[derive(Debug, Serialize, Default)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    pub role: Option<Role>,
}

/// GET /api/auth/me
///
/// Echo of the verified token claims. No database round trip.
pub async fn me(
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<MeResponse>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            MeResponse {
                id: claims.sub,
                username: claims.username,
                role: Some(claims.role),
            },
            msg("auth.me.success"),
        )),
    )
}
