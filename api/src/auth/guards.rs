use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use common::messages::msg;
use db::models::user::Role;

#[derive(serde::Serialize, Default)]
pub struct Empty;

/// Pulls the authenticated user out of the request and re-inserts it as an
/// extension for downstream handlers.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error(msg("auth.required"))),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Shared role gate. The role comes straight from the verified claims; there
/// is no privilege hierarchy, a role not in `allowed` is rejected even for
/// admins.
async fn allow_roles(
    req: Request<Body>,
    next: Next,
    allowed: &[Role],
    failure_key: &str,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if !allowed.contains(&user.0.role) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(msg(failure_key))),
        ));
    }

    Ok(next.run(req).await)
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

pub async fn allow_admin(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_roles(req, next, &[Role::Admin], "auth.admin_only").await
}

pub async fn allow_tutor(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_roles(req, next, &[Role::Tutor], "auth.tutor_only").await
}

pub async fn allow_student(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_roles(req, next, &[Role::Student], "auth.student_only").await
}
