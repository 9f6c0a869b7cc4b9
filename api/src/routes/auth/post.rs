use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use common::format_validation_errors;
use common::messages::msg;
use util::state::AppState;
use db::models::user::{Model as UserModel, Role};

lazy_static::lazy_static! {
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new("^[a-z0-9_]{3,32}$").unwrap();
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(regex(
        path = &*USERNAME_REGEX,
        message = "Username must be 3-32 lowercase letters, digits or underscores"
    ))]
    pub username: String,

    #[validate(length(min = 1, message = "Display name must not be empty"))]
    pub display_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Defaults to `student`. `admin` is rejected.
    pub role: Option<Role>,
}

#[derive(Debug, Serialize, Default)]
pub struct AuthResponse {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: Option<Role>,
    pub approved: bool,
    pub token: String,
    pub expires_at: String,
}

impl AuthResponse {
    fn from_user(user: UserModel, token: String, expires_at: String) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            email: user.email,
            role: Some(user.role),
            approved: user.approved,
            token,
            expires_at,
        }
    }
}

/// POST /api/auth/register
///
/// Register a new account. Students are usable immediately; tutors start
/// unapproved and wait for an admin. Admin accounts cannot be created here.
///
/// ### Responses
/// - `201 Created` with the user and a bearer token
/// - `400 Bad Request` on validation failure or a requested admin role
/// - `409 Conflict` when the username or email is taken
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> (StatusCode, Json<ApiResponse<AuthResponse>>) {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(error_message)),
        );
    }

    let role = req.role.unwrap_or(Role::Student);
    if role == Role::Admin {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(msg("auth.register.admin_blocked"))),
        );
    }

    match UserModel::create(
        state.db(),
        &req.username,
        &req.email,
        &req.display_name,
        &req.password,
        role.clone(),
    )
    .await
    {
        Ok(user) => {
            let (token, expiry) = generate_jwt(&user);
            let message = if role == Role::Tutor {
                msg("auth.register.tutor_pending")
            } else {
                msg("auth.register.success")
            };
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    AuthResponse::from_user(user, token, expiry),
                    message,
                )),
            )
        }
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => (
            StatusCode::CONFLICT,
            Json(ApiResponse::error(msg("auth.register.taken"))),
        ),
        Err(e) => {
            tracing::error!("Failed to register user: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login
///
/// Authenticate and issue a JWT. Unapproved tutors may log in; approval only
/// gates what they can do afterwards.
///
/// ### Responses
/// - `200 OK` with the user and a bearer token
/// - `401 Unauthorized` on unknown username or wrong password
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> (StatusCode, Json<ApiResponse<AuthResponse>>) {
    match UserModel::verify_credentials(state.db(), &req.username, &req.password).await {
        Ok(Some(user)) => {
            let (token, expiry) = generate_jwt(&user);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    AuthResponse::from_user(user, token, expiry),
                    msg("auth.login.success"),
                )),
            )
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error(msg("auth.login.invalid"))),
        ),
        Err(e) => {
            tracing::error!("Failed to verify credentials: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(msg("error.internal"))),
            )
        }
    }
}
