use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// JWT payload. The role travels in the token, so authorization checks never
/// go back to the database.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub role: Role,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
