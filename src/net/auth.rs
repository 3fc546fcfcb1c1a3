//! Authentication request.

use serde::{Deserialize, Serialize};

use crate::net::backend::{ApiError, Backend};
use crate::net::types::User;

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// `POST /auth/login`. A `Status(401)` means bad credentials; the caller
/// decides how to surface it.
pub async fn login(
    backend: &Backend,
    credentials: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    backend.post_json("/auth/login", credentials).await
}
