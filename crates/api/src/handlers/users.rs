//! Handlers for the `/users` resource.

use axum::Json;

use screenlog_db::models::user::UserResponse;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// `GET /users/me` -- the authenticated caller's public profile.
///
/// The extractor has already resolved the token subject against the
/// database, so this is a pure projection.
pub async fn me(user: AuthUser) -> AppResult<Json<DataResponse<UserResponse>>> {
    Ok(Json(DataResponse::new(UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
    })))
}
