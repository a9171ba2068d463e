//! Route aggregation for the `/api/v1` tree.

pub mod admin;
pub mod auth;
pub mod health;
pub mod media;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                     register (public)
/// /auth/login                        login (public)
///
/// /users/me                          current user (requires auth)
///
/// /media                             list, submit (requires auth)
/// /media/{id}                        update, delete (admin or creator)
///
/// /admin/media/pending               moderation queue (admin only)
/// /admin/media/{id}/approve          approve (admin only)
/// /admin/media/{id}/reject           reject (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/media", media::router())
        .nest("/admin", admin::router())
}
