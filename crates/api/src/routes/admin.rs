//! Route definitions for the `/admin` moderation surface.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All handlers enforce the admin role via
/// the `RequireAdmin` extractor.
///
/// ```text
/// GET   /media/pending        -> pending
/// PATCH /media/{id}/approve   -> approve
/// PATCH /media/{id}/reject    -> reject
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/media/pending", get(admin::pending))
        .route("/media/{id}/approve", patch(admin::approve))
        .route("/media/{id}/reject", patch(admin::reject))
}
