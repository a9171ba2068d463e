//! Handlers for the `/admin/media` moderation surface.

use axum::extract::{Path, State};
use axum::Json;

use screenlog_core::error::CoreError;
use screenlog_core::media::MediaStatus;
use screenlog_core::types::DbId;
use screenlog_db::models::media_entry::{MediaEntry, MediaEntryResponse};
use screenlog_db::repositories::MediaRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// `GET /admin/media/pending` -- the moderation queue, newest first.
pub async fn pending(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<MediaEntryResponse>>>> {
    let queue = MediaRepo::list_pending(&state.pool).await?;
    let data = queue.into_iter().map(|e| e.into_response()).collect();
    Ok(Json(DataResponse::new(data)))
}

/// `PATCH /admin/media/{id}/approve`.
pub async fn approve(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MediaEntry>>> {
    set_status(&state, id, MediaStatus::Approved, admin.id).await
}

/// `PATCH /admin/media/{id}/reject`.
pub async fn reject(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MediaEntry>>> {
    set_status(&state, id, MediaStatus::Rejected, admin.id).await
}

/// Assign a status unconditionally: there is no transition graph, so a
/// rejected entry can later be approved. Absent and soft-deleted entries
/// are both 404.
async fn set_status(
    state: &AppState,
    id: DbId,
    status: MediaStatus,
    admin_id: DbId,
) -> AppResult<Json<DataResponse<MediaEntry>>> {
    let entry = MediaRepo::set_status(&state.pool, id, status)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Media entry",
            id,
        })?;

    tracing::info!(
        entry_id = id,
        admin_id,
        status = %status.as_str(),
        "Media entry moderated"
    );

    Ok(Json(DataResponse::new(entry)))
}
