//! Media entry entity model, DTOs, and response shapes.

use screenlog_core::media::{MediaStatus, MediaType};
use screenlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full media entry row from the `media_entries` table.
///
/// Serialized directly for create/update/moderation responses, where the
/// creator appears as a bare id (the listing and the pending queue resolve
/// it to `{id, name}` via [`MediaEntryWithOwner`]).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub director: String,
    pub budget: f64,
    pub location: String,
    pub duration: String,
    pub release_year: i32,
    pub poster_url: String,
    pub thumbnail_url: String,
    pub status: MediaStatus,
    pub created_by: DbId,
    pub is_deleted: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Media entry joined with its creator's display name.
///
/// The flat `FromRow` shape; convert with [`Self::into_response`] before
/// serializing so the creator nests as `{id, name}`.
#[derive(Debug, Clone, FromRow)]
pub struct MediaEntryWithOwner {
    pub id: DbId,
    pub title: String,
    pub media_type: MediaType,
    pub director: String,
    pub budget: f64,
    pub location: String,
    pub duration: String,
    pub release_year: i32,
    pub poster_url: String,
    pub thumbnail_url: String,
    pub status: MediaStatus,
    pub created_by: DbId,
    pub created_by_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MediaEntryWithOwner {
    pub fn into_response(self) -> MediaEntryResponse {
        MediaEntryResponse {
            id: self.id,
            title: self.title,
            media_type: self.media_type,
            director: self.director,
            budget: self.budget,
            location: self.location,
            duration: self.duration,
            release_year: self.release_year,
            poster_url: self.poster_url,
            thumbnail_url: self.thumbnail_url,
            status: self.status,
            created_by: MediaOwner {
                id: self.created_by,
                name: self.created_by_name,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Creator reference exposed by listing responses: id and display name only.
#[derive(Debug, Clone, Serialize)]
pub struct MediaOwner {
    pub id: DbId,
    pub name: String,
}

/// Listing/pending-queue item with the owner resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntryResponse {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub director: String,
    pub budget: f64,
    pub location: String,
    pub duration: String,
    pub release_year: i32,
    pub poster_url: String,
    pub thumbnail_url: String,
    pub status: MediaStatus,
    pub created_by: MediaOwner,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One page of listing results: `pages = ceil(total / limit)`.
#[derive(Debug, Serialize)]
pub struct MediaPage {
    pub data: Vec<MediaEntryResponse>,
    pub page: i64,
    pub pages: i64,
}

/// DTO for inserting a new entry. `status` and the deletion flags are not
/// representable here: creation always starts at `pending`, and `created_by`
/// is passed separately by the handler from the authenticated identity.
#[derive(Debug)]
pub struct CreateMediaEntry {
    pub title: String,
    pub media_type: MediaType,
    pub director: String,
    pub budget: f64,
    pub location: String,
    pub duration: String,
    pub release_year: i32,
    pub poster_url: String,
    pub thumbnail_url: String,
}

/// DTO for partial updates. Only the allow-listed fields appear; `status`,
/// `created_by`, and the deletion flags cannot travel through this path.
/// `None` fields keep their prior value (COALESCE merge).
#[derive(Debug, Default)]
pub struct UpdateMediaEntry {
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
    pub director: Option<String>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub release_year: Option<i32>,
    pub poster_url: Option<String>,
    pub thumbnail_url: Option<String>,
}
