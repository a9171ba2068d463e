//! Handlers for the `/media` resource: submit, list, update, delete.

use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use screenlog_core::error::CoreError;
use screenlog_core::listing::Viewer;
use screenlog_core::media::MediaType;
use screenlog_core::types::DbId;
use screenlog_core::validation::{
    validate_budget, validate_release_year, validate_required, validate_url_or_empty, FieldError,
};
use screenlog_db::models::media_entry::{
    CreateMediaEntry, MediaEntry, MediaPage, UpdateMediaEntry,
};
use screenlog_db::repositories::MediaRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::MediaListQuery;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /media`.
///
/// `type` arrives as a raw string so an invalid value produces a field
/// error in the validation list instead of a body-deserialization
/// rejection. Poster and thumbnail URLs default to the empty string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaRequest {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub media_type: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub release_year: i32,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

/// Request body for `PATCH /media/{id}`.
///
/// Absent fields keep their stored values. Protected columns (`status`,
/// `createdBy`, the deletion flags) have no counterpart here, and unknown
/// JSON keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub director: Option<String>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub release_year: Option<i32>,
    pub poster_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

fn parse_media_type(raw: &str) -> Result<MediaType, FieldError> {
    MediaType::from_str(raw)
        .map_err(|()| FieldError::new("type", "Type must be either Movie or TV Show"))
}

impl CreateMediaRequest {
    /// Validate every field, collecting all failures, and convert into the
    /// insert DTO.
    fn into_input(self) -> Result<CreateMediaEntry, CoreError> {
        let mut errors = Vec::new();

        errors.extend(validate_required("title", &self.title).err());
        let media_type = match parse_media_type(&self.media_type) {
            Ok(t) => Some(t),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        errors.extend(validate_required("director", &self.director).err());
        errors.extend(validate_budget(self.budget).err());
        errors.extend(validate_required("location", &self.location).err());
        errors.extend(validate_required("duration", &self.duration).err());
        errors.extend(validate_release_year(self.release_year).err());
        errors.extend(validate_url_or_empty("posterUrl", &self.poster_url).err());
        errors.extend(validate_url_or_empty("thumbnailUrl", &self.thumbnail_url).err());

        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok(CreateMediaEntry {
            title: self.title,
            media_type: media_type.unwrap_or(MediaType::Movie), // unreachable: errors is empty
            director: self.director,
            budget: self.budget,
            location: self.location,
            duration: self.duration,
            release_year: self.release_year,
            poster_url: self.poster_url,
            thumbnail_url: self.thumbnail_url,
        })
    }
}

impl UpdateMediaRequest {
    /// Validate only the fields that are present and convert into the
    /// partial-update DTO.
    fn into_input(self) -> Result<UpdateMediaEntry, CoreError> {
        let mut errors = Vec::new();

        if let Some(title) = &self.title {
            errors.extend(validate_required("title", title).err());
        }
        let media_type = match &self.media_type {
            Some(raw) => match parse_media_type(raw) {
                Ok(t) => Some(t),
                Err(e) => {
                    errors.push(e);
                    None
                }
            },
            None => None,
        };
        if let Some(director) = &self.director {
            errors.extend(validate_required("director", director).err());
        }
        if let Some(budget) = self.budget {
            errors.extend(validate_budget(budget).err());
        }
        if let Some(location) = &self.location {
            errors.extend(validate_required("location", location).err());
        }
        if let Some(duration) = &self.duration {
            errors.extend(validate_required("duration", duration).err());
        }
        if let Some(year) = self.release_year {
            errors.extend(validate_release_year(year).err());
        }
        if let Some(url) = &self.poster_url {
            errors.extend(validate_url_or_empty("posterUrl", url).err());
        }
        if let Some(url) = &self.thumbnail_url {
            errors.extend(validate_url_or_empty("thumbnailUrl", url).err());
        }

        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok(UpdateMediaEntry {
            title: self.title,
            media_type,
            director: self.director,
            budget: self.budget,
            location: self.location,
            duration: self.duration,
            release_year: self.release_year,
            poster_url: self.poster_url,
            thumbnail_url: self.thumbnail_url,
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /media` -- submit a new entry; it enters the moderation queue as
/// `pending` regardless of the request body.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateMediaRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<MediaEntry>>)> {
    let input = input.into_input()?;
    let entry = MediaRepo::create(&state.pool, &input, user.id).await?;

    tracing::info!(entry_id = entry.id, user_id = user.id, "Media entry submitted");

    Ok((StatusCode::CREATED, Json(DataResponse::new(entry))))
}

/// `GET /media` -- the access-controlled listing.
///
/// Admins see everything non-deleted; everyone else sees approved entries
/// plus their own, whatever their status. The response body is the bare
/// `{data, page, pages}` page, not the `{success, data}` envelope.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<MediaListQuery>,
) -> AppResult<Json<MediaPage>> {
    let viewer = Viewer {
        id: user.id,
        is_admin: user.role.is_admin(),
    };
    let page = MediaRepo::list_visible(
        &state.pool,
        viewer,
        &query.filter(),
        query.page_params(),
    )
    .await?;
    Ok(Json(page))
}

/// `PATCH /media/{id}` -- partial update, admin or creator only.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMediaRequest>,
) -> AppResult<Json<DataResponse<MediaEntry>>> {
    let input = input.into_input()?;

    authorize_entry_mutation(&state, &user, id, "update").await?;

    // The entry can be soft-deleted between the check and the update;
    // the guarded UPDATE reports that as not-found too.
    let updated = MediaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Media entry",
            id,
        })?;

    tracing::info!(entry_id = id, user_id = user.id, "Media entry updated");

    Ok(Json(DataResponse::new(updated)))
}

/// `DELETE /media/{id}` -- soft delete, admin or creator only.
///
/// A second delete of the same entry reads as 404, never as
/// "already deleted".
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    authorize_entry_mutation(&state, &user, id, "delete").await?;

    let deleted = MediaRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Media entry",
            id,
        }
        .into());
    }

    tracing::info!(entry_id = id, user_id = user.id, "Media entry soft-deleted");

    Ok(Json(MessageResponse::new("Media entry deleted successfully")))
}

/// Resolve the entry (404 when absent or soft-deleted) and enforce the
/// `admin OR creator` ownership rule (403 otherwise).
///
/// Resolution runs first, so a non-owner probing a deleted id sees 404,
/// not 403.
async fn authorize_entry_mutation(
    state: &AppState,
    user: &AuthUser,
    id: DbId,
    action: &str,
) -> AppResult<()> {
    let entry = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Media entry",
            id,
        })?;

    if !user.role.is_admin() && entry.created_by != user.id {
        return Err(CoreError::Forbidden(format!(
            "You are not authorized to {action} this entry"
        ))
        .into());
    }
    Ok(())
}
