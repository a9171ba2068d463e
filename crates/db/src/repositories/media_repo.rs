//! Repository for the `media_entries` table.
//!
//! This is where the listing access-control rule becomes SQL: every query
//! excludes soft-deleted rows, and `list_visible` additionally restricts
//! non-admin viewers to approved entries plus their own.

use sqlx::PgPool;

use screenlog_core::listing::{escape_like, MediaListFilter, PageParams, Viewer};
use screenlog_core::media::MediaStatus;
use screenlog_core::types::DbId;

use crate::models::media_entry::{
    CreateMediaEntry, MediaEntry, MediaEntryWithOwner, MediaPage, UpdateMediaEntry,
};

/// Column list shared across single-entry queries.
const COLUMNS: &str = "\
    id, title, media_type, director, budget, location, duration, release_year, \
    poster_url, thumbnail_url, status, created_by, is_deleted, deleted_at, \
    created_at, updated_at";

/// Column list for queries joining the creator's name.
const OWNER_COLUMNS: &str = "\
    e.id, e.title, e.media_type, e.director, e.budget, e.location, e.duration, \
    e.release_year, e.poster_url, e.thumbnail_url, e.status, e.created_by, \
    u.name AS created_by_name, e.created_at, e.updated_at";

/// Visibility + filter predicate shared by the page and count queries.
///
/// `$1` is the admin flag, `$2` the viewer id; `$3`-`$5` are the optional
/// search pattern, media type, and location filters (NULL = no constraint).
const VISIBLE_WHERE: &str = "\
    e.is_deleted = FALSE \
    AND ($1 OR e.status = 'approved' OR e.created_by = $2) \
    AND ($3::TEXT IS NULL OR e.title ILIKE $3 OR e.director ILIKE $3) \
    AND ($4::TEXT IS NULL OR e.media_type = $4) \
    AND ($5::TEXT IS NULL OR e.location = $5)";

/// Provides CRUD and moderation operations for media entries.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a new entry owned by `created_by`. The status column defaults
    /// to `pending` regardless of anything the caller submitted.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMediaEntry,
        created_by: DbId,
    ) -> Result<MediaEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_entries
                (title, media_type, director, budget, location, duration,
                 release_year, poster_url, thumbnail_url, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaEntry>(&query)
            .bind(&input.title)
            .bind(input.media_type)
            .bind(&input.director)
            .bind(input.budget)
            .bind(&input.location)
            .bind(&input.duration)
            .bind(input.release_year)
            .bind(&input.poster_url)
            .bind(&input.thumbnail_url)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by ID. Excludes soft-deleted rows, so a deleted entry
    /// is indistinguishable from one that never existed.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaEntry>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM media_entries WHERE id = $1 AND is_deleted = FALSE");
        sqlx::query_as::<_, MediaEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The access-controlled listing: one page of entries the viewer is
    /// entitled to see, filters ANDed on top, newest first (id as the
    /// deterministic tiebreak), creator resolved to `{id, name}`.
    pub async fn list_visible(
        pool: &PgPool,
        viewer: Viewer,
        filter: &MediaListFilter,
        page: PageParams,
    ) -> Result<MediaPage, sqlx::Error> {
        let search_pattern = filter
            .search
            .as_deref()
            .map(|s| format!("%{}%", escape_like(s)));

        let list_query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM media_entries e
             JOIN users u ON u.id = e.created_by
             WHERE {VISIBLE_WHERE}
             ORDER BY e.created_at DESC, e.id DESC
             LIMIT $6 OFFSET $7"
        );
        let rows = sqlx::query_as::<_, MediaEntryWithOwner>(&list_query)
            .bind(viewer.is_admin)
            .bind(viewer.id)
            .bind(&search_pattern)
            .bind(&filter.media_type)
            .bind(&filter.industry)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count_query =
            format!("SELECT COUNT(*) FROM media_entries e WHERE {VISIBLE_WHERE}");
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(viewer.is_admin)
            .bind(viewer.id)
            .bind(&search_pattern)
            .bind(&filter.media_type)
            .bind(&filter.industry)
            .fetch_one(pool)
            .await?;

        Ok(MediaPage {
            data: rows.into_iter().map(|r| r.into_response()).collect(),
            page: page.page,
            pages: page.page_count(total),
        })
    }

    /// Apply a partial update. Only non-`None` fields in `input` are
    /// applied (COALESCE merge); protected columns are not reachable here.
    ///
    /// Returns `None` if the entry is absent or soft-deleted.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMediaEntry,
    ) -> Result<Option<MediaEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE media_entries SET
                title = COALESCE($2, title),
                media_type = COALESCE($3, media_type),
                director = COALESCE($4, director),
                budget = COALESCE($5, budget),
                location = COALESCE($6, location),
                duration = COALESCE($7, duration),
                release_year = COALESCE($8, release_year),
                poster_url = COALESCE($9, poster_url),
                thumbnail_url = COALESCE($10, thumbnail_url),
                updated_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaEntry>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.media_type)
            .bind(&input.director)
            .bind(input.budget)
            .bind(&input.location)
            .bind(&input.duration)
            .bind(input.release_year)
            .bind(&input.poster_url)
            .bind(&input.thumbnail_url)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an entry. Returns `false` if it is absent or already
    /// deleted -- callers surface both as NotFound, so deleting twice reads
    /// as "not found", never as "already deleted".
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE media_entries SET is_deleted = TRUE, deleted_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unconditionally assign a status. No transition graph: any status is
    /// reachable from any other. Returns `None` for absent/deleted entries.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: MediaStatus,
    ) -> Result<Option<MediaEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE media_entries SET status = $2, updated_at = NOW()
             WHERE id = $1 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaEntry>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// The moderation queue: all pending, non-deleted entries with the
    /// creator resolved. Unpaginated (bounded by this system's scale).
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<MediaEntryWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM media_entries e
             JOIN users u ON u.id = e.created_by
             WHERE e.status = 'pending' AND e.is_deleted = FALSE
             ORDER BY e.created_at DESC, e.id DESC"
        );
        sqlx::query_as::<_, MediaEntryWithOwner>(&query)
            .fetch_all(pool)
            .await
    }
}
