//! Listing rules: who sees what, filter normalization, and pagination.
//!
//! The visibility rule is the one place business logic decides which entries
//! a requester may see; the repository turns it into SQL verbatim:
//! a non-admin sees an entry iff it is not soft-deleted AND (it is approved
//! OR they created it). Admins see every non-deleted entry.

use crate::types::DbId;

/// Default page size when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Hard cap on page size: bounds a single query's cost without changing
/// any result below it.
pub const MAX_PAGE_SIZE: i64 = 100;

/// The requester identity the visibility rule is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct Viewer {
    pub id: DbId,
    pub is_admin: bool,
}

/// Normalized listing filters. All fields ANDed with the visibility rule;
/// `None` means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct MediaListFilter {
    /// Case-insensitive substring match against title OR director.
    pub search: Option<String>,
    /// Exact match against the media type ("Movie" / "TV Show").
    pub media_type: Option<String>,
    /// Exact match against the location (industry) column.
    pub industry: Option<String>,
}

impl MediaListFilter {
    /// Build a filter from raw query strings, treating empty/whitespace
    /// values as absent.
    pub fn from_raw(
        search: Option<String>,
        media_type: Option<String>,
        industry: Option<String>,
    ) -> Self {
        Self {
            search: normalize(search),
            media_type: normalize(media_type),
            industry: normalize(industry),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 1-based page number plus page size, clamped to sane bounds.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl PageParams {
    /// Clamp raw query values: `page` floors at 1, `limit` defaults to
    /// [`DEFAULT_PAGE_SIZE`] and is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn from_raw(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Total page count for `total` matching rows: `ceil(total / limit)`.
    /// Zero matches yield zero pages.
    pub fn page_count(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }
}

/// Escape LIKE/ILIKE metacharacters so user-supplied search text is matched
/// literally. Postgres uses backslash as the default escape character.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
