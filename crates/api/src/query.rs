//! Query string types for listing endpoints.

use serde::Deserialize;
use screenlog_core::listing::{MediaListFilter, PageParams};

/// Raw query parameters accepted by `GET /media`.
///
/// Everything is optional and arrives as loosely-typed strings; the
/// conversion to [`MediaListFilter`] / [`PageParams`] normalizes blanks
/// and clamps pagination. An unknown `type` value simply matches nothing
/// rather than rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct MediaListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub industry: Option<String>,
}

impl MediaListQuery {
    pub fn filter(&self) -> MediaListFilter {
        MediaListFilter::from_raw(
            self.search.clone(),
            self.media_type.clone(),
            self.industry.clone(),
        )
    }

    pub fn page_params(&self) -> PageParams {
        PageParams::from_raw(self.page, self.limit)
    }
}
