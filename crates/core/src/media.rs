//! Media entry enums and the moderation status model.

use serde::{Deserialize, Serialize};

/// The kind of a media entry.
///
/// Wire values are `"Movie"` and `"TV Show"` (both JSON and the TEXT column
/// use the same spelling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
pub enum MediaType {
    Movie,
    #[serde(rename = "TV Show")]
    #[sqlx(rename = "TV Show")]
    TvShow,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
            MediaType::TvShow => "TV Show",
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Movie" => Ok(MediaType::Movie),
            "TV Show" => Ok(MediaType::TvShow),
            _ => Err(()),
        }
    }
}

/// Moderation status of a media entry.
///
/// Every entry starts as `pending`. There is deliberately no transition
/// graph: an admin may assign any status at any time, including
/// `rejected -> approved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum MediaStatus {
    Pending,
    Approved,
    Rejected,
}

impl MediaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaStatus::Pending => "pending",
            MediaStatus::Approved => "approved",
            MediaStatus::Rejected => "rejected",
        }
    }
}
