//! Domain types and rules shared by the database and API layers.
//!
//! No I/O happens here: this crate defines the entities' enums, the error
//! taxonomy, the visibility/pagination rules for listing, and the field-level
//! input validators used at the HTTP boundary.

pub mod error;
pub mod listing;
pub mod media;
pub mod roles;
pub mod types;
pub mod validation;
