//! HTTP handlers, grouped by resource.

pub mod admin;
pub mod auth;
pub mod media;
pub mod users;
