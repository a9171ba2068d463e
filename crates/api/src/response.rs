//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "success": true, ... }` envelope. Use these
//! instead of ad-hoc `serde_json::json!` blocks to get compile-time type
//! safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "message": ... }` envelope for mutations that
/// return no entity (e.g. delete).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// `{ "success": true, "message": ..., "data": T }` envelope used by the
/// auth endpoints, which return both a confirmation and a payload.
#[derive(Debug, Serialize)]
pub struct MessageDataResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> MessageDataResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}
