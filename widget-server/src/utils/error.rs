//! API response helpers
//!
//! Error types live in `shared::error`; handlers build success envelopes
//! through these helpers so every endpoint emits the same shape.

use axum::Json;
use serde::Serialize;
use shared::ApiResponse;

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok_with_message(data, message))
}
