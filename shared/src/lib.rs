//! Shared types for the widget backend
//!
//! Holds everything the server and future clients agree on: error codes, the
//! API response envelope, admin form intents, and the persisted widget
//! models. Server-only concerns stay out of this crate; database derives are
//! behind the `db` feature so lightweight consumers compile without sqlx.

pub mod error;
pub mod intent;
pub mod models;
pub mod response;
pub mod util;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::{ApiResponse, Empty};
