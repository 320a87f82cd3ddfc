//! Data models
//!
//! Shared between widget-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod contact;
pub mod plan;
pub mod widget_settings;

// Re-exports
pub use contact::*;
pub use plan::*;
pub use widget_settings::*;
