//! Contact Model (联系人)

use serde::{Deserialize, Serialize};

/// A WhatsApp contact shown inside the widget popup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Contact {
    pub id: i64,
    /// Owning widget_settings record
    pub settings_id: i64,
    /// Display name (agent or department)
    pub name: String,
    /// Secondary line under the name (role, team, ...)
    pub subtitle: Option<String>,
    /// Phone number as entered by the merchant; digits are extracted
    /// when building the wa.me link
    pub number: String,
    /// Free-text schedule label shown to visitors (e.g. "Mon-Fri 9-18")
    pub display_time: Option<String>,
    /// Availability window start (HH:MM, 24h)
    pub start_time: Option<String>,
    /// Availability window end (HH:MM, 24h)
    pub end_time: Option<String>,
    /// Creation time (Unix millis); contacts are listed oldest first
    pub created_at: i64,
}

/// Create contact payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCreate {
    pub name: String,
    pub subtitle: Option<String>,
    pub number: String,
    pub display_time: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
