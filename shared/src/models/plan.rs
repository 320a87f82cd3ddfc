//! Subscription Plan Model (套餐限制)

use serde::{Deserialize, Serialize};

/// Subscription tier a shop is on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PlanTier {
    Basic,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
        }
    }

    /// Human-facing tier name used in limit messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
        }
    }
}

impl Default for PlanTier {
    fn default() -> Self {
        Self::Basic
    }
}

/// Popup customization level granted by a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PopupCustomization {
    /// Stock popup only
    None,
    /// Header color and title can be changed
    Basic,
    /// Full template control
    Full,
}

/// Feature limits attached to a subscription tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Maximum number of contacts a shop may create
    pub max_contacts: u32,
    /// Whether fine-grained widget offsets are unlocked
    pub advanced_positioning: bool,
    /// Popup customization level
    pub popup_customization: PopupCustomization,
    /// Whether greeting automations are unlocked
    pub automations: bool,
}

impl PlanLimits {
    /// Look up the limits for a tier.
    pub fn for_tier(tier: &PlanTier) -> Self {
        match tier {
            PlanTier::Basic => Self {
                max_contacts: 2,
                advanced_positioning: false,
                popup_customization: PopupCustomization::None,
                automations: false,
            },
        }
    }
}
