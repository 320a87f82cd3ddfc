//! Widget Settings Model (悬浮按钮设置)

use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::plan::PlanTier;

/// Default button color applied when a shop is first seen
pub const DEFAULT_COLOR: &str = "#25D366";

/// Floating button style
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ButtonStyle {
    /// Rounded tab attached to the screen edge
    Edge,
    /// Classic round floating action button
    Circle,
}

impl ButtonStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Circle => "circle",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "edge" => Some(Self::Edge),
            "circle" => Some(Self::Circle),
            _ => None,
        }
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::Edge
    }
}

/// Horizontal screen side the widget is anchored to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum WidgetPosition {
    Left,
    Right,
}

impl WidgetPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl Default for WidgetPosition {
    fn default() -> Self {
        Self::Right
    }
}

/// Per-shop widget configuration record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WidgetSettings {
    pub id: i64,
    /// Shop domain this configuration belongs to (unique)
    pub shop: String,
    /// Master switch; false hides the storefront widget entirely
    pub is_enabled: bool,
    pub button_style: ButtonStyle,
    /// CSS color of the floating button
    pub color: String,
    pub position: WidgetPosition,
    /// Subscription tier controlling feature limits
    pub plan: PlanTier,
    /// Creation time (Unix millis)
    pub created_at: i64,
    /// Last update time (Unix millis)
    pub updated_at: i64,
}

/// Appearance update payload
///
/// The admin form always submits the complete appearance, so every field is
/// required and the stored record is replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSettingsUpdate {
    pub is_enabled: bool,
    pub button_style: ButtonStyle,
    pub color: String,
    pub position: WidgetPosition,
}

/// Settings record together with its contacts in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsWithContacts {
    #[serde(flatten)]
    pub settings: WidgetSettings,
    pub contacts: Vec<Contact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse_roundtrip() {
        assert_eq!(ButtonStyle::parse("edge"), Some(ButtonStyle::Edge));
        assert_eq!(ButtonStyle::parse("circle"), Some(ButtonStyle::Circle));
        assert_eq!(ButtonStyle::parse("triangle"), None);
        assert_eq!(ButtonStyle::Edge.as_str(), "edge");
    }

    #[test]
    fn test_position_parse() {
        assert_eq!(WidgetPosition::parse("left"), Some(WidgetPosition::Left));
        assert_eq!(WidgetPosition::parse("right"), Some(WidgetPosition::Right));
        assert_eq!(WidgetPosition::parse("center"), None);
    }

    #[test]
    fn test_enum_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ButtonStyle::Circle).unwrap(),
            "\"circle\""
        );
        let pos: WidgetPosition = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(pos, WidgetPosition::Left);
    }

    #[test]
    fn test_defaults_match_first_install() {
        assert_eq!(ButtonStyle::default(), ButtonStyle::Edge);
        assert_eq!(WidgetPosition::default(), WidgetPosition::Right);
        assert_eq!(DEFAULT_COLOR, "#25D366");
    }
}
