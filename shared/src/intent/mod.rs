//! Intent 模块 - 管理后台表单的统一分发
//!
//! 嵌入式后台的所有写操作都通过一个表单端点提交，由 `intent` 字段
//! 决定动作。这里把原始表单解析成编译时类型安全的 [`AdminIntent`]。

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{ButtonStyle, ContactCreate, WidgetPosition, WidgetSettingsUpdate};

/// Success message shown after saving appearance settings
pub const MSG_SETTINGS_SAVED: &str = "Settings saved!";
/// Success message shown after creating a contact
pub const MSG_CONTACT_CREATED: &str = "Contact created!";
/// Success message shown after deleting a contact
pub const MSG_CONTACT_DELETED: &str = "Contact deleted!";

/// Raw admin action form (原始表单)
///
/// Every field the admin UI can submit, all optional except `intent`.
/// Which fields are actually required depends on the intent; validation
/// happens in [`ActionForm::into_intent`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionForm {
    pub intent: String,

    // save_settings fields
    /// Checkbox field: only the literal string "true" enables the widget,
    /// an unchecked box submits nothing
    pub is_enabled: Option<String>,
    pub button_style: Option<String>,
    pub color: Option<String>,
    pub position: Option<String>,

    // create_contact fields
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub number: Option<String>,
    pub display_time: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,

    // delete_contact fields
    pub contact_id: Option<i64>,
}

/// Typed admin intent (类型安全的管理动作)
///
/// ```json
/// { "intent": "save_settings", "button_style": "edge", ... }
/// ```
/// becomes `AdminIntent::SaveSettings(...)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "intent", content = "data", rename_all = "snake_case")]
pub enum AdminIntent {
    /// 保存外观设置
    SaveSettings(WidgetSettingsUpdate),
    /// 创建联系人
    CreateContact(ContactCreate),
    /// 删除联系人
    DeleteContact { contact_id: i64 },
}

/// Empty form inputs behave exactly like absent ones
fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl ActionForm {
    /// Parse the raw form into a typed intent.
    ///
    /// Unknown intents are rejected outright; per-intent field parsing
    /// reports which value was malformed. Content rules (lengths, required
    /// text) are the service's job, not this parser's.
    pub fn into_intent(self) -> AppResult<AdminIntent> {
        match self.intent.as_str() {
            "save_settings" => {
                let style_raw = self.button_style.unwrap_or_default();
                let button_style = ButtonStyle::parse(&style_raw).ok_or_else(|| {
                    AppError::validation("button_style must be 'edge' or 'circle'")
                })?;

                let position_raw = self.position.unwrap_or_default();
                let position = WidgetPosition::parse(&position_raw).ok_or_else(|| {
                    AppError::validation("position must be 'left' or 'right'")
                })?;

                Ok(AdminIntent::SaveSettings(WidgetSettingsUpdate {
                    is_enabled: self.is_enabled.as_deref() == Some("true"),
                    button_style,
                    color: self.color.unwrap_or_default(),
                    position,
                }))
            }

            "create_contact" => Ok(AdminIntent::CreateContact(ContactCreate {
                name: self.name.unwrap_or_default(),
                subtitle: none_if_empty(self.subtitle),
                number: self.number.unwrap_or_default(),
                display_time: none_if_empty(self.display_time),
                start_time: none_if_empty(self.start_time),
                end_time: none_if_empty(self.end_time),
            })),

            "delete_contact" => {
                let contact_id = self
                    .contact_id
                    .ok_or_else(|| AppError::validation("contact_id is required"))?;
                Ok(AdminIntent::DeleteContact { contact_id })
            }

            _ => Err(AppError::invalid_intent()),
        }
    }
}
