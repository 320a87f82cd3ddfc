//! Settings API Handlers

use axum::{Form, Json, extract::State};
use serde_json::Value;

use crate::auth::ShopContext;
use crate::core::ServerState;
use crate::utils::{ok, ok_with_message};
use shared::intent::{
    ActionForm, AdminIntent, MSG_CONTACT_CREATED, MSG_CONTACT_DELETED, MSG_SETTINGS_SAVED,
};
use shared::models::SettingsWithContacts;
use shared::{ApiResponse, AppError, AppResult};

fn to_json(value: impl serde::Serialize) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::internal(format!("Serialization failed: {e}")))
}

/// GET /api/settings - 获取店铺设置与联系人 (不存在则创建)
pub async fn get_settings(
    State(state): State<ServerState>,
    ctx: ShopContext,
) -> AppResult<Json<ApiResponse<SettingsWithContacts>>> {
    let record = state.settings.get_or_create(&ctx.shop).await?;
    Ok(ok(record))
}

/// POST /api/settings/action - 分发管理端表单动作
///
/// 表单必须带 `intent` 字段；成功响应把面向用户的提示放在 `message`。
pub async fn action(
    State(state): State<ServerState>,
    ctx: ShopContext,
    Form(form): Form<ActionForm>,
) -> AppResult<Json<ApiResponse<Value>>> {
    match form.into_intent()? {
        AdminIntent::SaveSettings(update) => {
            let settings = state.settings.update_appearance(&ctx.shop, update).await?;
            Ok(ok_with_message(to_json(settings)?, MSG_SETTINGS_SAVED))
        }
        AdminIntent::CreateContact(data) => {
            let contact = state.settings.add_contact(&ctx.shop, data).await?;
            Ok(ok_with_message(to_json(contact)?, MSG_CONTACT_CREATED))
        }
        AdminIntent::DeleteContact { contact_id } => {
            state.settings.remove_contact(&ctx.shop, contact_id).await?;
            Ok(ok_with_message(Value::Null, MSG_CONTACT_DELETED))
        }
    }
}
