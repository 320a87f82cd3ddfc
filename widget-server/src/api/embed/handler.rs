//! Embed API Handlers
//!
//! Public storefront endpoints. No session auth; the shop arrives as a
//! query parameter. Reads never create records, and an unknown shop
//! answers empty instead of erroring so storefronts stay quiet.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::{ok, time::local_now};
use crate::widget::WidgetRenderer;
use shared::models::SettingsWithContacts;
use shared::{ApiResponse, AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct EmbedQuery {
    pub shop: Option<String>,
}

fn require_shop(query: &EmbedQuery) -> AppResult<&str> {
    query
        .shop
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::missing_parameter("Shop parameter missing"))
}

/// GET /embed/settings?shop= - 店面读取设置 JSON
///
/// 未知店铺返回 `data: null`，不创建记录。
pub async fn embed_settings(
    State(state): State<ServerState>,
    Query(query): Query<EmbedQuery>,
) -> AppResult<Json<ApiResponse<Option<SettingsWithContacts>>>> {
    let shop = require_shop(&query)?;
    let record = state.settings.find_with_contacts(shop).await?;
    Ok(ok(record))
}

/// GET /embed/widget?shop= - 渲染店面小部件片段
///
/// 设置不存在或已禁用时静默返回 204，店面不渲染任何内容。
pub async fn embed_widget(
    State(state): State<ServerState>,
    Query(query): Query<EmbedQuery>,
) -> AppResult<Response> {
    let shop = require_shop(&query)?;

    let Some(record) = state.settings.find_with_contacts(shop).await? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let now = local_now(state.config.timezone);
    match WidgetRenderer::render(&record, now) {
        Some(widget) => Ok(Html(widget.html).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
