//! Widget Settings Repository

use super::{RepoError, RepoResult};
use shared::models::{WidgetSettings, WidgetSettingsUpdate};
use sqlx::SqlitePool;

pub async fn find_by_shop(pool: &SqlitePool, shop: &str) -> RepoResult<Option<WidgetSettings>> {
    let settings = sqlx::query_as::<_, WidgetSettings>(
        "SELECT id, shop, is_enabled, button_style, color, position, plan, created_at, updated_at FROM widget_settings WHERE shop = ?",
    )
    .bind(shop)
    .fetch_optional(pool)
    .await?;
    Ok(settings)
}

/// Fetch a shop's settings row, creating it with defaults on first access.
///
/// Concurrent first requests race on the INSERT; `ON CONFLICT DO NOTHING`
/// makes the loser fall through to the SELECT of the winner's row.
pub async fn get_or_create(pool: &SqlitePool, shop: &str) -> RepoResult<WidgetSettings> {
    if let Some(settings) = find_by_shop(pool, shop).await? {
        return Ok(settings);
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO widget_settings (id, shop, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) ON CONFLICT(shop) DO NOTHING",
    )
    .bind(id)
    .bind(shop)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_shop(pool, shop)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create widget settings".into()))
}

/// Replace the appearance fields of an existing settings row.
///
/// Plan and shop are never written here; the update form does not carry them.
pub async fn update_appearance(
    pool: &SqlitePool,
    shop: &str,
    data: WidgetSettingsUpdate,
) -> RepoResult<WidgetSettings> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE widget_settings SET is_enabled = ?1, button_style = ?2, color = ?3, position = ?4, updated_at = ?5 WHERE shop = ?6",
    )
    .bind(data.is_enabled)
    .bind(data.button_style.as_str())
    .bind(&data.color)
    .bind(data.position.as_str())
    .bind(now)
    .bind(shop)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Widget settings for shop {shop} not found"
        )));
    }
    find_by_shop(pool, shop)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Widget settings for shop {shop} not found")))
}
