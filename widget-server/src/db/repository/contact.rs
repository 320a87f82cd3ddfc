//! Contact Repository

use super::{RepoError, RepoResult};
use shared::models::{Contact, ContactCreate};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Contact>> {
    let contact = sqlx::query_as::<_, Contact>(
        "SELECT id, settings_id, name, subtitle, number, display_time, start_time, end_time, created_at FROM contact WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(contact)
}

/// List a shop's contacts oldest-first, so the popup order is stable.
pub async fn list_for_settings(pool: &SqlitePool, settings_id: i64) -> RepoResult<Vec<Contact>> {
    let contacts = sqlx::query_as::<_, Contact>(
        "SELECT id, settings_id, name, subtitle, number, display_time, start_time, end_time, created_at FROM contact WHERE settings_id = ? ORDER BY created_at ASC, id ASC",
    )
    .bind(settings_id)
    .fetch_all(pool)
    .await?;
    Ok(contacts)
}

pub async fn count_for_settings(pool: &SqlitePool, settings_id: i64) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact WHERE settings_id = ?")
        .bind(settings_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(
    pool: &SqlitePool,
    settings_id: i64,
    data: ContactCreate,
) -> RepoResult<Contact> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO contact (id, settings_id, name, subtitle, number, display_time, start_time, end_time, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )
    .bind(id)
    .bind(settings_id)
    .bind(&data.name)
    .bind(&data.subtitle)
    .bind(&data.number)
    .bind(&data.display_time)
    .bind(&data.start_time)
    .bind(&data.end_time)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create contact".into()))
}

/// Delete a contact only if it belongs to the given shop.
///
/// Ownership check lives in the WHERE clause so a contact id from another
/// shop deletes nothing instead of leaking across tenants.
pub async fn delete_owned(pool: &SqlitePool, contact_id: i64, shop: &str) -> RepoResult<bool> {
    let rows = sqlx::query(
        "DELETE FROM contact WHERE id = ?1 AND settings_id = (SELECT id FROM widget_settings WHERE shop = ?2)",
    )
    .bind(contact_id)
    .bind(shop)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
