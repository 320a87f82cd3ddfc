//! Settings Management Service
//!
//! Business rules for the admin write paths. Repositories stay dumb; every
//! policy decision (plan limits, ownership, validation) lives here.

use sqlx::SqlitePool;

use shared::models::{
    Contact, ContactCreate, PlanLimits, SettingsWithContacts, WidgetSettings, WidgetSettingsUpdate,
};
use shared::{AppError, AppResult, ErrorCode};

use crate::db::repository::{contact, widget_settings};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_hhmm, validate_optional_text,
    validate_required_text,
};

/// Settings service, shared across handlers via `ServerState`
#[derive(Clone, Debug)]
pub struct SettingsService {
    pool: SqlitePool,
}

impl SettingsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Settings + contacts for a shop, creating the default row on first
    /// access. Admin reads always succeed; there is no "missing settings"
    /// state once a shop has opened the app.
    pub async fn get_or_create(&self, shop: &str) -> AppResult<SettingsWithContacts> {
        let settings = widget_settings::get_or_create(&self.pool, shop).await?;
        let contacts = contact::list_for_settings(&self.pool, settings.id).await?;
        Ok(SettingsWithContacts { settings, contacts })
    }

    /// Settings + contacts without creating anything. Storefront reads go
    /// through here so an uninstalled shop never grows a row.
    pub async fn find_with_contacts(&self, shop: &str) -> AppResult<Option<SettingsWithContacts>> {
        let Some(settings) = widget_settings::find_by_shop(&self.pool, shop).await? else {
            return Ok(None);
        };
        let contacts = contact::list_for_settings(&self.pool, settings.id).await?;
        Ok(Some(SettingsWithContacts { settings, contacts }))
    }

    /// Replace the appearance fields and bump `updated_at`.
    pub async fn update_appearance(
        &self,
        shop: &str,
        data: WidgetSettingsUpdate,
    ) -> AppResult<WidgetSettings> {
        validate_required_text(&data.color, "color", MAX_SHORT_TEXT_LEN)?;

        let settings = widget_settings::update_appearance(&self.pool, shop, data).await?;
        Ok(settings)
    }

    /// Create a contact for the shop, enforcing the plan's contact limit.
    pub async fn add_contact(&self, shop: &str, data: ContactCreate) -> AppResult<Contact> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.subtitle, "subtitle", MAX_NAME_LEN)?;
        validate_required_text(&data.number, "number", MAX_SHORT_TEXT_LEN)?;
        if !data.number.bytes().any(|b| b.is_ascii_digit()) {
            return Err(AppError::validation(
                "number must contain at least one digit",
            ));
        }
        validate_optional_text(&data.display_time, "display_time", MAX_SHORT_TEXT_LEN)?;
        if data.start_time.is_some() != data.end_time.is_some() {
            return Err(AppError::validation(
                "start_time and end_time must be provided together",
            ));
        }
        validate_optional_hhmm(&data.start_time, "start_time")?;
        validate_optional_hhmm(&data.end_time, "end_time")?;

        // Contacts hang off the settings row, so make sure it exists first
        let settings = widget_settings::get_or_create(&self.pool, shop).await?;

        let limits = PlanLimits::for_tier(&settings.plan);
        let count = contact::count_for_settings(&self.pool, settings.id).await?;
        if count >= i64::from(limits.max_contacts) {
            return Err(AppError::plan_limit(format!(
                "Contact limit reached for {} plan.",
                settings.plan.display_name()
            )));
        }

        let created = contact::create(&self.pool, settings.id, data).await?;
        Ok(created)
    }

    /// Delete a contact owned by the shop.
    ///
    /// A missing contact and someone else's contact answer identically, so
    /// the response does not reveal whether a given id exists.
    pub async fn remove_contact(&self, shop: &str, contact_id: i64) -> AppResult<()> {
        let deleted = contact::delete_owned(&self.pool, contact_id, shop).await?;
        if !deleted {
            return Err(AppError::with_message(
                ErrorCode::NotFound,
                "Contact not found or does not belong to this shop.",
            ));
        }
        Ok(())
    }
}
