use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use entity::setting::{ActiveModel as SettingActive, Column, Entity as Setting};
use sea_orm::sea_query::OnConflict;
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};

pub const KEY_REGISTRATIONS_OPEN: &str = "registrations_open";
pub const KEY_REGISTRATION_LIMIT: &str = "registration_limit";

/// Decoded view over the settings rows. A limit of 0 means unlimited.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EventSettings {
    pub registrations_open: bool,
    pub registration_limit: u64,
}

impl Default for EventSettings {
    fn default() -> Self {
        EventSettings {
            registrations_open: true,
            registration_limit: 0,
        }
    }
}

impl PostgresService {
    /// Read on every registration attempt; missing or unparsable rows fall
    /// back to open/unlimited, matching the seeded defaults.
    pub async fn get_settings(&self) -> Result<EventSettings, AppError> {
        let rows = Setting::find().all(&self.db).await?;
        let mut settings = EventSettings::default();
        for row in rows {
            match row.key.as_str() {
                KEY_REGISTRATIONS_OPEN => settings.registrations_open = row.value == "true",
                KEY_REGISTRATION_LIMIT => {
                    settings.registration_limit = row.value.parse().unwrap_or(0)
                }
                _ => {}
            }
        }
        Ok(settings)
    }

    pub async fn set_registrations_open(&self, open: bool) -> Result<(), AppError> {
        self.upsert_setting(KEY_REGISTRATIONS_OPEN, open.to_string())
            .await
    }

    pub async fn set_registration_limit(&self, limit: u64) -> Result<(), AppError> {
        self.upsert_setting(KEY_REGISTRATION_LIMIT, limit.to_string())
            .await
    }

    async fn upsert_setting(&self, key: &str, value: String) -> Result<(), AppError> {
        Setting::insert(SettingActive {
            key: Set(key.to_string()),
            value: Set(value),
        })
        .on_conflict(
            OnConflict::column(Column::Key)
                .update_column(Column::Value)
                .to_owned(),
        )
        .exec(&self.db)
        .await?;
        Ok(())
    }
}
