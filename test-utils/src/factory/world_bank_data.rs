//! Factory for cached indicator observations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating `world_bank_data` rows with customizable fields.
///
/// Defaults to a United States GDP observation for 2020.
pub struct WorldBankDataFactory<'a> {
    db: &'a DatabaseConnection,
    country_code: String,
    country_name: String,
    indicator_code: String,
    indicator_name: String,
    year: i32,
    value: Option<f64>,
}

impl<'a> WorldBankDataFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `WorldBankDataFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            country_code: "USA".to_string(),
            country_name: "United States".to_string(),
            indicator_code: "NY.GDP.MKTP.CD".to_string(),
            indicator_name: "GDP (current US$)".to_string(),
            year: 2020,
            value: Some(21_000_000_000_000.0),
        }
    }

    /// Sets the country code and display name.
    pub fn country(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.country_code = code.into();
        self.country_name = name.into();
        self
    }

    /// Sets the indicator code and display name.
    pub fn indicator(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.indicator_code = code.into();
        self.indicator_name = name.into();
        self
    }

    /// Sets the observation year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the observed value; `None` stores a missing observation.
    pub fn value(mut self, value: Option<f64>) -> Self {
        self.value = value;
        self
    }

    /// Builds and inserts the row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::world_bank_data::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::world_bank_data::Model, DbErr> {
        entity::world_bank_data::ActiveModel {
            country_code: ActiveValue::Set(self.country_code),
            country_name: ActiveValue::Set(self.country_name),
            indicator_code: ActiveValue::Set(self.indicator_code),
            indicator_name: ActiveValue::Set(self.indicator_name),
            year: ActiveValue::Set(self.year),
            value: ActiveValue::Set(self.value),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an observation with default values.
pub async fn create_observation(
    db: &DatabaseConnection,
) -> Result<entity::world_bank_data::Model, DbErr> {
    WorldBankDataFactory::new(db).build().await
}
