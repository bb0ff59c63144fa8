//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::world_bank_data::WorldBankDataFactory;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts one observation per `(year, value)` pair for a single country and indicator.
///
/// # Arguments
/// - `db` - Database connection
/// - `country_code` - Upstream country id, e.g. `"DEU"`
/// - `indicator_code` - Upstream indicator code, e.g. `"SP.POP.TOTL"`
/// - `points` - Observations to insert, in insertion order
///
/// # Returns
/// - `Ok(Vec<entity::world_bank_data::Model>)` - Inserted rows in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_series(
    db: &DatabaseConnection,
    country_code: &str,
    indicator_code: &str,
    points: &[(i32, f64)],
) -> Result<Vec<entity::world_bank_data::Model>, DbErr> {
    let mut rows = Vec::with_capacity(points.len());

    for (year, value) in points {
        let row = WorldBankDataFactory::new(db)
            .country(country_code, country_code)
            .indicator(indicator_code, indicator_code)
            .year(*year)
            .value(Some(*value))
            .build()
            .await?;
        rows.push(row);
    }

    Ok(rows)
}
