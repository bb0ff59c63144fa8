//! SeaORM entities for the dashboard database.

pub mod prelude;
pub mod user;
pub mod world_bank_data;
