//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. The `world_bank_data` table has no
//! repository: nothing in the read path stores or queries it.

pub mod user;

#[cfg(test)]
mod test;
