//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let row = factory::world_bank_data::WorldBankDataFactory::new(&db)
//!         .country("DE", "Germany")
//!         .year(2021)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `world_bank_data` - Create cached indicator observations
//! - `helpers` - Unique id generation and multi-row helpers

pub mod helpers;
pub mod user;
pub mod world_bank_data;

pub use user::create_user;
pub use world_bank_data::create_observation;
