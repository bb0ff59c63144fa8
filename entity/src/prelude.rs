pub use super::user::Entity as User;
pub use super::world_bank_data::Entity as WorldBankData;
