//! Business logic between controllers and the data layer or upstream API.
//!
//! Services take references to the resources they need (database connection, World
//! Bank client) and work with domain models rather than DTOs.

pub mod auth;
pub mod country;
pub mod indicator;

#[cfg(test)]
mod test;
