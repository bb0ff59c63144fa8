//! Wire DTOs shared by every HTTP endpoint.

pub mod api;
pub mod country;
pub mod indicator;
pub mod probe;
pub mod user;
