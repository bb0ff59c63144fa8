//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! users, countries and indicator series. Domain models are converted from entity models
//! or upstream JSON at the repository/client boundary and transformed to DTOs at the
//! controller boundary.

pub mod country;
pub mod indicator;
pub mod probe;
pub mod user;
