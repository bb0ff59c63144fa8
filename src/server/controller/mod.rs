//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into parameters, call the service
//! layer and convert domain models back into DTOs. Access control happens in the
//! `require_login` middleware before any `/api` handler runs.

pub mod auth;
pub mod country;
pub mod indicator;
pub mod probe;

#[cfg(test)]
mod test;
