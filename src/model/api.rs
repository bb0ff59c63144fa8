use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Rejected form submission, keyed by field name.
///
/// Errors that do not belong to a single field are listed under `__all__`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormErrorDto {
    pub error: String,
    pub fields: BTreeMap<String, Vec<String>>,
}
