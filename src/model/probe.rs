use serde::Serialize;
use serde_json::Value;

/// Raw echo of the diagnostic upstream request.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ProbeDto {
    Response {
        status: u16,
        data: Value,
        url: String,
    },
    Error {
        error: String,
    },
}
