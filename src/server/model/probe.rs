use serde_json::Value;

use crate::model::probe::ProbeDto;

/// Outcome of the diagnostic request against the upstream API.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamProbe {
    /// Upstream answered. `data` holds the decoded JSON on 200, the raw text otherwise.
    Response { status: u16, data: Value, url: String },
    /// The request could not be sent or the body could not be read.
    Failed(String),
}

impl UpstreamProbe {
    pub fn into_dto(self) -> ProbeDto {
        match self {
            Self::Response { status, data, url } => ProbeDto::Response { status, data, url },
            Self::Failed(error) => ProbeDto::Error { error },
        }
    }
}
