use thiserror::Error;

/// Failure talking to the World Bank API.
///
/// Never reaches a client: the World Bank client logs it and answers with an empty
/// result instead.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport failure, timeout, or a body that is not valid JSON.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Upstream answered with something other than 200 OK.
    #[error("Upstream responded with status {0}")]
    Status(u16),

    /// The configured base URL does not form a valid request URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
