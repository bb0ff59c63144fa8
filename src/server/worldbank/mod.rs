//! Client for the World Bank indicator API.
//!
//! Every call is a single timeout-bounded GET without retries. Failures never propagate:
//! they are logged and reported as an empty result so that callers can fall back to
//! sample data.

pub mod client;

#[cfg(test)]
mod test;

pub use client::WorldBankClient;

/// Public World Bank API root.
pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";

/// Sent on data requests; upstream rejects some non-browser agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const INDICATOR_PAGE_SIZE: u32 = 2000;
pub const COUNTRY_PAGE_SIZE: u32 = 300;

/// Upper bound on countries offered to the dashboard.
pub const MAX_COUNTRIES: usize = 30;
