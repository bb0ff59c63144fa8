//! Stub of the World Bank indicator API.
//!
//! Wraps an `httpmock` server and knows the upstream URL layout, so tests only describe
//! which countries, indicator and payload they expect.
//!
//! ```rust,ignore
//! let stub = WorldBankStub::start().await;
//! let mock = stub
//!     .indicator_records("US;DE", "NY.GDP.MKTP.CD", json!([record("Germany", "2021", json!(4.2))]))
//!     .await;
//! // point the client at stub.base_url() ...
//! mock.assert_async().await;
//! ```

use httpmock::{prelude::*, Mock};
use serde_json::{json, Value};

/// Stubbed World Bank API server.
pub struct WorldBankStub {
    /// Underlying mock server; exposed for ad-hoc expectations.
    pub server: MockServer,
}

impl WorldBankStub {
    /// Starts a new stub server on a random local port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start_async().await,
        }
    }

    /// Base URL to hand to the client in place of `https://api.worldbank.org/v2`.
    pub fn base_url(&self) -> String {
        self.server.base_url()
    }

    /// Answers an indicator request for the exact country list with a raw body.
    ///
    /// # Arguments
    /// - `countries` - Country codes as they appear in the path, e.g. `"US;DE"`
    /// - `indicator_code` - Upstream indicator code
    /// - `status` - HTTP status to answer with
    /// - `body` - JSON body to answer with
    pub async fn indicator(
        &self,
        countries: &str,
        indicator_code: &str,
        status: u16,
        body: Value,
    ) -> Mock<'_> {
        let path = format!("/country/{}/indicator/{}", countries, indicator_code);
        self.server
            .mock_async(|when, then| {
                when.method(GET).path(path).query_param("format", "json");
                then.status(status)
                    .header("Content-Type", "application/json")
                    .json_body(body);
            })
            .await
    }

    /// Answers an indicator request with a well-formed `[metadata, records]` page.
    pub async fn indicator_records(
        &self,
        countries: &str,
        indicator_code: &str,
        records: Value,
    ) -> Mock<'_> {
        self.indicator(countries, indicator_code, 200, paged(records))
            .await
    }

    /// Answers every request for the indicator, whatever the countries, with a 500.
    pub async fn indicator_failure(&self, indicator_code: &str) -> Mock<'_> {
        let fragment = format!("/indicator/{}", indicator_code);
        self.server
            .mock_async(|when, then| {
                when.method(GET).path_contains(fragment);
                then.status(500).body("upstream exploded");
            })
            .await
    }

    /// Answers the country listing with a well-formed page of the given records.
    pub async fn countries(&self, records: Value) -> Mock<'_> {
        self.server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/country")
                    .query_param("format", "json")
                    .query_param("per_page", "300");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(paged(records));
            })
            .await
    }

    /// Answers the country listing with a raw status and body.
    pub async fn countries_raw(&self, status: u16, body: &str) -> Mock<'_> {
        let body = body.to_string();
        self.server
            .mock_async(|when, then| {
                when.method(GET).path("/country");
                then.status(status).body(body);
            })
            .await
    }
}

/// Wraps records in the `[metadata, records]` envelope the upstream API returns.
pub fn paged(records: Value) -> Value {
    let total = records.as_array().map(|r| r.len()).unwrap_or(0);
    json!([
        { "page": 1, "pages": 1, "per_page": 2000, "total": total },
        records
    ])
}

/// Builds one indicator observation in upstream shape.
pub fn record(country: &str, date: &str, value: Value) -> Value {
    json!({
        "indicator": { "id": "TEST", "value": "Test indicator" },
        "country": { "id": "XX", "value": country },
        "date": date,
        "value": value,
    })
}

/// Builds one country listing entry in upstream shape.
pub fn country(id: &str, name: &str, capital_city: &str) -> Value {
    json!({
        "id": id,
        "iso2Code": "XX",
        "name": name,
        "capitalCity": capital_city,
    })
}
