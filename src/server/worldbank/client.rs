use reqwest::{header::USER_AGENT, StatusCode};
use serde_json::Value;
use url::Url;

use crate::server::{
    error::upstream::UpstreamError,
    model::{country::CountryRef, probe::UpstreamProbe},
    service::indicator::catalog::is_aggregate_region,
    worldbank::{BROWSER_USER_AGENT, COUNTRY_PAGE_SIZE, INDICATOR_PAGE_SIZE, MAX_COUNTRIES},
};

/// HTTP client for the World Bank indicator API.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct WorldBankClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl WorldBankClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http_client` - Pooled HTTP client, configured with the request timeout
    /// - `base_url` - API root such as `https://api.worldbank.org/v2`
    ///
    /// # Returns
    /// - `WorldBankClient` - New client instance
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http_client,
            base_url,
        }
    }

    /// Fetches the countries offered to the dashboard.
    ///
    /// Keeps entries that have a capital city and are not aggregate regions, in upstream
    /// order, capped at [`MAX_COUNTRIES`].
    ///
    /// # Returns
    /// - `Vec<CountryRef>` - Filtered countries; empty when upstream fails for any reason
    pub async fn fetch_countries(&self) -> Vec<CountryRef> {
        match self.try_fetch_countries().await {
            Ok(countries) => countries,
            Err(e) => {
                tracing::error!("Error fetching countries: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetches raw observations of an indicator for a set of countries.
    ///
    /// Country codes are trimmed and blank codes dropped. Records are returned untouched;
    /// validating them is the normalizer's job.
    ///
    /// # Arguments
    /// - `country_codes` - Upstream country codes
    /// - `indicator_code` - Upstream indicator code, e.g. `NY.GDP.MKTP.CD`
    /// - `start_year` - First year of the date range
    /// - `end_year` - Last year of the date range
    ///
    /// # Returns
    /// - `Vec<Value>` - Raw records; empty when no codes remain or upstream fails
    pub async fn fetch_indicator(
        &self,
        country_codes: &[String],
        indicator_code: &str,
        start_year: i32,
        end_year: i32,
    ) -> Vec<Value> {
        let codes: Vec<&str> = country_codes
            .iter()
            .map(|code| code.trim())
            .filter(|code| !code.is_empty())
            .collect();

        if codes.is_empty() {
            tracing::debug!("No country codes requested for {}", indicator_code);
            return Vec::new();
        }

        match self
            .try_fetch_indicator(&codes.join(";"), indicator_code, start_year, end_year)
            .await
        {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Error fetching indicator {}: {}", indicator_code, e);
                Vec::new()
            }
        }
    }

    /// Sends the fixed diagnostic request and echoes what came back.
    ///
    /// Sent without the browser `User-Agent` so that it shows how upstream treats a
    /// plain client.
    ///
    /// # Returns
    /// - `UpstreamProbe::Response` - Upstream answered, with JSON data on 200 or raw text otherwise
    /// - `UpstreamProbe::Failed` - Transport failure or undecodable JSON
    pub async fn probe(&self) -> UpstreamProbe {
        let url = format!(
            "{}/country/US/indicator/NY.GDP.MKTP.CD?format=json&date=2020:2022",
            self.base_url
        );

        match self.try_probe(&url).await {
            Ok(probe) => probe,
            Err(e) => {
                tracing::warn!("Upstream probe failed: {}", e);
                UpstreamProbe::Failed(e.to_string())
            }
        }
    }

    async fn try_fetch_countries(&self) -> Result<Vec<CountryRef>, UpstreamError> {
        let mut url = Url::parse(&format!("{}/country", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("per_page", &COUNTRY_PAGE_SIZE.to_string());

        let body = self.get_json(url).await?;
        tracing::info!("Countries API response received");

        let countries: Vec<CountryRef> = page_records(body)
            .iter()
            .filter_map(country_from_entry)
            .take(MAX_COUNTRIES)
            .collect();

        tracing::info!("Found {} valid countries", countries.len());

        Ok(countries)
    }

    async fn try_fetch_indicator(
        &self,
        countries: &str,
        indicator_code: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<Value>, UpstreamError> {
        let mut url = Url::parse(&format!(
            "{}/country/{}/indicator/{}",
            self.base_url, countries, indicator_code
        ))?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("date", &format!("{}:{}", start_year, end_year))
            .append_pair("per_page", &INDICATOR_PAGE_SIZE.to_string());

        tracing::info!("Fetching indicator data from {}", url);

        let body = self.get_json(url).await?;

        if let Some(message) = body.get("message") {
            tracing::warn!("API returned message: {}", message);
            return Ok(Vec::new());
        }

        let records = page_records(body);
        tracing::info!("Found {} data points for {}", records.len(), indicator_code);

        Ok(records)
    }

    /// GETs a data URL with the browser `User-Agent` and decodes the JSON body.
    async fn get_json(&self, url: Url) -> Result<Value, UpstreamError> {
        let response = self
            .http_client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("World Bank API response status: {}", status);

        if status != StatusCode::OK {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }

    async fn try_probe(&self, url: &str) -> Result<UpstreamProbe, UpstreamError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        let data = if status == StatusCode::OK {
            response.json::<Value>().await?
        } else {
            Value::String(response.text().await?)
        };

        Ok(UpstreamProbe::Response {
            status: status.as_u16(),
            data,
            url: url.to_string(),
        })
    }
}

/// Extracts the record list from a `[metadata, records]` page.
///
/// Anything else, including a `null` record list, yields no records.
fn page_records(body: Value) -> Vec<Value> {
    let Value::Array(items) = body else {
        return Vec::new();
    };

    match items.into_iter().nth(1) {
        Some(Value::Array(records)) => records,
        _ => Vec::new(),
    }
}

/// Converts one country listing entry, skipping aggregates and entries without a capital.
fn country_from_entry(entry: &Value) -> Option<CountryRef> {
    let capital_city = entry.get("capitalCity").and_then(Value::as_str)?;
    if capital_city.is_empty() {
        return None;
    }

    let code = entry.get("id").and_then(Value::as_str)?;
    if is_aggregate_region(code) {
        return None;
    }

    let name = entry.get("name").and_then(Value::as_str)?;

    Some(CountryRef::new(code, name))
}
