//! Indicator lookups: fetch from upstream, normalize, fall back to samples.

pub mod catalog;
pub mod fallback;
pub mod normalize;

#[cfg(test)]
mod test;

use crate::server::{
    model::indicator::{IndicatorData, IndicatorRequest},
    worldbank::WorldBankClient,
};

/// Service producing the series behind every indicator endpoint.
pub struct IndicatorService<'a> {
    worldbank: &'a WorldBankClient,
}

impl<'a> IndicatorService<'a> {
    /// Creates a new IndicatorService instance.
    ///
    /// # Arguments
    /// - `worldbank` - Client used to reach the World Bank API
    ///
    /// # Returns
    /// - `IndicatorService` - New service instance
    pub fn new(worldbank: &'a WorldBankClient) -> Self {
        Self { worldbank }
    }

    /// Loads the series for a parsed indicator request.
    ///
    /// Resolves the upstream code for the requested indicator type, fetches and
    /// normalizes the records, and substitutes the sample table for the requested
    /// indicator type when nothing usable came back.
    ///
    /// # Arguments
    /// - `request` - Parsed query for one category
    ///
    /// # Returns
    /// - `IndicatorData::Live` - Series built from upstream records
    /// - `IndicatorData::Sample` - Upstream yielded nothing; sample table for the indicator type
    /// - `IndicatorData::Empty` - Upstream yielded nothing and no sample exists
    pub async fn load(&self, request: &IndicatorRequest) -> IndicatorData {
        let code = catalog::indicator_code(request.category, request.indicator_type.as_deref());

        tracing::info!(
            "Fetching {} data ({}) for countries: {:?}, years: {}-{}",
            request.category.name(),
            code,
            request.countries,
            request.start_year,
            request.end_year
        );

        let records = self
            .worldbank
            .fetch_indicator(&request.countries, code, request.start_year, request.end_year)
            .await;

        tracing::info!("Raw {} data length: {}", request.category.name(), records.len());

        let series = normalize::normalize(&records);
        if !series.is_empty() {
            tracing::debug!(
                "Countries in {} data: {:?}",
                request.category.name(),
                series.countries().collect::<Vec<_>>()
            );
            return IndicatorData::Live(series);
        }

        let indicator_type = request.indicator_type.as_deref().unwrap_or_default();
        let sample = fallback::fallback(request.category, indicator_type);
        if sample.is_empty() {
            return IndicatorData::Empty;
        }

        tracing::info!("No {} data from API, serving sample data", request.category.name());
        IndicatorData::Sample(sample)
    }
}
