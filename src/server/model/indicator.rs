//! Indicator domain models.
//!
//! Provides the per-country time series produced from upstream records, the outcome of
//! a single indicator lookup, and the parsed form of an indicator query string.

use crate::{
    model::indicator::{CountryPointDto, IndicatorQuery, IndicatorSeriesDto},
    server::{
        error::AppError,
        util::parse::{parse_year, split_country_codes},
    },
};

/// Countries requested when the query string names none.
pub const DEFAULT_COUNTRIES: &str = "US;CN;IN;DE;JP";
pub const DEFAULT_START_YEAR: i32 = 2010;
pub const DEFAULT_END_YEAR: i32 = 2022;

/// Data category served by one dashboard endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Gdp,
    Population,
    Climate,
    Education,
    Health,
}

impl IndicatorCategory {
    /// Lowercase name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gdp => "gdp",
            Self::Population => "population",
            Self::Climate => "climate",
            Self::Education => "education",
            Self::Health => "health",
        }
    }

    /// Symbolic indicator used when the query names none.
    ///
    /// # Returns
    /// - `Some(&str)` - Default indicator type for categories offering a choice
    /// - `None` - Category is backed by a single fixed indicator
    pub fn default_indicator(&self) -> Option<&'static str> {
        match self {
            Self::Gdp | Self::Population => None,
            Self::Climate => Some("co2_emissions"),
            Self::Education => Some("literacy_rate"),
            Self::Health => Some("life_expectancy"),
        }
    }
}

/// One observation of an indicator for a country.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryPoint {
    pub year: i32,
    pub value: f64,
}

impl CountryPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Observations grouped by country display name.
///
/// Countries iterate in the order they were first pushed. Each country's points keep
/// the order they were pushed in until [`IndicatorSeries::sort_by_year`] is called.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSeries(Vec<(String, Vec<CountryPoint>)>);

impl IndicatorSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observation to the country's sequence.
    pub fn push(&mut self, country: &str, point: CountryPoint) {
        match self.0.iter_mut().find(|(name, _)| name == country) {
            Some((_, points)) => points.push(point),
            None => self.0.push((country.to_string(), vec![point])),
        }
    }

    /// Stable-sorts every country's points by ascending year.
    ///
    /// Points sharing a year keep their relative order.
    pub fn sort_by_year(&mut self) {
        for (_, points) in self.0.iter_mut() {
            points.sort_by_key(|point| point.year);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of countries in the series.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Points recorded for a country, if any.
    pub fn get(&self, country: &str) -> Option<&[CountryPoint]> {
        self.0
            .iter()
            .find(|(name, _)| name == country)
            .map(|(_, points)| points.as_slice())
    }

    /// Country names in first-encounter order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn into_dto(self) -> IndicatorSeriesDto {
        let entries = self
            .0
            .into_iter()
            .map(|(country, points)| {
                let points = points
                    .into_iter()
                    .map(|point| CountryPointDto {
                        year: point.year,
                        value: point.value,
                    })
                    .collect();
                (country, points)
            })
            .collect();

        IndicatorSeriesDto(entries)
    }
}

/// Collects `(country, points)` entries; points for a repeated country are appended.
impl FromIterator<(String, Vec<CountryPoint>)> for IndicatorSeries {
    fn from_iter<T: IntoIterator<Item = (String, Vec<CountryPoint>)>>(iter: T) -> Self {
        let mut series = Self::new();
        for (country, points) in iter {
            for point in points {
                series.push(&country, point);
            }
        }
        series
    }
}

/// Outcome of one indicator lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorData {
    /// Observations normalized from the upstream response.
    Live(IndicatorSeries),
    /// Canned sample table served because upstream yielded nothing.
    Sample(IndicatorSeries),
    /// Upstream yielded nothing and the category has no sample table.
    Empty,
}

impl IndicatorData {
    /// Series to respond with; `Empty` becomes an empty series.
    pub fn into_series(self) -> IndicatorSeries {
        match self {
            Self::Live(series) | Self::Sample(series) => series,
            Self::Empty => IndicatorSeries::new(),
        }
    }
}

/// Parsed indicator query for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRequest {
    pub category: IndicatorCategory,
    /// Trimmed, non-blank upstream country codes.
    pub countries: Vec<String>,
    pub start_year: i32,
    pub end_year: i32,
    /// Symbolic indicator type as requested, or the category default.
    ///
    /// `None` for categories backed by a single indicator.
    pub indicator_type: Option<String>,
}

impl IndicatorRequest {
    /// Builds a request from the raw query string, applying defaults.
    ///
    /// # Arguments
    /// - `category` - Category served by the endpoint
    /// - `query` - Raw query parameters
    ///
    /// # Returns
    /// - `Ok(IndicatorRequest)` - Parsed request
    /// - `Err(AppError::HandlerFailure)` - A year parameter is not an integer
    pub fn from_query(category: IndicatorCategory, query: IndicatorQuery) -> Result<Self, AppError> {
        let countries = split_country_codes(query.countries.as_deref().unwrap_or(DEFAULT_COUNTRIES));
        let start_year = parse_year("start_year", query.start_year.as_deref(), DEFAULT_START_YEAR)?;
        let end_year = parse_year("end_year", query.end_year.as_deref(), DEFAULT_END_YEAR)?;

        let indicator_type = category
            .default_indicator()
            .map(|default| query.indicator.unwrap_or_else(|| default.to_string()));

        Ok(Self {
            category,
            countries,
            start_year,
            end_year,
            indicator_type,
        })
    }
}
