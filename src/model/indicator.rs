use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Query string accepted by every indicator endpoint.
///
/// Values are kept as raw strings so that malformed years surface as handler
/// failures with a message instead of an extractor rejection.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct IndicatorQuery {
    pub countries: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    pub indicator: Option<String>,
}

impl IndicatorQuery {
    /// Builds the query from raw key/value pairs.
    ///
    /// A repeated parameter keeps its last value; unknown parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "countries" => query.countries = Some(value),
                "start_year" => query.start_year = Some(value),
                "end_year" => query.end_year = Some(value),
                "indicator" => query.indicator = Some(value),
                _ => {}
            }
        }

        query
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CountryPointDto {
    pub year: i32,
    pub value: f64,
}

/// Country name -> observations ordered by year.
///
/// Serialized as a JSON object whose keys keep the order of the entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSeriesDto(pub Vec<(String, Vec<CountryPointDto>)>);

impl Serialize for IndicatorSeriesDto {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (country, points) in &self.0 {
            map.serialize_entry(country, points)?;
        }
        map.end()
    }
}
