//! Conversion of raw upstream records into per-country time series.
//!
//! Upstream records are untrusted: every record is validated on its own and dropped
//! with a log line when it cannot be used, so one bad record never poisons a batch.

use serde_json::Value;
use thiserror::Error;

use crate::server::model::indicator::{CountryPoint, IndicatorSeries};

/// Reason a raw record was left out of the series.
#[derive(Error, Debug, PartialEq)]
pub enum RecordRejection {
    #[error("record is not an object")]
    NotAnObject,

    #[error("record has no value")]
    MissingValue,

    #[error("record has no country")]
    MissingCountry,

    #[error("record has no date")]
    MissingDate,

    #[error("country name is not a string")]
    CountryName,

    #[error("value {0} is not a finite number")]
    Value(String),

    #[error("date {0} is not a year")]
    Date(String),
}

impl RecordRejection {
    /// Whether the record carried data that could not be interpreted, as opposed to
    /// simply lacking an observation.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::CountryName | Self::Value(_) | Self::Date(_))
    }
}

/// Groups raw records into a series keyed by country name.
///
/// Records are visited in upstream order; each country's points are then stable-sorted
/// by year, so duplicate years keep their upstream order. Unusable records are logged
/// and skipped.
///
/// # Arguments
/// - `records` - Raw records as returned by the World Bank client
///
/// # Returns
/// - `IndicatorSeries` - Possibly empty series; never contains fabricated points
pub fn normalize(records: &[Value]) -> IndicatorSeries {
    let mut series = IndicatorSeries::new();
    let mut data_points = 0;

    for record in records {
        match point_from_record(record) {
            Ok((country, point)) => {
                series.push(country, point);
                data_points += 1;
            }
            Err(rejection) if rejection.is_malformed() => {
                tracing::warn!("Error processing item: {}, error: {}", record, rejection);
            }
            Err(rejection) => {
                tracing::debug!("Skipping item: {}", rejection);
            }
        }
    }

    series.sort_by_year();

    tracing::info!(
        "Processed {} data points for {} countries",
        data_points,
        series.len()
    );

    series
}

/// Validates one record and extracts its country name and observation.
pub fn point_from_record(record: &Value) -> Result<(&str, CountryPoint), RecordRejection> {
    let Value::Object(fields) = record else {
        return Err(RecordRejection::NotAnObject);
    };

    let value = match fields.get("value") {
        None | Some(Value::Null) => return Err(RecordRejection::MissingValue),
        Some(value) => value,
    };

    let country = fields
        .get("country")
        .filter(|country| is_present(country))
        .ok_or(RecordRejection::MissingCountry)?;

    let date = fields
        .get("date")
        .filter(|date| is_present(date))
        .ok_or(RecordRejection::MissingDate)?;

    let name = country
        .get("value")
        .and_then(Value::as_str)
        .ok_or(RecordRejection::CountryName)?;

    let point = CountryPoint::new(parse_year(date)?, parse_value(value)?);

    Ok((name, point))
}

/// Empty strings, empty containers, zero and `false` count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn parse_value(value: &Value) -> Result<f64, RecordRejection> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecordRejection::Value(value.to_string()))
}

fn parse_year(date: &Value) -> Result<i32, RecordRejection> {
    let parsed = match date {
        Value::String(s) => s.trim().parse::<i32>().ok(),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|year| i32::try_from(year).ok()),
        _ => None,
    };

    parsed.ok_or_else(|| RecordRejection::Date(date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(country: &str, date: Value, value: Value) -> Value {
        json!({ "country": { "id": "XX", "value": country }, "date": date, "value": value })
    }

    #[test]
    fn groups_by_country_and_sorts_by_year() {
        let records = vec![
            record("United States", json!("2021"), json!("23000000000000")),
            record("Germany", json!("2021"), json!(4.2)),
            record("United States", json!("2020"), json!("21000000000000")),
            record("Germany", json!("2019"), json!(3.9)),
        ];

        let series = normalize(&records);

        assert_eq!(series.len(), 2);
        assert_eq!(
            series.get("United States").unwrap(),
            &[
                CountryPoint::new(2020, 21_000_000_000_000.0),
                CountryPoint::new(2021, 23_000_000_000_000.0),
            ]
        );
        assert_eq!(
            series.get("Germany").unwrap(),
            &[CountryPoint::new(2019, 3.9), CountryPoint::new(2021, 4.2)]
        );
    }

    #[test]
    fn years_are_non_decreasing_for_every_country() {
        let records: Vec<Value> = [2015, 2011, 2022, 2011, 2018, 2010]
            .iter()
            .enumerate()
            .map(|(i, year)| {
                let country = if i % 2 == 0 { "Chile" } else { "Peru" };
                record(country, json!(year.to_string()), json!(i as f64))
            })
            .collect();

        let series = normalize(&records);

        for country in series.countries() {
            let points = series.get(country).unwrap();
            assert!(points.windows(2).all(|pair| pair[0].year <= pair[1].year));
        }
    }

    #[test]
    fn skips_records_without_value_country_or_date() {
        let records = vec![
            record("India", json!("2020"), Value::Null),
            json!({ "date": "2020", "value": 1.0 }),
            json!({ "country": {}, "date": "2020", "value": 1.0 }),
            json!({ "country": { "value": "India" }, "value": 1.0 }),
            json!({ "country": { "value": "India" }, "date": "", "value": 1.0 }),
            json!({}),
            json!(null),
            json!("not a record"),
            record("India", json!("2021"), json!(3.5)),
        ];

        let series = normalize(&records);

        assert_eq!(series.len(), 1);
        assert_eq!(series.get("India").unwrap(), &[CountryPoint::new(2021, 3.5)]);
    }

    #[test]
    fn skips_malformed_values_and_dates() {
        let records = vec![
            record("Japan", json!("2020"), json!("n/a")),
            record("Japan", json!("2020"), json!("NaN")),
            record("Japan", json!("2020"), json!(true)),
            record("Japan", json!("20x0"), json!(1.0)),
            record("Japan", json!(2020.5), json!(1.0)),
            json!({ "country": { "value": 392 }, "date": "2020", "value": 1.0 }),
            json!({ "country": "Japan", "date": "2020", "value": 1.0 }),
        ];

        assert!(normalize(&records).is_empty());
    }

    #[test]
    fn accepts_numeric_dates_and_padded_strings() {
        let records = vec![
            record("Kenya", json!(2019), json!(" 12.5 ")),
            record("Kenya", json!(2018.0), json!(11)),
        ];

        let series = normalize(&records);

        assert_eq!(
            series.get("Kenya").unwrap(),
            &[CountryPoint::new(2018, 11.0), CountryPoint::new(2019, 12.5)]
        );
    }

    #[test]
    fn keeps_zero_values() {
        let records = vec![record("Nauru", json!("2020"), json!(0))];

        let series = normalize(&records);

        assert_eq!(series.get("Nauru").unwrap(), &[CountryPoint::new(2020, 0.0)]);
    }

    #[test]
    fn preserves_duplicate_years_in_upstream_order() {
        let records = vec![
            record("Chad", json!("2021"), json!(1.0)),
            record("Chad", json!("2020"), json!(2.0)),
            record("Chad", json!("2021"), json!(3.0)),
        ];

        let series = normalize(&records);

        assert_eq!(
            series.get("Chad").unwrap(),
            &[
                CountryPoint::new(2020, 2.0),
                CountryPoint::new(2021, 1.0),
                CountryPoint::new(2021, 3.0),
            ]
        );
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn classifies_rejections() {
        assert_eq!(
            point_from_record(&json!({ "country": { "value": "Fiji" }, "date": "2020" })),
            Err(RecordRejection::MissingValue)
        );
        assert!(!RecordRejection::MissingDate.is_malformed());
        assert!(RecordRejection::Date("\"x\"".to_string()).is_malformed());
    }
}
