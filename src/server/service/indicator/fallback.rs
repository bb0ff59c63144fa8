//! Canned sample series served when upstream yields no usable data.
//!
//! Only the climate, education and health categories have samples; each indicator
//! type maps to three countries over 2020-2022.

use crate::server::model::indicator::{CountryPoint, IndicatorCategory, IndicatorSeries};

type SampleTable = &'static [(&'static str, [(i32, f64); 3])];

const CO2_EMISSIONS: SampleTable = &[
    ("United States", [(2020, 14.24), (2021, 14.86), (2022, 14.95)]),
    ("China", [(2020, 7.41), (2021, 7.99), (2022, 8.05)]),
    ("Germany", [(2020, 7.69), (2021, 8.09), (2022, 7.90)]),
];

const RENEWABLE_ENERGY: SampleTable = &[
    ("United States", [(2020, 12.02), (2021, 12.16), (2022, 13.1)]),
    ("Germany", [(2020, 19.1), (2021, 19.7), (2022, 20.4)]),
    ("India", [(2020, 38.2), (2021, 38.5), (2022, 38.9)]),
];

const FOREST_AREA: SampleTable = &[
    ("United States", [(2020, 33.9), (2021, 33.9), (2022, 34.0)]),
    ("Germany", [(2020, 32.7), (2021, 32.7), (2022, 32.8)]),
    ("India", [(2020, 24.1), (2021, 24.2), (2022, 24.3)]),
];

const LITERACY_RATE: SampleTable = &[
    ("United States", [(2020, 99.0), (2021, 99.0), (2022, 99.0)]),
    ("India", [(2020, 74.4), (2021, 75.6), (2022, 76.4)]),
    ("China", [(2020, 96.8), (2021, 97.1), (2022, 97.3)]),
];

const SCHOOL_ENROLLMENT: SampleTable = &[
    ("United States", [(2020, 95.2), (2021, 95.8), (2022, 96.1)]),
    ("Germany", [(2020, 98.7), (2021, 98.9), (2022, 99.0)]),
    ("India", [(2020, 89.7), (2021, 91.2), (2022, 92.4)]),
];

const COMPLETION_RATE: SampleTable = &[
    ("United States", [(2020, 97.1), (2021, 97.3), (2022, 97.5)]),
    ("Germany", [(2020, 99.2), (2021, 99.4), (2022, 99.5)]),
    ("Japan", [(2020, 99.8), (2021, 99.8), (2022, 99.9)]),
];

const LIFE_EXPECTANCY: SampleTable = &[
    ("United States", [(2020, 77.28), (2021, 76.44), (2022, 76.33)]),
    ("Japan", [(2020, 84.62), (2021, 84.45), (2022, 84.47)]),
    ("Germany", [(2020, 80.94), (2021, 80.69), (2022, 80.64)]),
];

const INFANT_MORTALITY: SampleTable = &[
    ("United States", [(2020, 5.8), (2021, 6.0), (2022, 6.1)]),
    ("Japan", [(2020, 1.9), (2021, 1.8), (2022, 1.8)]),
    ("India", [(2020, 28.3), (2021, 27.1), (2022, 25.9)]),
];

const MALNUTRITION: SampleTable = &[
    ("India", [(2020, 34.7), (2021, 32.1), (2022, 31.7)]),
    ("China", [(2020, 1.9), (2021, 1.8), (2022, 1.7)]),
    ("United States", [(2020, 0.5), (2021, 0.5), (2022, 0.5)]),
];

const SAMPLES: &[(IndicatorCategory, &str, SampleTable)] = &[
    (IndicatorCategory::Climate, "co2_emissions", CO2_EMISSIONS),
    (IndicatorCategory::Climate, "renewable_energy", RENEWABLE_ENERGY),
    (IndicatorCategory::Climate, "forest_area", FOREST_AREA),
    (IndicatorCategory::Education, "literacy_rate", LITERACY_RATE),
    (IndicatorCategory::Education, "school_enrollment", SCHOOL_ENROLLMENT),
    (IndicatorCategory::Education, "completion_rate", COMPLETION_RATE),
    (IndicatorCategory::Health, "life_expectancy", LIFE_EXPECTANCY),
    (IndicatorCategory::Health, "infant_mortality", INFANT_MORTALITY),
    (IndicatorCategory::Health, "malnutrition", MALNUTRITION),
];

/// Looks up the sample series for an indicator type as it was requested.
///
/// # Arguments
/// - `category` - Category served by the endpoint
/// - `indicator_type` - Symbolic indicator name from the query
///
/// # Returns
/// - `Some(IndicatorSeries)` - Sample table for the pair
/// - `None` - No sample exists, including every GDP and population request
pub fn sample(category: IndicatorCategory, indicator_type: &str) -> Option<IndicatorSeries> {
    SAMPLES
        .iter()
        .find(|(sample_category, name, _)| *sample_category == category && *name == indicator_type)
        .map(|(_, _, table)| series_from_table(table))
}

/// Sample series for the pair, empty when none exists.
///
/// # Arguments
/// - `category` - Category served by the endpoint
/// - `indicator_type` - Symbolic indicator name from the query; ignored for GDP and population
pub fn fallback(category: IndicatorCategory, indicator_type: &str) -> IndicatorSeries {
    sample(category, indicator_type).unwrap_or_default()
}

fn series_from_table(table: SampleTable) -> IndicatorSeries {
    table
        .iter()
        .map(|(country, points)| {
            let points = points
                .iter()
                .map(|(year, value)| CountryPoint::new(*year, *value))
                .collect();
            (country.to_string(), points)
        })
        .collect()
}
