//! Symbolic indicator names and the upstream codes they map to.

use crate::server::model::indicator::IndicatorCategory;

pub const GDP_CODE: &str = "NY.GDP.MKTP.CD";
pub const POPULATION_CODE: &str = "SP.POP.TOTL";

const CLIMATE_INDICATORS: &[(&str, &str)] = &[
    ("co2_emissions", "EN.ATM.CO2E.PC"),
    ("renewable_energy", "EG.FEC.RNEW.ZS"),
    ("forest_area", "AG.LND.FRST.ZS"),
];

const EDUCATION_INDICATORS: &[(&str, &str)] = &[
    ("literacy_rate", "SE.ADT.LITR.ZS"),
    ("school_enrollment", "SE.PRM.NENR"),
    ("completion_rate", "SE.PRM.CMPT.ZS"),
];

const HEALTH_INDICATORS: &[(&str, &str)] = &[
    ("life_expectancy", "SP.DYN.LE00.IN"),
    ("infant_mortality", "SP.DYN.IMRT.IN"),
    ("malnutrition", "SH.STA.MALN.ZS"),
];

/// Upstream ids of regional and income-group aggregates, which are not countries.
pub const AGGREGATE_REGION_CODES: [&str; 29] = [
    "WLD", "EUU", "HPC", "IBD", "IBT", "IDB", "IDX", "IDA", "LIC", "LMC", "LMY", "LTE", "MIC",
    "MNA", "NAC", "OED", "PSS", "PST", "SAS", "SSA", "SSF", "SST", "TEA", "TEC", "TLA", "TMN",
    "TSA", "TSS", "UMC",
];

/// Whether an upstream country id denotes an aggregate rather than a country.
pub fn is_aggregate_region(code: &str) -> bool {
    AGGREGATE_REGION_CODES.contains(&code)
}

/// Symbolic indicator types offered by a category, with their upstream codes.
///
/// Empty for categories backed by a single indicator.
pub fn indicators(category: IndicatorCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        IndicatorCategory::Gdp | IndicatorCategory::Population => &[],
        IndicatorCategory::Climate => CLIMATE_INDICATORS,
        IndicatorCategory::Education => EDUCATION_INDICATORS,
        IndicatorCategory::Health => HEALTH_INDICATORS,
    }
}

/// Upstream code queried for a category when no (or an unknown) indicator type is named.
pub fn default_code(category: IndicatorCategory) -> &'static str {
    match category {
        IndicatorCategory::Gdp => GDP_CODE,
        IndicatorCategory::Population => POPULATION_CODE,
        IndicatorCategory::Climate => CLIMATE_INDICATORS[0].1,
        IndicatorCategory::Education => EDUCATION_INDICATORS[0].1,
        IndicatorCategory::Health => HEALTH_INDICATORS[0].1,
    }
}

/// Resolves the upstream code for a requested indicator type.
///
/// # Arguments
/// - `category` - Category served by the endpoint
/// - `indicator_type` - Symbolic name from the query, if any
///
/// # Returns
/// - `&str` - Matching upstream code, or the category default for unknown names
pub fn indicator_code(category: IndicatorCategory, indicator_type: Option<&str>) -> &'static str {
    indicator_type
        .and_then(|name| {
            indicators(category)
                .iter()
                .find(|(symbol, _)| *symbol == name)
                .map(|(_, code)| *code)
        })
        .unwrap_or_else(|| default_code(category))
}
