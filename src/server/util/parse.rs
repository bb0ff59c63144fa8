use crate::server::error::AppError;

/// Parses a year query parameter.
///
/// Surrounding whitespace is ignored. A missing parameter yields the default, while a
/// parameter that is present but empty or non-numeric is a handler failure.
///
/// # Arguments
/// - `name` - Query parameter name, used in the error message
/// - `value` - Raw parameter value, if present
/// - `default` - Year used when the parameter is absent
///
/// # Returns
/// - `Ok(i32)` - Parsed or default year
/// - `Err(AppError::HandlerFailure)` - The value is not an integer
pub fn parse_year(name: &str, value: Option<&str>, default: i32) -> Result<i32, AppError> {
    let Some(value) = value else {
        return Ok(default);
    };

    value.trim().parse::<i32>().map_err(|e| {
        AppError::HandlerFailure(format!("Invalid {} '{}': {}", name, value, e))
    })
}

/// Splits a `;`-separated list of country codes, dropping blank entries.
pub fn split_country_codes(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}
