//! Indicator endpoints.
//!
//! Every handler accepts `countries`, `start_year` and `end_year`; the climate,
//! education and health handlers also accept `indicator`. All of them respond with a
//! JSON object mapping country names to observations sorted by year.
//!
//! The query string is read as raw pairs; a repeated parameter keeps its last value.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::indicator::IndicatorQuery,
    server::{
        error::AppError,
        model::indicator::{IndicatorCategory, IndicatorRequest},
        service::indicator::IndicatorService,
        state::AppState,
    },
};

pub async fn get_gdp_data(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    indicator_response(&state, IndicatorCategory::Gdp, pairs).await
}

pub async fn get_population_data(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    indicator_response(&state, IndicatorCategory::Population, pairs).await
}

/// Climate indicators: `co2_emissions` (default), `renewable_energy`, `forest_area`.
pub async fn get_climate_data(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    indicator_response(&state, IndicatorCategory::Climate, pairs).await
}

/// Education indicators: `literacy_rate` (default), `school_enrollment`, `completion_rate`.
pub async fn get_education_data(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    indicator_response(&state, IndicatorCategory::Education, pairs).await
}

/// Health indicators: `life_expectancy` (default), `infant_mortality`, `malnutrition`.
pub async fn get_health_data(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    indicator_response(&state, IndicatorCategory::Health, pairs).await
}

/// Shared body of the indicator handlers.
///
/// # Returns
/// - `200 OK` - Live, sample or empty series
/// - `500 Internal Server Error` - `{"error": message}` when a year is not an integer
async fn indicator_response(
    state: &AppState,
    category: IndicatorCategory,
    pairs: Vec<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let request = IndicatorRequest::from_query(category, IndicatorQuery::from_pairs(pairs))?;

    let data = IndicatorService::new(&state.worldbank).load(&request).await;

    Ok((StatusCode::OK, Json(data.into_series().into_dto())))
}
