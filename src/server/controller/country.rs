use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::country::CountryDto,
    server::{error::AppError, service::country::CountryService, state::AppState},
};

/// Lists countries for the dashboard's country picker.
pub async fn get_countries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let country_service = CountryService::new(&state.worldbank);

    let countries: Vec<CountryDto> = country_service
        .list()
        .await
        .into_iter()
        .map(|country| country.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(countries)))
}
