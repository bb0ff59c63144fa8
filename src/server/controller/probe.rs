use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::server::{error::AppError, state::AppState};

/// Debug endpoint echoing a fixed request against the upstream API.
///
/// Always responds 200; upstream failures are reported in the body.
pub async fn test_worldbank_api(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let probe = state.worldbank.probe().await;

    Ok((StatusCode::OK, Json(probe.into_dto())))
}
