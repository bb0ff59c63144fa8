use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    controller::{
        auth::{get_user, login, logout, register},
        country::get_countries,
        indicator::{
            get_climate_data, get_education_data, get_gdp_data, get_health_data,
            get_population_data,
        },
        probe::test_worldbank_api,
    },
    middleware::auth::require_login,
    state::AppState,
};

/// Builds all routes without the session layer.
///
/// Every `/api` route requires a logged-in user; `/register/`, `/login/` and `/logout/`
/// are public.
pub fn router(state: AppState) -> Router<AppState> {
    let api = Router::new()
        .route("/api/auth/user", get(get_user))
        .route("/api/countries/", get(get_countries))
        .route("/api/gdp-data/", get(get_gdp_data))
        .route("/api/population-data/", get(get_population_data))
        .route("/api/climate-data/", get(get_climate_data))
        .route("/api/education-data/", get(get_education_data))
        .route("/api/health-data/", get(get_health_data))
        .route("/api/test/", get(test_worldbank_api))
        .route_layer(middleware::from_fn_with_state(state, require_login));

    Router::new()
        .route("/register/", post(register))
        .route("/login/", post(login))
        .route("/logout/", get(logout).post(logout))
        .merge(api)
}

/// Builds the complete application with state, sessions and request tracing.
///
/// # Arguments
/// - `state` - Shared application state
/// - `session` - Session layer backed by the application's database
pub fn app(state: AppState, session: SessionManagerLayer<SqliteStore>) -> Router {
    router(state.clone())
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http())
}
