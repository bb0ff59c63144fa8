mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState, worldbank::WorldBankClient,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_store = startup::connect_to_session(&db).await?;
    let session = startup::session_layer(session_store, config.session_secure_cookie);
    let http_client = startup::setup_reqwest_client(&config)?;

    let worldbank = WorldBankClient::new(http_client, config.worldbank_base_url.clone());
    let app = router::app(AppState::new(db, worldbank), session);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
