use std::sync::Arc;

use mock_api::{
    Config, build,
    store::Store,
    telemetry::{get_subscriber, init_subscriber, log_error},
};

/// In-memory news API for local development.
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root. All are optional:
/// - IP_ADDRESS: Server bind address (default 127.0.0.1)
/// - PORT: Server port (default 8000)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, or a comma-separated
///   list)
/// - LOGINS_FILE: JSON file with the demo login list served at /logins.json
///
/// Example:
/// IP_ADDRESS=127.0.0.1 PORT=8000 ALLOWED_ORIGINS=* cargo run -p mock-api
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env()?;
    let logins = match config.load_logins() {
        Ok(logins) => logins,
        Err(e) => {
            log_error(e);
            mock_api::default_logins()
        }
    };

    let server = build(&mut config, Arc::new(Store::new(logins)))?;
    tracing::info!("listening on http://{}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
