use roster_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load .env (if present) before reading configuration
    dotenv::dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging (JSON in production, plain text otherwise)
    roster_server::init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        Some(config.is_production()),
        std::env::var("LOG_DIR").ok().as_deref(),
    );

    tracing::info!("Roster server starting...");

    // 4. Connect to the store and build shared state.
    //    A store that cannot be reached at startup is fatal.
    let state = match ServerState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize server state: {}", e);
            return Err(e.into());
        }
    };

    // 5. Start the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
