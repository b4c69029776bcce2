use holonet::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, router::app(AppState::from(db))).await?;

    Ok(())
}
