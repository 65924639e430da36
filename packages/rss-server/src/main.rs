use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use clap::Parser;
use rss_server::{
    config::ServerConfig,
    handlers::{chart_data, dataset_options, health_check},
    state::ServerState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Signal-strength dashboard data server
#[derive(Parser)]
#[command(name = "rss-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the server (default)
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rss_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Serve) | None => {}
    }

    let config = ServerConfig::from_env()?;

    info!("Starting rss-server v{}", VERSION);
    info!("   Port: {}", config.port);
    info!("   Bind address: {}", config.bind_addr);
    info!("   Mean dataset: {:?}", config.mean_csv);
    info!("   Variance dataset: {:?}", config.variance_csv);

    // One-time dataset load; a missing or inconsistent dataset is fatal.
    let store = Arc::new(rss_core::load(&config.mean_csv, &config.variance_csv)?);
    info!(
        "Loaded {} observations across {} data columns",
        store.len(),
        store.columns().len()
    );

    let state = Arc::new(ServerState::new(config.clone(), store));

    // CORS configuration - configurable via CORS_ORIGINS env var
    let cors_origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();
    info!("   CORS origins: {:?}", config.cors_origins);
    let cors = CorsLayer::new()
        .allow_origin(cors_origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Everything here is GET with query params; keep bodies tiny.
    const MAX_BODY_SIZE: usize = 64 * 1024;

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/options", get(dataset_options))
        .route("/api/chart", get(chart_data))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
