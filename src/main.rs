use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use resumatch::config::{LogFormat, Settings};
use resumatch::routes::{self, AppState};
use resumatch::services::{FlowCache, OpenAiExtractor, PostgresClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_tracing(&settings.logging.level, settings.logging.format);

    info!("Starting Resumatch service...");

    // Initialize PostgreSQL client
    let postgres = PostgresClient::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
        settings.database.acquire_timeout_secs,
        settings.database.idle_timeout_secs,
    )
    .await
    .map_err(|e| {
        error!("Failed to connect to PostgreSQL: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!(
        "PostgreSQL client initialized (max: {} connections)",
        settings.database.max_connections.unwrap_or(10)
    );

    // Initialize extraction client
    if settings.extraction.api_key.is_empty() {
        warn!("No extraction API key configured; uploads will fail");
    }

    let extractor = OpenAiExtractor::new(
        settings.extraction.base_url.clone(),
        settings.extraction.api_key.clone(),
        settings.extraction.model.clone(),
        settings.extraction.temperature,
        Duration::from_secs(settings.extraction.timeout_secs),
    )
    .map_err(|e| {
        error!("Failed to create extraction client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Extraction client initialized (model: {})", settings.extraction.model);

    let flows = FlowCache::new(settings.cache.flow_cache_size, settings.cache.ttl_secs);

    info!(
        "Flow cache initialized ({} entries, TTL: {}s)",
        settings.cache.flow_cache_size, settings.cache.ttl_secs
    );

    // Build application state
    let app_state = AppState {
        store: Arc::new(postgres),
        extractor: Arc::new(extractor),
        flows,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(resumatch::configure_extractors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
