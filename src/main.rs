use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use relevance_engine::config::{LoggingSettings, Settings};
use relevance_engine::routes::{self, AppState};
use relevance_engine::services::DataStore;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting relevance engine...");

    let store = Arc::new(DataStore::new(
        &settings.data.profiles_path,
        &settings.data.content_path,
        settings.data.cache_ttl(),
    ));

    // Fail early on unreadable or malformed data rather than on first request
    match store.dataset().await {
        Ok(dataset) => info!(
            "Dataset ready: {} profiles, {} content items (cache TTL: {}s)",
            dataset.profiles.len(),
            dataset.catalog.len(),
            settings.data.cache_ttl_secs
        ),
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    }

    let app_state = AppState { store };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
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
