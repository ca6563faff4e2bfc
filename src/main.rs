use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::{Arc, RwLock};
use tracing::{error, info};

use homealloc_algo::config::Settings;
use homealloc_algo::core::{Allocator, LocationGraph};
use homealloc_algo::error::{handle_json_payload_error, handle_query_payload_error};
use homealloc_algo::routes::{self, allocations::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!(
        "Starting HomeAlloc allocation service (log level {})...",
        log_level
    );

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the allocator with the configured acceptance floor
    let allocator = Allocator::new(settings.allocation.min_match_score);

    info!(
        "Allocator initialized (min match score {})",
        settings.allocation.min_match_score
    );

    // The location graph starts empty and is populated through the API
    let graph = Arc::new(RwLock::new(LocationGraph::new()));

    let app_state = AppState { allocator, graph };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
