mod catalog;
mod clock;
mod config;
mod error;
mod inference;
mod routes;
mod upload;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, http, web};
use catalog::CatalogService;
use clock::SystemClock;
use config::ServerConfig;
use inference::config::ScreeningConfig;
use inference::model::{ImageAnalyzer, MockAnalyzer};
use routes::configure_routes;
use std::env;
use std::sync::Arc;

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));
    let cors = if allowed_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        cors
    };
    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    }

    let server_config = ServerConfig::from_env().map_err(|e| {
        log::error!("Invalid server configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let screening_config = ScreeningConfig::load(&server_config.screening_config).map_err(|e| {
        log::error!("Failed to load screening config: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;
    log::info!(
        "Loaded screening config v{} (scan id prefix {:?})",
        screening_config.version,
        screening_config.analyzer.scan_id_prefix
    );

    let analyzer: Arc<dyn ImageAnalyzer> = Arc::new(MockAnalyzer::new(
        screening_config.analyzer.clone(),
        Arc::new(SystemClock),
    ));
    let analyzer = web::Data::from(analyzer);
    let catalog = web::Data::new(CatalogService::default());

    if server_config.allowed_origins.is_empty() {
        log::warn!("CORS_ALLOWED_ORIGINS not set, accepting any origin");
    }

    let bind_address = server_config.bind_address();
    log::info!("Serving frontend from {}", server_config.frontend_dir);
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(build_cors(&server_config.allowed_origins))
            .app_data(analyzer.clone())
            .app_data(catalog.clone())
            .configure(|cfg| configure_routes(cfg, server_config.frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
