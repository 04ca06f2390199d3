//! AutoSlides HTTP Server
//!
//! Actix-web REST API in front of the slide/title/summary generator

mod error;
mod routes;
mod state;
mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use autoslides_common::{AppConfig, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::ApiError;
pub use state::AppState;
pub use types::{
    ErrorResponse, GenerateSlidesRequest, GenerateSummaryRequest, GenerateTitleRequest,
    HealthResponse, RootResponse,
};

/// Register all routes and the JSON body configuration
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(routes::json_config())
        .service(routes::system::root)
        .service(routes::system::health)
        .service(routes::generate::generate_slides)
        .service(routes::generate::generate_title)
        .service(routes::generate::generate_summary);
}

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = web::Data::new(AppState::new(config));

    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
