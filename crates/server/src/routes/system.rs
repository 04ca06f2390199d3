use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::{HealthResponse, RootResponse};

/// GET / - Service banner
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse {
        message: "AutoSlides API".to_string(),
        status: "running".to_string(),
    })
}

/// GET /health - Whether the generator initialized at startup
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let response = match state.generator() {
        Ok(generator) => HealthResponse {
            status: "healthy".to_string(),
            ai_provider: Some(generator.provider().to_string()),
            message: None,
        },
        Err(_) => HealthResponse {
            status: "error".to_string(),
            ai_provider: None,
            message: Some(format!(
                "AI agent not initialized: {}",
                state.init_error().unwrap_or("unknown error")
            )),
        },
    };

    HttpResponse::Ok().json(response)
}
