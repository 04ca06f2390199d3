use actix_web::{post, web, HttpResponse};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{GenerateSlidesRequest, GenerateSummaryRequest, GenerateTitleRequest};

/// POST /generate-slides
#[post("/generate-slides")]
pub async fn generate_slides(
    req: web::Json<GenerateSlidesRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let generator = state.generator()?;
    let sources = req.sources();
    let options = req.options();

    info!("Slide generation requested: {} sources, {} slides", sources.len(), options.slide_count);

    let outcome = generator.generate_slides(&sources, &options).await;
    Ok(HttpResponse::Ok().json(outcome.into_result()))
}

/// POST /generate-title
#[post("/generate-title")]
pub async fn generate_title(
    req: web::Json<GenerateTitleRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let generator = state.generator()?;

    let outcome = generator.generate_title(&req.content).await;
    Ok(HttpResponse::Ok().json(outcome.into_result()))
}

/// POST /generate-summary
#[post("/generate-summary")]
pub async fn generate_summary(
    req: web::Json<GenerateSummaryRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let generator = state.generator()?;

    let outcome = generator.generate_summary(&req.content, req.max_length).await;
    Ok(HttpResponse::Ok().json(outcome.into_result()))
}
