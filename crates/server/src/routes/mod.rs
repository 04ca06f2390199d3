pub mod generate;
pub mod system;

use actix_web::web;

use crate::error::ApiError;

/// JSON extractor config: malformed bodies become `400 {"detail": ...}`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}
