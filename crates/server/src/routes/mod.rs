pub mod ask;
pub mod slides;
pub mod upload;

pub use upload::{sanitize_filename, UPLOAD_PREVIEW_CHARS};

use actix_web::web;
use tracing::warn;

use crate::error::ApiError;

/// JSON body limit for `/api/ask`
const JSON_LIMIT: usize = 1024 * 1024;

/// Raw body limit for `/generate-slides`
const PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

/// Register every route and its extractor configuration
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            warn!("Rejected JSON body: {}", err);
            ApiError::bad_request(format!("Invalid JSON body: {}", err)).into()
        });

    cfg.app_data(json_config)
        .app_data(web::PayloadConfig::new(PAYLOAD_LIMIT))
        .service(
            web::scope("/api")
                .service(upload::upload)
                .service(ask::ask),
        )
        .service(slides::generate_slides);
}
