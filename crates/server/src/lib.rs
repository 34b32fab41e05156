//! DocDeck HTTP Server
//!
//! Actix-web REST API: document upload and summary, questions about
//! uploaded documents, and slide generation.

pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use docdeck_common::{AppConfig, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::ApiError;
pub use state::AppState;
pub use store::{DocumentStore, InMemoryDocumentStore, StoredDocument};

/// Seconds browsers may cache a preflight response
const CORS_MAX_AGE: usize = 3600;

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;
    config.ensure_directories()?;

    let bind_address = config.server_bind_address();
    let origins = config.cors_allowed_origins.clone();

    info!("LLM model: {}", config.llm_model);
    info!("Slide mode: {:?}", config.slide_mode);
    info!("Upload directory: {}", config.upload_dir.display());
    info!("CORS origins: {}", origins.join(", "));

    let state = web::Data::new(AppState::new(config)?);

    info!("Starting server on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(build_cors(&origins))
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(bind_address.as_str())?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}

/// CORS policy for the configured origins.
///
/// A `*` entry allows any origin; credentials are then disabled since
/// browsers reject wildcard origins with credentials.
fn build_cors(origins: &[String]) -> Cors {
    let base = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(CORS_MAX_AGE);

    if origins.iter().any(|origin| origin == "*") {
        return base.allow_any_origin();
    }

    origins
        .iter()
        .fold(base.supports_credentials(), |cors, origin| cors.allowed_origin(origin))
}
