use actix_web::{post, web, HttpResponse};
use docdeck_common::DocDeckError;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{AskRequest, AskResponse};

/// Answer a question about a previously uploaded document
#[post("/ask")]
pub async fn ask(
    req: web::Json<AskRequest>,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let AskRequest { filename, question } = req.into_inner();
    info!("Question received - File: {}", filename);

    let document = state
        .store
        .get(&filename)
        .await
        .ok_or_else(|| ApiError::from(DocDeckError::not_found("File not found")))?;

    let answer = state
        .assistant
        .answer(&document.text, &question)
        .await
        .map_err(ApiError::from)?;

    Ok(HttpResponse::Ok().json(AskResponse { answer }))
}
