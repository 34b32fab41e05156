use actix_web::{post, web, HttpResponse};
use docdeck_common::SlideMode;
use docdeck_llm::{parse_slides, Slide, SlideLayout};
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{GenerateSlidesRequest, SlidesResponse};

/// Generate presentation slides for an audience.
///
/// The body is parsed by hand so that any malformed payload maps to a
/// single `Invalid JSON body` error.
#[post("/generate-slides")]
pub async fn generate_slides(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let request: GenerateSlidesRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected slide request body: {}", e);
        ApiError::bad_request("Invalid JSON body")
    })?;

    let brief = request.into_brief();
    let mode = state.config.slide_mode;

    let text = state
        .assistant
        .generate_slides_text(&brief, mode == SlideMode::Parsed)
        .await
        .map_err(|e| {
            error!("Slide generation failed: {}", e);
            ApiError::internal(format!("AI generation error: {}", e))
        })?;

    let slides = match mode {
        SlideMode::Raw => vec![raw_slide(&brief.audience_type, text)],
        SlideMode::Parsed => {
            let parsed = parse_slides(&text);
            if parsed.is_empty() {
                warn!("No slides parsed from LLM output, returning raw text");
                vec![raw_slide(&brief.audience_type, text)]
            } else {
                parsed
            }
        }
    };

    info!("Slides generated - Count: {}, Mode: {:?}", slides.len(), mode);
    Ok(HttpResponse::Ok().json(SlidesResponse { slides }))
}

/// Single title slide carrying the unparsed LLM text
fn raw_slide(audience_type: &str, text: String) -> Slide {
    Slide {
        title: format!("{} Presentation", audience_type),
        content: text,
        layout: SlideLayout::Title,
    }
}
