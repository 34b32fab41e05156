use actix_multipart::{Field, Multipart};
use actix_web::{post, web, HttpResponse};
use docdeck_common::{preview, DocDeckError, Result};
use docdeck_extract::{extract_text, DocumentFormat};
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::StoredDocument;
use crate::types::UploadResponse;

/// Characters of extracted text echoed back in the upload response
pub const UPLOAD_PREVIEW_CHARS: usize = 1000;

/// Upload a document, extract its text and summarize it.
///
/// The file only lives on disk while it is being extracted. The extracted
/// text is kept in the store under the client filename.
#[post("/upload")]
pub async fn upload(
    mut payload: Multipart,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let mut saved: Option<(String, PathBuf)> = None;

    while let Some(field) = payload.next().await {
        let mut field =
            field.map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {}", e)))?;
        let content_disposition = field.content_disposition();

        if content_disposition.get_name() != Some("file") {
            continue;
        }

        let filename = content_disposition
            .get_filename()
            .and_then(sanitize_filename)
            .ok_or_else(|| ApiError::bad_request("No file provided"))?;

        // Unsupported files never touch the disk
        let format = DocumentFormat::from_path(&filename).map_err(ApiError::from)?;
        let temp_path = temp_upload_path(&state, &filename);
        debug!("Receiving upload - File: {}, Format: {}", filename, format);

        if let Err(e) = save_field(&mut field, &temp_path).await {
            remove_temp_file(&temp_path).await;
            return Err(e.into());
        }

        saved = Some((filename, temp_path));
        break;
    }

    let (filename, temp_path) = saved.ok_or_else(|| ApiError::bad_request("No file provided"))?;

    let result = process_upload(&state, &filename, &temp_path).await;
    remove_temp_file(&temp_path).await;

    let response = result.map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(response))
}

/// Reduce a client-supplied filename to its final path component
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(|c| c == '/' || c == '\\').next()?.trim();
    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}

/// Extract, summarize and store an upload already written to disk
async fn process_upload(state: &AppState, filename: &str, path: &Path) -> Result<UploadResponse> {
    let extract_path = path.to_path_buf();
    let text = tokio::task::spawn_blocking(move || extract_text(&extract_path))
        .await
        .map_err(|e| DocDeckError::internal(format!("Extraction task failed: {}", e)))??;

    info!(
        "Text extracted - File: {}, Length: {} chars",
        filename,
        text.chars().count()
    );

    let summary = state.assistant.summarize(&text).await?;
    let content = preview(&text, UPLOAD_PREVIEW_CHARS);

    state.store.put(StoredDocument::new(filename, text)).await;

    Ok(UploadResponse {
        summary,
        filename: filename.to_string(),
        content,
    })
}

/// Unique temp path in the upload directory with the lowercased extension
fn temp_upload_path(state: &AppState, filename: &str) -> PathBuf {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    state
        .config
        .get_upload_path(&format!("{}.{}", Uuid::new_v4(), ext))
}

async fn save_field(field: &mut Field, path: &Path) -> std::result::Result<(), ApiError> {
    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|e| ApiError::from(DocDeckError::file_system(format!("Failed to create {}: {}", path.display(), e))))?;

    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;
        file.write_all(&data)
            .await
            .map_err(|e| ApiError::from(DocDeckError::Io(e)))?;
    }

    file.flush().await.map_err(|e| ApiError::from(DocDeckError::Io(e)))?;
    Ok(())
}

async fn remove_temp_file(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        warn!("Failed to remove temp file {}: {}", path.display(), e);
    }
}
