use docdeck_common::{DocDeckError, Result};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::docx::extract_docx;
use crate::pdf::extract_pdf;
use crate::tabular::{extract_csv, extract_excel};

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Comma-separated values
    Csv,
    /// Excel workbook (.xls / .xlsx)
    Excel,
    /// Word document
    Docx,
    /// Portable Document Format
    Pdf,
}

impl DocumentFormat {
    /// Resolve format from a lowercase file extension (without the dot)
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xls" | "xlsx" => Ok(Self::Excel),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(DocDeckError::UnsupportedFormat),
        }
    }

    /// Resolve format from a file path or bare filename.
    ///
    /// Only the extension is consulted; file contents are never sniffed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .ok_or(DocDeckError::UnsupportedFormat)?;
        Self::from_extension(ext)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Csv => "csv",
            Self::Excel => "excel",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        };
        f.write_str(name)
    }
}

/// Extract plain text from a document, choosing the extractor by extension
pub fn extract_text(path: &Path) -> Result<String> {
    let format = DocumentFormat::from_path(path)?;
    info!("Extracting text - Format: {}, Path: {}", format, path.display());

    let text = match format {
        DocumentFormat::Csv => extract_csv(path)?,
        DocumentFormat::Excel => extract_excel(path)?,
        DocumentFormat::Docx => extract_docx(path)?,
        DocumentFormat::Pdf => extract_pdf(path)?,
    };

    debug!("Extracted {} chars from {}", text.chars().count(), path.display());
    Ok(text)
}
