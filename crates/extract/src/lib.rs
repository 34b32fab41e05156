//! DocDeck document extraction
//!
//! Plain-text extraction for CSV, Excel, DOCX and PDF files, selected by
//! file extension.

mod docx;
mod format;
mod pdf;
mod tabular;

pub use docx::extract_docx;
pub use format::{extract_text, DocumentFormat};
pub use pdf::extract_pdf;
pub use tabular::{extract_csv, extract_excel, render_table};
