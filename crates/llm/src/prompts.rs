//! Prompt templates
//!
//! Document text is cut by character count before it is embedded, so long
//! documents may be cut mid-sentence.

use docdeck_common::truncate_chars;

use crate::types::SlideBrief;

/// Characters of document text sent with a summary request
pub const SUMMARY_CONTEXT_CHARS: usize = 3000;

/// Characters of document text sent with a question
pub const ANSWER_CONTEXT_CHARS: usize = 9000;

/// Characters of document text sent with a slide request
pub const SLIDES_CONTEXT_CHARS: usize = 3000;

/// Layout convention the slide parser understands
pub const SLIDE_FORMAT_INSTRUCTIONS: &str = r#"Format every slide exactly like this, one field per line:
Slide <number>
Title: <slide title>
Content: <slide body on a single line>
Layout: <one of title, bullets, split>"#;

/// Prompt for document summarization
pub fn summarize_prompt(text: &str) -> String {
    format!(
        "Summarize the following document:\n\n{}",
        truncate_chars(text, SUMMARY_CONTEXT_CHARS)
    )
}

/// Prompt for answering a question about a document
pub fn answer_prompt(text: &str, question: &str) -> String {
    format!(
        "Given the following document content, please answer this question: {}\n\nDocument content:\n{}",
        question,
        truncate_chars(text, ANSWER_CONTEXT_CHARS)
    )
}

/// Prompt for free-form slide generation
pub fn slides_prompt(brief: &SlideBrief) -> String {
    format!(
        "Generate a presentation for a {} audience at a {} technical level.\nContext: {}\nDocument content:\n{}\n",
        brief.audience_type,
        brief.technical_level,
        brief.audience_input,
        truncate_chars(&brief.document_content, SLIDES_CONTEXT_CHARS)
    )
}

/// Prompt for slide generation in the parser's line format
pub fn structured_slides_prompt(brief: &SlideBrief) -> String {
    format!("{}\n{}\n", slides_prompt(brief), SLIDE_FORMAT_INSTRUCTIONS)
}
