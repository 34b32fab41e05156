use docdeck_llm::{Slide, SlideBrief};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upload response
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// LLM summary of the document
    pub summary: String,

    /// Client filename, also the key for later questions
    pub filename: String,

    /// Preview of the extracted text
    pub content: String,
}

/// Question about a previously uploaded document
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Filename used at upload time
    pub filename: String,

    /// Free-form question
    pub question: String,
}

/// Answer response
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Slide generation request; every field is optional.
///
/// Text fields accept any JSON value. Strings are used as-is, other values
/// are rendered as JSON text, `null` falls back to the default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSlidesRequest {
    #[serde(default)]
    pub audience_type: Option<Value>,

    #[serde(default)]
    pub technical_level: Option<Value>,

    /// Accepted for client compatibility, not used in prompts
    #[serde(default)]
    pub preferences: Option<Value>,

    #[serde(default)]
    pub audience_input: Option<Value>,

    #[serde(default)]
    pub document_content: Option<Value>,
}

impl GenerateSlidesRequest {
    /// Fill missing fields with defaults
    pub fn into_brief(self) -> SlideBrief {
        let defaults = SlideBrief::default();
        SlideBrief {
            audience_type: field_text(self.audience_type, defaults.audience_type),
            technical_level: field_text(self.technical_level, defaults.technical_level),
            audience_input: field_text(self.audience_input, defaults.audience_input),
            document_content: field_text(self.document_content, defaults.document_content),
        }
    }
}

fn field_text(value: Option<Value>, default: String) -> String {
    match value {
        None | Some(Value::Null) => default,
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}

/// Slide generation response
#[derive(Debug, Serialize, Deserialize)]
pub struct SlidesResponse {
    pub slides: Vec<Slide>,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slides_request_defaults() {
        let request: GenerateSlidesRequest = serde_json::from_str("{}").unwrap();
        let brief = request.into_brief();
        assert_eq!(brief.audience_type, "General Audience");
        assert_eq!(brief.technical_level, "balanced");
        assert_eq!(brief.audience_input, "");
        assert_eq!(brief.document_content, "");
    }

    #[test]
    fn test_slides_request_camel_case() {
        let request: GenerateSlidesRequest = serde_json::from_str(
            r#"{"audienceType":"Engineers","technicalLevel":"deep","preferences":{"tone":"casual"},"audienceInput":"infra team","documentContent":"doc"}"#,
        )
        .unwrap();
        assert!(request.preferences.is_some());

        let brief = request.into_brief();
        assert_eq!(brief.audience_type, "Engineers");
        assert_eq!(brief.technical_level, "deep");
        assert_eq!(brief.audience_input, "infra team");
        assert_eq!(brief.document_content, "doc");
    }

    #[test]
    fn test_slides_request_non_string_values_rendered() {
        let request: GenerateSlidesRequest = serde_json::from_str(
            r#"{"audienceType":5,"technicalLevel":true,"audienceInput":["a","b"]}"#,
        )
        .unwrap();
        let brief = request.into_brief();
        assert_eq!(brief.audience_type, "5");
        assert_eq!(brief.technical_level, "true");
        assert_eq!(brief.audience_input, r#"["a","b"]"#);
        assert_eq!(brief.document_content, "");
    }

    #[test]
    fn test_slides_request_null_fields_default() {
        let request: GenerateSlidesRequest =
            serde_json::from_str(r#"{"audienceType":null}"#).unwrap();
        assert_eq!(request.into_brief().audience_type, "General Audience");
    }
}
