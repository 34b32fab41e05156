use serde::{Deserialize, Serialize};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name (e.g., "meta-llama/llama-4-scout-17b-16e-instruct")
    pub model: String,

    /// Conversation so far
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Text of the last user message, if any
    pub fn prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

/// OpenAI-compatible chat completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Model that served the request
    #[serde(default)]
    pub model: String,

    /// Generated choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,

    /// Token accounting
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

/// One generated choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message payload of a choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Audience description for slide generation
#[derive(Debug, Clone, PartialEq)]
pub struct SlideBrief {
    /// Audience category (e.g., "Executives")
    pub audience_type: String,

    /// Technical depth (e.g., "balanced")
    pub technical_level: String,

    /// Free-text audience context
    pub audience_input: String,

    /// Source document text
    pub document_content: String,
}

impl SlideBrief {
    pub const DEFAULT_AUDIENCE_TYPE: &'static str = "General Audience";
    pub const DEFAULT_TECHNICAL_LEVEL: &'static str = "balanced";
}

impl Default for SlideBrief {
    fn default() -> Self {
        Self {
            audience_type: Self::DEFAULT_AUDIENCE_TYPE.to_string(),
            technical_level: Self::DEFAULT_TECHNICAL_LEVEL.to_string(),
            audience_input: String::new(),
            document_content: String::new(),
        }
    }
}
