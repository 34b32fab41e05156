//! DocDeck LLM Integration
//!
//! Groq chat completion client, prompt templates, the document assistant
//! and the slide response parser.

mod assistant;
mod client;
mod llm_trait;
mod prompts;
mod slides;
mod types;

pub use assistant::{DocumentAssistant, SHORT_ANSWER_MAX_TOKENS, TEMPERATURE};
pub use client::GroqClient;
pub use llm_trait::LlmClient;
pub use prompts::{
    answer_prompt, slides_prompt, structured_slides_prompt, summarize_prompt,
    ANSWER_CONTEXT_CHARS, SLIDES_CONTEXT_CHARS, SLIDE_FORMAT_INSTRUCTIONS, SUMMARY_CONTEXT_CHARS,
};
pub use slides::{parse_slides, Slide, SlideLayout, SlideParser};
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChoiceMessage, Role, SlideBrief, TokenUsage};
