use docdeck_common::Result;
use crate::types::ChatRequest;
use async_trait::async_trait;

/// Common trait for chat completion backends
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run a chat completion and return the generated text
    async fn complete(&self, request: ChatRequest) -> Result<String>;
}
