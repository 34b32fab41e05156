use async_trait::async_trait;
use docdeck_common::{AppConfig, DocDeckError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{ChatRequest, ChatResponse};

/// Groq chat completion client (OpenAI-compatible API)
#[derive(Debug, Clone)]
pub struct GroqClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl GroqClient {
    /// Create new Groq client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DocDeckError::llm(format!("Failed to create HTTP client: {}", e)))?;

        info!("Groq client initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            client,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.llm_base_url.clone(),
            config.groq_api_key.clone(),
            Duration::from_secs(config.llm_timeout_secs),
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        let url = self.completions_url();

        debug!(
            "Sending chat completion - Model: {}, Prompt length: {}",
            request.model,
            request.prompt().map(|p| p.chars().count()).unwrap_or(0)
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DocDeckError::llm(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocDeckError::llm(format!("API error ({}): {}", status, body)));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| DocDeckError::llm(format!("Failed to parse response: {}", e)))?;

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DocDeckError::llm("Response contained no choices"))?;

        if let Some(usage) = &result.usage {
            debug!(
                "Chat completion done - Finish: {:?}, Tokens: {} prompt + {} completion",
                choice.finish_reason, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(choice.message.content.unwrap_or_default())
    }
}
