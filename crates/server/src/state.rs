use docdeck_common::{AppConfig, Result};
use docdeck_llm::{DocumentAssistant, GroqClient, LlmClient};
use std::sync::Arc;

use crate::store::{DocumentStore, InMemoryDocumentStore};

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Uploaded documents for this process
    pub store: Arc<dyn DocumentStore>,

    /// Summarize / answer / slide generation
    pub assistant: DocumentAssistant,
}

impl AppState {
    /// Create new application state backed by the Groq API
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Arc::new(GroqClient::from_config(&config)?);
        Ok(Self::with_parts(
            config,
            client,
            Arc::new(InMemoryDocumentStore::new()),
        ))
    }

    /// Assemble state from explicit parts
    pub fn with_parts(
        config: AppConfig,
        client: Arc<dyn LlmClient>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        let assistant = DocumentAssistant::new(client, config.llm_model.clone());
        Self {
            config,
            store,
            assistant,
        }
    }
}
