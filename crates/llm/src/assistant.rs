use docdeck_common::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::prompts::{answer_prompt, slides_prompt, structured_slides_prompt, summarize_prompt};
use crate::types::{ChatMessage, ChatRequest, SlideBrief};

/// Sampling temperature for every request
pub const TEMPERATURE: f32 = 0.5;

/// Output cap for summaries and answers
pub const SHORT_ANSWER_MAX_TOKENS: u32 = 300;

/// Document-level LLM operations: summarize, answer, draft slides
#[derive(Clone)]
pub struct DocumentAssistant {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl DocumentAssistant {
    /// Create new assistant
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Summarize a document
    pub async fn summarize(&self, text: &str) -> Result<String> {
        info!("Summarizing document - Text length: {} chars", text.chars().count());
        let request = self.request(summarize_prompt(text), Some(SHORT_ANSWER_MAX_TOKENS));
        self.client.complete(request).await
    }

    /// Answer a free-form question about a document
    pub async fn answer(&self, text: &str, question: &str) -> Result<String> {
        info!("Answering question - Question length: {} chars", question.chars().count());
        let request = self.request(answer_prompt(text, question), Some(SHORT_ANSWER_MAX_TOKENS));
        self.client.complete(request).await
    }

    /// Draft slide content for an audience.
    ///
    /// With `structured` set, the prompt asks for the slide parser's line
    /// format. No output cap is applied.
    pub async fn generate_slides_text(&self, brief: &SlideBrief, structured: bool) -> Result<String> {
        info!(
            "Generating slides - Audience: {}, Level: {}, Structured: {}",
            brief.audience_type, brief.technical_level, structured
        );
        let prompt = if structured {
            structured_slides_prompt(brief)
        } else {
            slides_prompt(brief)
        };
        let text = self.client.complete(self.request(prompt, None)).await?;
        debug!("Slide draft received - Length: {} chars", text.chars().count());
        Ok(text)
    }

    fn request(&self, prompt: String, max_tokens: Option<u32>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: Some(TEMPERATURE),
            max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docdeck_common::DocDeckError;
    use std::sync::Mutex;

    /// Records every request and replies with a fixed string
    #[derive(Default)]
    struct RecordingClient {
        requests: Mutex<Vec<ChatRequest>>,
        reply: String,
        fail: bool,
    }

    #[async_trait]
    impl LlmClient for RecordingClient {
        async fn complete(&self, request: ChatRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request);
            if self.fail {
                return Err(DocDeckError::llm("connection reset"));
            }
            Ok(self.reply.clone())
        }
    }

    fn assistant_with(client: Arc<RecordingClient>) -> DocumentAssistant {
        DocumentAssistant::new(client, "test-model")
    }

    #[tokio::test]
    async fn test_summarize_request_shape() {
        let client = Arc::new(RecordingClient {
            reply: "short summary".to_string(),
            ..Default::default()
        });
        let assistant = assistant_with(client.clone());

        let summary = assistant.summarize(&"#".repeat(3500)).await.unwrap();
        assert_eq!(summary, "short summary");

        let requests = client.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.model, "test-model");
        assert_eq!(request.temperature, Some(0.5));
        assert_eq!(request.max_tokens, Some(300));
        let prompt = request.prompt().unwrap();
        assert_eq!(prompt.matches('#').count(), 3000);
    }

    #[tokio::test]
    async fn test_answer_truncates_to_9000() {
        let client = Arc::new(RecordingClient::default());
        let assistant = assistant_with(client.clone());

        assistant.answer(&"@".repeat(12_000), "Why?").await.unwrap();

        let requests = client.requests.lock().unwrap();
        let prompt = requests[0].prompt().unwrap();
        assert!(prompt.contains("answer this question: Why?"));
        assert_eq!(prompt.matches('@').count(), 9000);
        assert_eq!(requests[0].max_tokens, Some(300));
    }

    #[tokio::test]
    async fn test_slides_have_no_token_cap() {
        let client = Arc::new(RecordingClient {
            reply: "Slide 1\nTitle: Hi".to_string(),
            ..Default::default()
        });
        let assistant = assistant_with(client.clone());

        let text = assistant
            .generate_slides_text(&SlideBrief::default(), false)
            .await
            .unwrap();
        assert_eq!(text, "Slide 1\nTitle: Hi");

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].max_tokens, None);
        assert_eq!(requests[0].temperature, Some(0.5));
        let prompt = requests[0].prompt().unwrap();
        assert!(prompt.contains("for a General Audience audience at a balanced technical level"));
        assert!(!prompt.contains("Layout:"));
    }

    #[tokio::test]
    async fn test_structured_slides_prompt_used() {
        let client = Arc::new(RecordingClient::default());
        let assistant = assistant_with(client.clone());

        assistant
            .generate_slides_text(&SlideBrief::default(), true)
            .await
            .unwrap();

        let requests = client.requests.lock().unwrap();
        assert!(requests[0].prompt().unwrap().contains("Layout:"));
    }

    #[tokio::test]
    async fn test_client_errors_propagate() {
        let client = Arc::new(RecordingClient {
            fail: true,
            ..Default::default()
        });
        let assistant = assistant_with(client);

        let err = assistant.summarize("text").await.unwrap_err();
        assert!(matches!(err, DocDeckError::Llm(_)));
    }
}
