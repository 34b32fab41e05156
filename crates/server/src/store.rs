//! Session document store
//!
//! Extracted text keyed by upload filename. Lives as long as the process;
//! nothing is persisted or evicted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Extracted document kept for follow-up questions
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Upload filename (store key)
    pub filename: String,

    /// Full extracted text
    pub text: String,

    /// When the document was stored
    pub uploaded_at: DateTime<Utc>,
}

impl StoredDocument {
    /// Create new document stamped with the current time
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
            uploaded_at: Utc::now(),
        }
    }
}

/// Storage backend for uploaded documents.
///
/// Implementations must be safe to share across request handlers. Writes to
/// the same filename are last-write-wins; a reader sees either the old or
/// the new document, never a mix.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Look up a document by filename
    async fn get(&self, filename: &str) -> Option<Arc<StoredDocument>>;

    /// Insert or replace a document, returning the replaced one
    async fn put(&self, document: StoredDocument) -> Option<Arc<StoredDocument>>;

    /// Remove a document, returning it if present
    async fn delete(&self, filename: &str) -> Option<Arc<StoredDocument>>;

    /// Number of stored documents
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Process-scoped store behind a single reader/writer lock
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, Arc<StoredDocument>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, filename: &str) -> Option<Arc<StoredDocument>> {
        self.documents.read().await.get(filename).cloned()
    }

    async fn put(&self, document: StoredDocument) -> Option<Arc<StoredDocument>> {
        let filename = document.filename.clone();
        let chars = document.text.chars().count();
        let replaced = self
            .documents
            .write()
            .await
            .insert(filename.clone(), Arc::new(document));

        if replaced.is_some() {
            info!("Replaced stored document: {} ({} chars)", filename, chars);
        } else {
            debug!("Stored document: {} ({} chars)", filename, chars);
        }
        replaced
    }

    async fn delete(&self, filename: &str) -> Option<Arc<StoredDocument>> {
        self.documents.write().await.remove(filename)
    }

    async fn len(&self) -> usize {
        self.documents.read().await.len()
    }
}
