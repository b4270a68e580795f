//! Knowledge context — the evidence bundle available to a matching or
//! application call.
//!
//! Retrieval (embedding similarity over a vector store) lives behind the
//! [`KnowledgeProvider`] trait. Engine code only ever reads an
//! already-fetched [`KnowledgeContext`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::KnowledgeError;

/// Domain tag plus the scored evidence fragments retrieved for a problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeContext {
    pub domain: String,

    #[serde(default)]
    pub relevant_chunks: Vec<EvidenceChunk>,
}

impl KnowledgeContext {
    pub fn new(domain: impl Into<String>, relevant_chunks: Vec<EvidenceChunk>) -> Self {
        Self {
            domain: domain.into(),
            relevant_chunks,
        }
    }

    /// A context with no evidence.
    pub fn empty(domain: impl Into<String>) -> Self {
        Self::new(domain, Vec::new())
    }

    pub fn chunk_count(&self) -> usize {
        self.relevant_chunks.len()
    }

    /// Mean fragment confidence, `0.0` when there is no evidence.
    pub fn average_confidence(&self) -> f64 {
        if self.relevant_chunks.is_empty() {
            return 0.0;
        }
        let total: f64 = self.relevant_chunks.iter().map(|c| c.confidence).sum();
        total / self.relevant_chunks.len() as f64
    }
}

/// A single retrieved evidence fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceChunk {
    #[serde(default)]
    pub content: String,

    /// Retrieval confidence in `[0, 1]`
    pub confidence: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl EvidenceChunk {
    pub fn new(content: impl Into<String>, confidence: f64) -> Self {
        Self {
            content: content.into(),
            confidence,
            source: None,
            metadata: serde_json::Map::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Read-only evidence retrieval.
///
/// Implementations: vector-store backed retrievers (external), static
/// fixtures for tests and offline use.
#[async_trait]
pub trait KnowledgeProvider: Send + Sync {
    /// Provider name (e.g., "static", "vector").
    fn name(&self) -> &str;

    /// Fetch the evidence relevant to `problem` in `domain`.
    async fn fetch(&self, problem: &str, domain: &str) -> Result<KnowledgeContext, KnowledgeError>;
}
