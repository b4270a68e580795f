//! Static knowledge provider — serves a fixed evidence bundle.
//!
//! Useful for tests and for offline runs where evidence was retrieved
//! ahead of time and saved as JSON.

use std::path::Path;

use async_trait::async_trait;
use reasonforge_core::error::KnowledgeError;
use reasonforge_core::knowledge::{EvidenceChunk, KnowledgeContext, KnowledgeProvider};

pub struct StaticKnowledgeProvider {
    chunks: Vec<EvidenceChunk>,
    domain: Option<String>,
}

impl StaticKnowledgeProvider {
    /// Serve `chunks` for every request, tagged with the requested domain.
    pub fn new(chunks: Vec<EvidenceChunk>) -> Self {
        Self {
            chunks,
            domain: None,
        }
    }

    /// Serve a fixed context, keeping its own domain tag.
    pub fn from_context(context: KnowledgeContext) -> Self {
        Self {
            chunks: context.relevant_chunks,
            domain: Some(context.domain),
        }
    }

    /// Load either a full context object or a bare array of chunks.
    pub fn from_json_file(path: &Path) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KnowledgeError::Unavailable(format!("{}: {e}", path.display()))
        })?;

        if let Ok(context) = serde_json::from_str::<KnowledgeContext>(&content) {
            return Ok(Self::from_context(context));
        }
        let chunks: Vec<EvidenceChunk> = serde_json::from_str(&content).map_err(|e| {
            KnowledgeError::RetrievalFailed(format!("{}: {e}", path.display()))
        })?;
        Ok(Self::new(chunks))
    }
}

impl Default for StaticKnowledgeProvider {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl KnowledgeProvider for StaticKnowledgeProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _problem: &str, domain: &str) -> Result<KnowledgeContext, KnowledgeError> {
        let domain = self.domain.clone().unwrap_or_else(|| domain.to_string());
        Ok(KnowledgeContext::new(domain, self.chunks.clone()))
    }
}
