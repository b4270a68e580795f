//! Error types for the ReasonForge domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum; scoring code never errors.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum LibraryError {
    #[error("Pattern not found: {pattern_id}")]
    PatternNotFound { pattern_id: String },

    #[error("No matching patterns for domain '{domain}'")]
    NoMatchingPatterns { domain: String },

    #[error("Invalid catalogue entry '{id}': {reason}")]
    InvalidEntry { id: String, reason: String },

    #[error("Catalogue file error at {path}: {reason}")]
    CatalogueFile { path: String, reason: String },
}

impl LibraryError {
    /// Whether this is a lookup miss (non-retryable).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PatternNotFound { .. } | Self::NoMatchingPatterns { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Evidence retrieval failed: {0}")]
    RetrievalFailed(String),

    #[error("Knowledge source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Reasoning execution failed for pattern {pattern_id}: {reason}")]
    ExecutionFailed { pattern_id: String, reason: String },
}
