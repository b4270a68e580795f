//! Reasoning executor trait — performs the steps a pattern prescribes.
//!
//! The engine plans; an executor (typically an LLM-backed reasoning
//! pipeline) does the work. Results are opaque JSON to the engine.

use async_trait::async_trait;

use crate::error::ExecutorError;
use crate::knowledge::KnowledgeContext;
use crate::pattern::ReasoningPattern;

/// Executes pattern-based reasoning for a problem.
#[async_trait]
pub trait ReasoningExecutor: Send + Sync {
    /// Executor name (e.g., "echo", "llm").
    fn name(&self) -> &str;

    /// Run the pattern's steps against the problem and evidence.
    async fn execute(
        &self,
        pattern: &ReasoningPattern,
        problem: &str,
        context: &KnowledgeContext,
    ) -> Result<serde_json::Value, ExecutorError>;
}
