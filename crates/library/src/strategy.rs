//! Pattern-based reasoning strategies.
//!
//! A strategy is a plain value: a name, the chosen pattern and template
//! ids, and a snapshot of the pattern taken when the strategy was
//! generated. Later catalogue changes do not affect it. Execution goes
//! through a [`ReasoningExecutor`] passed in by the caller.

use reasonforge_core::{ExecutorError, KnowledgeContext, ReasoningExecutor, ReasoningPattern};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::condition;

/// A named, serializable strategy built around one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningStrategy {
    /// `pattern-based-<pattern id>`
    pub name: String,
    pub description: String,
    pub pattern_id: String,
    pub template_id: Option<String>,
    /// Match confidence at generation time
    pub confidence: f64,
    pub pattern: ReasoningPattern,
}

impl ReasoningStrategy {
    pub fn new(pattern: ReasoningPattern, template_id: Option<String>, confidence: f64) -> Self {
        Self {
            name: format!("pattern-based-{}", pattern.id),
            description: format!("Reasoning strategy based on pattern: {}", pattern.name),
            pattern_id: pattern.id.clone(),
            template_id,
            confidence,
            pattern,
        }
    }

    /// True if any of the pattern's trigger conditions fires.
    pub fn is_applicable(&self, problem: &str, domain: &str) -> bool {
        condition::any_matches(&self.pattern.trigger_conditions, problem, domain)
    }

    /// Run the pattern through `executor`. No timeout is imposed here.
    pub async fn apply(
        &self,
        executor: &dyn ReasoningExecutor,
        problem: &str,
        context: &KnowledgeContext,
    ) -> Result<serde_json::Value, ExecutorError> {
        info!(
            strategy = %self.name,
            executor = executor.name(),
            evidence = context.chunk_count(),
            "Applying reasoning strategy"
        );
        executor.execute(&self.pattern, problem, context).await
    }
}
