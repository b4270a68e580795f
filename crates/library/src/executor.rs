//! Echo executor — lays out the reasoning plan without running a model.

use async_trait::async_trait;
use reasonforge_core::error::ExecutorError;
use reasonforge_core::executor::ReasoningExecutor;
use reasonforge_core::knowledge::KnowledgeContext;
use reasonforge_core::pattern::ReasoningPattern;
use serde_json::json;

use crate::evidence;

/// Returns the step plan, annotated with per-step evidence fitness.
pub struct EchoExecutor;

#[async_trait]
impl ReasoningExecutor for EchoExecutor {
    fn name(&self) -> &str {
        "echo"
    }

    async fn execute(
        &self,
        pattern: &ReasoningPattern,
        problem: &str,
        context: &KnowledgeContext,
    ) -> Result<serde_json::Value, ExecutorError> {
        let steps: Vec<serde_json::Value> = pattern
            .reasoning_steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                json!({
                    "index": i + 1,
                    "type": step.step_type.to_string(),
                    "description": step.description,
                    "evidence_fitness": evidence::step_fitness(&step.evidence_requirements, context),
                })
            })
            .collect();

        Ok(json!({
            "pattern_id": pattern.id,
            "pattern_name": pattern.name,
            "problem": problem,
            "evidence_count": context.chunk_count(),
            "steps": steps,
        }))
    }
}
