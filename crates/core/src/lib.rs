//! # ReasonForge Core
//!
//! Domain types, collaborator traits, and error definitions for the
//! ReasonForge reasoning-pattern engine. This crate holds **no engine
//! logic**. It defines the model the library crate scores and plans over.
//!
//! ## Design Philosophy
//!
//! Everything the engine consumes from outside (evidence retrieval,
//! reasoning execution) is a trait here. Implementations live elsewhere.
//! This enables:
//! - Swapping a vector-store retriever for a static fixture in tests
//! - Plugging any LLM pipeline in as the reasoning executor
//! - Clean dependency graph (all crates depend inward on core)

pub mod application;
pub mod error;
pub mod executor;
pub mod knowledge;
pub mod pattern;
pub mod template;

// Re-export key types at crate root for ergonomics
pub use application::{ApplicationContext, PatternApplication, PatternMatchResult, ScoreBreakdown};
pub use error::{ExecutorError, KnowledgeError, LibraryError};
pub use executor::ReasoningExecutor;
pub use knowledge::{EvidenceChunk, KnowledgeContext, KnowledgeProvider};
pub use pattern::{
    ComplexityTier, EvidenceRequirements, GENERAL_DOMAIN, PatternMetadata, ReasoningPattern,
    ReasoningStep, StepType,
};
pub use template::{
    ReasoningTemplate, StepModification, TemplateApplicability, TemplateStep, TemplateVariation,
    VerificationCriteria,
};
