//! The ReasonForge pattern engine.
//!
//! Selects, adapts and parameterizes a catalogued reasoning pattern for a
//! problem, and estimates the confidence, complexity and cost of applying
//! it.
//!
//! ```text
//! problem + domain + evidence
//!            │
//!            ▼
//!     ┌─────────────┐   candidates   ┌───────────┐
//!     │   matcher   │◀───────────────│ catalogue │
//!     └──────┬──────┘                └─────┬─────┘
//!            │ ranked matches              │ templates
//!            ▼                             ▼
//!     ┌─────────────┐                ┌───────────┐
//!     │  planner /  │◀───────────────│ selector  │
//!     │  strategy   │                └───────────┘
//!     └─────────────┘
//! ```
//!
//! Matching is a deterministic scoring function over lexical cues, static
//! metadata and simple statistics. There is no language model in here.

pub mod catalogue;
pub mod complexity;
pub mod condition;
pub mod evidence;
pub mod executor;
pub mod knowledge;
pub mod library;
pub mod loader;
pub mod matcher;
pub mod planner;
pub mod seed;
pub mod selector;
pub mod stats;
pub mod strategy;

pub use catalogue::Catalogue;
pub use executor::EchoExecutor;
pub use knowledge::StaticKnowledgeProvider;
pub use library::PatternLibrary;
pub use loader::{CatalogueFile, LoadSummary};
pub use matcher::MATCH_THRESHOLD;
pub use stats::{DomainCounts, HealthDetails, HealthReport, LibraryStats, PatternUsage};
pub use strategy::ReasoningStrategy;
