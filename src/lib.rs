//! Caliper library crate (used by the server and integration tests).
//!
//! Semantic candidate ranking with a gender-bias fairness audit. The
//! pipeline per screening run: extract text, embed the JD and each
//! candidate document, score cosine relevance, infer a protected
//! attribute, assign min-semantics ranks, then audit the table for
//! Disparate Impact and Equal Opportunity.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`CandidateDocument`], [`CandidateRecord`], [`RankedResultSet`] - Ranking I/O
//! - [`FairnessReport`], [`AuditError`] - Audit output
//! - [`ScreeningEngine`], [`ScreeningOutcome`] - Run orchestration
//!
//! ## Collaborator Interfaces
//! - [`TextEmbedder`] - embedding capability (inject at construction)
//! - [`GenderInference`] - protected-attribute inference strategy
//!
//! ## Implementations
//! - [`MiniLmEmbedder`], [`MiniLmConfig`] - BERT sentence embedder with a
//!   deterministic stub mode
//! - [`NameHeuristic`] - name/pronoun membership heuristic
//!
//! # Caveats
//!
//! Gender labels are inferred heuristically and are a best-effort proxy.
//! The "mitigated" Disparate Impact Ratio is a threshold-sensitivity
//! simulation, not the output of a retrained model. A [`FairnessReport`]
//! with `error` set carries display sentinels, not computed metrics.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod engine;
pub mod extraction;
pub mod fairness;
pub mod gateway;
pub mod gender;
pub mod ranking;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use embedding::{
    EmbeddingError, MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder,
    TextEmbedder,
};
pub use engine::{ScreeningEngine, ScreeningOutcome};
pub use extraction::{clean_text, extract_experience, extract_text};
pub use fairness::{AuditError, FairnessAuditor, FairnessReport};
pub use gateway::{HandlerState, create_router_with_state};
pub use gender::{GenderInference, GenderLabel, NameHeuristic};
pub use ranking::{CandidateDocument, CandidateRecord, RankedResultSet, RankingAggregator};
pub use scoring::{cosine_similarity, relevance_score};
