//! Screening engine.
//!
//! One engine per process: it receives the embedding capability at
//! construction (lifecycle is the caller's responsibility: initialize
//! once, reuse, dispose) and runs the full rank-then-audit pipeline per
//! user-initiated screening run. Runs are single-threaded and share no
//! mutable state.


use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::embedding::{EmbeddingError, TextEmbedder};
use crate::fairness::{FairnessAuditor, FairnessReport};
use crate::gender::{GenderInference, NameHeuristic};
use crate::ranking::{CandidateDocument, RankedResultSet, RankingAggregator};

/// Externally visible output of one screening run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub results: RankedResultSet,
    pub report: FairnessReport,
}

/// Ranks candidates against a JD and audits the result for gender bias.
pub struct ScreeningEngine<E, G = NameHeuristic> {
    aggregator: RankingAggregator<E, G>,
    auditor: FairnessAuditor,
}

impl<E> ScreeningEngine<E, NameHeuristic>
where
    E: TextEmbedder,
{
    /// Engine with the default name-heuristic gender inference.
    pub fn new(embedder: Arc<E>) -> Self {
        Self::with_inference(embedder, NameHeuristic::new())
    }
}

impl<E, G> ScreeningEngine<E, G>
where
    E: TextEmbedder,
    G: GenderInference,
{
    /// Engine with a custom gender-inference strategy.
    pub fn with_inference(embedder: Arc<E>, inference: G) -> Self {
        Self {
            aggregator: RankingAggregator::new(embedder, inference),
            auditor: FairnessAuditor::new(),
        }
    }

    /// Runs one screening pass: rank, then audit the ranked table.
    ///
    /// Per-candidate faults degrade individual records; audit-level faults
    /// degrade the report. The only `Err` out of here is a JD embedding
    /// failure, which is a setup-level fault.
    pub fn screen(
        &self,
        jd_text: &str,
        documents: &[CandidateDocument],
    ) -> Result<ScreeningOutcome, EmbeddingError> {
        info!(candidates = documents.len(), "Screening run started");

        let results = self.aggregator.rank(jd_text, documents)?;
        let report = self.auditor.audit(&results);

        Ok(ScreeningOutcome { results, report })
    }
}
