use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::ScreeningOutcome;
use crate::fairness::FairnessReport;
use crate::ranking::RankedResultSet;

/// One candidate document in a screening request. `text` is the already
/// extracted plain text; clients upload binary documents to the extraction
/// collaborator, not to this endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateUpload {
    pub identifier: String,
    pub text: String,
}

/// Screening request: one JD against a batch of candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenRequest {
    pub job_description: String,
    pub candidates: Vec<CandidateUpload>,
}

/// Screening response: ranked table plus the fairness KPI triple.
///
/// When `fairness.error` is set the metric values are display sentinels,
/// not computed results; dashboards render them as "Not Available".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenResponse {
    pub run_id: Uuid,
    pub results: RankedResultSet,
    pub fairness: FairnessReport,
}

impl ScreenResponse {
    pub fn from_outcome(outcome: ScreeningOutcome) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            results: outcome.results,
            fairness: outcome.report,
        }
    }
}
