use serde::{Deserialize, Serialize};

use super::error::AuditError;
use crate::constants::{DEFAULT_DIR, DEFAULT_EOD};

/// Group-fairness metrics for one screening run.
///
/// `error` is set if and only if the metrics were not computed; in that
/// case the three values carry the "perfect fairness" sentinel defaults
/// (DIR = 1.0, EOD = 0.0) for display purposes only. Callers must treat a
/// report with `error` set as "not available", never as evidence of
/// fairness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessReport {
    /// Disparate Impact Ratio at the baseline favorable threshold.
    /// 1.0 denotes parity; below 0.8 violates the four-fifths rule;
    /// above 1.0 denotes reverse disparity.
    pub dir_baseline: f64,

    /// Disparate Impact Ratio recomputed at the alternate threshold. This
    /// is a simulated mitigation (threshold-sensitivity probe), not the
    /// output of a retrained model.
    pub dir_mitigated: f64,

    /// Equal Opportunity Difference: TPR(unprivileged) minus
    /// TPR(privileged) over ground-truth-favorable records. 0.0 denotes
    /// parity.
    pub eod: f64,

    /// Human-readable diagnostic when the audit could not run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FairnessReport {
    /// A computed report.
    pub fn computed(dir_baseline: f64, dir_mitigated: f64, eod: f64) -> Self {
        Self {
            dir_baseline,
            dir_mitigated,
            eod,
            error: None,
        }
    }

    /// The degenerate report: sentinel metrics plus the diagnostic that
    /// explains why nothing was computed.
    pub fn degenerate(error: &AuditError) -> Self {
        Self {
            dir_baseline: DEFAULT_DIR,
            dir_mitigated: DEFAULT_DIR,
            eod: DEFAULT_EOD,
            error: Some(error.to_string()),
        }
    }

    /// Returns `true` if the metrics were actually computed.
    pub fn is_computed(&self) -> bool {
        self.error.is_none()
    }
}
