//! Fairness auditor.
//!
//! Consumes a [`RankedResultSet`] and produces the Disparate Impact Ratio
//! (baseline and simulated-mitigation variants) and the Equal Opportunity
//! Difference for the Male/Female split of the table.
//!
//! Protected-attribute polarity is a fixed design convention, not derived
//! from data: Male is the privileged group (1), Female the unprivileged
//! group (0). It determines the direction of both metrics: DIR is the
//! unprivileged favorable rate over the privileged one, and EOD is
//! TPR(unprivileged) minus TPR(privileged).
//!
//! The auditor never fails past its boundary: batch-level faults
//! (sample-size, diversity, zero favorable outcomes) and any degenerate
//! arithmetic collapse to a [`FairnessReport`] carrying sentinel metrics
//! and a diagnostic string.

mod error;
mod types;

#[cfg(test)]
mod tests;

pub use error::AuditError;
pub use types::FairnessReport;

use tracing::{debug, info, warn};

use crate::constants::{
    DEFAULT_DIR, DEFAULT_EOD, FAVORABLE_THRESHOLD, MIN_AUDIT_SAMPLES, MITIGATED_THRESHOLD,
};
use crate::gender::GenderLabel;
use crate::ranking::RankedResultSet;

/// One record of the filtered audit population.
#[derive(Debug, Clone, Copy)]
struct AuditRecord {
    score: f32,
    privileged: bool,
}

/// Favorable/total counts for one protected group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GroupCounts {
    total: usize,
    favorable: usize,
}

impl GroupCounts {
    fn rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.favorable as f64 / self.total as f64)
    }
}

/// Computes group-fairness metrics over a ranked result table.
#[derive(Debug, Clone)]
pub struct FairnessAuditor {
    favorable_threshold: f32,
    mitigated_threshold: f32,
    min_samples: usize,
}

impl Default for FairnessAuditor {
    fn default() -> Self {
        Self {
            favorable_threshold: FAVORABLE_THRESHOLD,
            mitigated_threshold: MITIGATED_THRESHOLD,
            min_samples: MIN_AUDIT_SAMPLES,
        }
    }
}

impl FairnessAuditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audits a result table. Infallible by contract: degenerate inputs
    /// yield a report with `error` set and sentinel metrics.
    pub fn audit(&self, results: &RankedResultSet) -> FairnessReport {
        match self.compute(results) {
            Ok(report) => {
                info!(
                    dir_baseline = report.dir_baseline,
                    dir_mitigated = report.dir_mitigated,
                    eod = report.eod,
                    "Fairness audit complete"
                );
                report
            }
            Err(e) => {
                warn!(diagnostic = %e, "Fairness audit degenerate; reporting sentinel metrics");
                FairnessReport::degenerate(&e)
            }
        }
    }

    fn compute(&self, results: &RankedResultSet) -> Result<FairnessReport, AuditError> {
        // Unknown is excluded entirely; it is not a third group.
        let population: Vec<AuditRecord> = results
            .iter()
            .filter(|r| r.inferred_gender.is_known())
            .map(|r| AuditRecord {
                score: r.relevance_score,
                privileged: r.inferred_gender == GenderLabel::Male,
            })
            .collect();

        if population.len() < self.min_samples {
            return Err(AuditError::InsufficientSamples {
                found: population.len(),
                required: self.min_samples,
            });
        }

        let has_privileged = population.iter().any(|r| r.privileged);
        let has_unprivileged = population.iter().any(|r| !r.privileged);
        if !(has_privileged && has_unprivileged) {
            return Err(AuditError::InsufficientDiversity);
        }

        let favorable_total = population
            .iter()
            .filter(|r| r.score >= self.favorable_threshold)
            .count();
        if favorable_total == 0 {
            return Err(AuditError::ZeroFavorableOutcomes {
                threshold: self.favorable_threshold,
            });
        }

        debug!(
            population = population.len(),
            favorable = favorable_total,
            "Audit population assembled"
        );

        let dir_baseline = self.disparate_impact(&population, self.favorable_threshold);
        let dir_mitigated = self.disparate_impact(&population, self.mitigated_threshold);

        // Predictions and ground truth share the baseline label set, so
        // EOD is 0.0 whenever both groups have a ground-truth-favorable
        // record and the sentinel otherwise.
        let eod = self.equal_opportunity_difference(
            &population,
            self.favorable_threshold,
            self.favorable_threshold,
        );

        Ok(FairnessReport::computed(dir_baseline, dir_mitigated, eod))
    }

    /// P(favorable | unprivileged) / P(favorable | privileged) at the given
    /// binarization threshold. Zero denominators and non-finite results
    /// collapse to the sentinel rather than propagating NaN/inf.
    fn disparate_impact(&self, population: &[AuditRecord], threshold: f32) -> f64 {
        let (privileged, unprivileged) = count_groups(population, threshold);

        let ratio = match (unprivileged.rate(), privileged.rate()) {
            (Some(unpriv_rate), Some(priv_rate)) if priv_rate > 0.0 => unpriv_rate / priv_rate,
            _ => DEFAULT_DIR,
        };

        if ratio.is_finite() { ratio } else { DEFAULT_DIR }
    }

    /// TPR(unprivileged) minus TPR(privileged), restricted to records whose
    /// ground-truth label (at `truth_threshold`) is favorable; predictions
    /// are binarized at `predicted_threshold`. A group with no
    /// ground-truth-favorable records has no defined TPR, so the sentinel
    /// is reported instead.
    fn equal_opportunity_difference(
        &self,
        population: &[AuditRecord],
        predicted_threshold: f32,
        truth_threshold: f32,
    ) -> f64 {
        let tpr = |privileged: bool| -> Option<f64> {
            let mut positives = 0usize;
            let mut true_positives = 0usize;
            for record in population.iter().filter(|r| r.privileged == privileged) {
                if record.score >= truth_threshold {
                    positives += 1;
                    if record.score >= predicted_threshold {
                        true_positives += 1;
                    }
                }
            }
            (positives > 0).then(|| true_positives as f64 / positives as f64)
        };

        let difference = match (tpr(false), tpr(true)) {
            (Some(unpriv_tpr), Some(priv_tpr)) => unpriv_tpr - priv_tpr,
            _ => DEFAULT_EOD,
        };

        if difference.is_finite() {
            difference
        } else {
            DEFAULT_EOD
        }
    }
}

fn count_groups(population: &[AuditRecord], threshold: f32) -> (GroupCounts, GroupCounts) {
    let mut privileged = GroupCounts::default();
    let mut unprivileged = GroupCounts::default();

    for record in population {
        let group = if record.privileged {
            &mut privileged
        } else {
            &mut unprivileged
        };
        group.total += 1;
        if record.score >= threshold {
            group.favorable += 1;
        }
    }

    (privileged, unprivileged)
}
