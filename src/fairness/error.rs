use thiserror::Error;

/// Batch-level audit faults. All of these degrade to the degenerate
/// [`FairnessReport`](super::FairnessReport) at the auditor boundary; they
/// are never raised to callers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuditError {
    /// Fewer known-gender records than the audit minimum.
    #[error(
        "not enough valid samples for fairness analysis: {found} known-gender records (minimum {required})"
    )]
    InsufficientSamples { found: usize, required: usize },

    /// Only one gender group remained after filtering out Unknown.
    #[error("not enough gender diversity: only one gender group present after filtering")]
    InsufficientDiversity,

    /// No record cleared the favorable threshold; the rate ratio is
    /// meaningless.
    #[error(
        "zero candidates scored at or above the favorable threshold ({threshold}); cannot compute metrics"
    )]
    ZeroFavorableOutcomes { threshold: f32 },
}
