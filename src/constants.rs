//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.
//! The fairness thresholds in particular are a fixed modeling convention
//! (see [`crate::fairness`]) and are deliberately not runtime-configurable.

/// Output dimension of the sentence embedder (MiniLM-class encoder).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the embedding model per document.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Relevance scores at or above this value count as a favorable outcome.
pub const FAVORABLE_THRESHOLD: f32 = 0.50;

/// Alternate binarization threshold used for the simulated-mitigation pass.
///
/// This is a threshold-sensitivity probe, not a retrained classifier; the
/// "mitigated" Disparate Impact Ratio is the same ratio recomputed with
/// favorable defined as `score >= MITIGATED_THRESHOLD`.
pub const MITIGATED_THRESHOLD: f32 = 0.45;

/// Minimum known-gender records required before the audit will run.
pub const MIN_AUDIT_SAMPLES: usize = 5;

/// Sentinel Disparate Impact Ratio reported when metrics cannot be computed.
/// A report carrying this value together with a diagnostic means
/// "not computed", never "perfectly fair".
pub const DEFAULT_DIR: f64 = 1.0;

/// Sentinel Equal Opportunity Difference for the degenerate case.
pub const DEFAULT_EOD: f64 = 0.0;

/// Decimal digits relevance scores are rounded to, for reproducibility.
pub const SCORE_DECIMALS: u32 = 4;

/// Leading window of a document scanned for known given names (bytes).
pub const NAME_SCAN_WINDOW: usize = 500;
