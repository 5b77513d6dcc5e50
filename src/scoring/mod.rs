//! Relevance scoring between a job description and a candidate document.
//!
//! Scores are cosine similarity over embedding vectors, clamped to `[0, 1]`
//! and rounded to [`SCORE_DECIMALS`](crate::constants::SCORE_DECIMALS)
//! digits so repeated runs over identical inputs produce identical tables.


use crate::constants::SCORE_DECIMALS;

/// Cosine similarity between two vectors.
///
/// Returns `0.0` for empty or mismatched-dimension inputs rather than
/// erroring; an absent embedding means "no usable signal", not a fault.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Relevance score for a JD/resume embedding pair.
///
/// Cosine similarity clamped to `[0, 1]` and rounded to a stable precision.
/// Symmetric in its arguments and deterministic for identical inputs.
#[inline]
pub fn relevance_score(jd_vec: &[f32], resume_vec: &[f32]) -> f32 {
    let raw = cosine_similarity(jd_vec, resume_vec);
    round_score(raw.clamp(0.0, 1.0))
}

/// Rounds a score to [`SCORE_DECIMALS`] decimal digits.
#[inline]
pub fn round_score(score: f32) -> f32 {
    let factor = 10f32.powi(SCORE_DECIMALS as i32);
    (score * factor).round() / factor
}
