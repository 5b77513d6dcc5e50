//! Ranking aggregator.
//!
//! Per candidate: embed → score against the JD → extract experience →
//! infer gender, then assign ranks by descending relevance with "min" tie
//! semantics. A single candidate's embedding failure degrades that record
//! to documented fallback values; it never aborts the batch. Only a JD
//! embedding failure (setup-level fault) is propagated.

mod types;


pub use types::{CandidateDocument, CandidateRecord, RankedResultSet};

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::embedding::{EmbeddingError, TextEmbedder};
use crate::extraction::extract_experience;
use crate::gender::{GenderInference, GenderLabel};
use crate::scoring::relevance_score;

/// Builds a [`RankedResultSet`] from uploaded candidate documents.
pub struct RankingAggregator<E, G> {
    embedder: Arc<E>,
    inference: G,
}

impl<E, G> RankingAggregator<E, G>
where
    E: TextEmbedder,
    G: GenderInference,
{
    pub fn new(embedder: Arc<E>, inference: G) -> Self {
        Self {
            embedder,
            inference,
        }
    }

    /// Ranks `documents` against `jd_text`.
    ///
    /// Candidates are processed independently and order-insensitively; the
    /// final ordering depends only on score values and submission order,
    /// never on processing order.
    pub fn rank(
        &self,
        jd_text: &str,
        documents: &[CandidateDocument],
    ) -> Result<RankedResultSet, EmbeddingError> {
        let jd_vec = self.embedder.embed(jd_text)?;
        if jd_vec.is_empty() {
            warn!("Job description produced no embedding; all relevance scores will be 0");
        }

        let mut records: Vec<CandidateRecord> = documents
            .iter()
            .map(|doc| self.evaluate(doc, &jd_vec))
            .collect();

        sort_and_rank(&mut records);

        info!(
            candidates = records.len(),
            "Ranking complete"
        );

        Ok(RankedResultSet::new(records))
    }

    /// Evaluates a single candidate. Infallible: an embedding fault yields
    /// the documented fallback record (score 0, gender Unknown, no
    /// experience) with rank filled in later.
    fn evaluate(&self, doc: &CandidateDocument, jd_vec: &[f32]) -> CandidateRecord {
        let resume_vec = match self.embedder.embed(&doc.text) {
            Ok(vec) => vec,
            Err(e) => {
                warn!(
                    identifier = %doc.identifier,
                    error = %e,
                    "Embedding failed for candidate; recording fallback values"
                );
                return CandidateRecord {
                    identifier: doc.identifier.clone(),
                    relevance_score: 0.0,
                    inferred_gender: GenderLabel::Unknown,
                    experience_years: None,
                    rank: 0,
                };
            }
        };

        let score = relevance_score(jd_vec, &resume_vec);
        let experience_years = extract_experience(&doc.text);
        let inferred_gender = self.inference.infer(&doc.identifier, &doc.text);

        debug!(
            identifier = %doc.identifier,
            score,
            gender = %inferred_gender,
            experience = ?experience_years,
            "Candidate evaluated"
        );

        CandidateRecord {
            identifier: doc.identifier.clone(),
            relevance_score: score,
            inferred_gender,
            experience_years,
            rank: 0,
        }
    }
}

/// Sorts records by descending score (stable, so equal scores keep
/// submission order) and assigns 1-indexed "min" ranks: equal scores share
/// a rank and the next distinct score resumes at its position count.
/// Scores `[0.9, 0.9, 0.7]` yield ranks `[1, 1, 3]`.
fn sort_and_rank(records: &mut [CandidateRecord]) {
    records.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut current_rank = 1u32;
    let mut previous_score: Option<f32> = None;

    for (position, record) in records.iter_mut().enumerate() {
        if previous_score != Some(record.relevance_score) {
            current_rank = position as u32 + 1;
            previous_score = Some(record.relevance_score);
        }
        record.rank = current_rank;
    }
}
