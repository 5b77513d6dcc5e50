//! Gender inference from resume text.
//!
//! This is a deliberately low-precision heuristic proxy: it reads the
//! candidate's likely first name (and, failing that, pronoun/honorific
//! keywords) against fixed membership sets. It feeds the fairness audit,
//! whose validity depends on this protected-attribute assignment, so the
//! limits of the heuristic are part of the contract: absence of signal
//! always resolves to [`GenderLabel::Unknown`], never to a guess.
//!
//! The strategy sits behind [`GenderInference`] so a better inference
//! backend (e.g. a probabilistic name-gender model) can be substituted
//! without touching the auditor.

mod names;


use serde::{Deserialize, Serialize};

use crate::constants::NAME_SCAN_WINDOW;
use names::{FEMALE_GIVEN_NAMES, FEMALE_KEYWORDS, MALE_GIVEN_NAMES, MALE_KEYWORDS};
use names::{is_female_name, is_male_name};

/// Inferred gender of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderLabel {
    /// First name or keyword matched the male set.
    Male,
    /// First name or keyword matched the female set.
    Female,
    /// No signal; excluded from the fairness computation entirely.
    Unknown,
}

impl GenderLabel {
    /// Returns `true` for labels that participate in the fairness audit.
    pub fn is_known(&self) -> bool {
        !matches!(self, GenderLabel::Unknown)
    }

    /// Stable display name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderLabel::Male => "Male",
            GenderLabel::Female => "Female",
            GenderLabel::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for GenderLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-capability interface for protected-attribute inference.
pub trait GenderInference: Send + Sync {
    /// Infers a gender label from a filename-derived fragment and the full
    /// document text. Pure; must never fail.
    fn infer(&self, name_fragment: &str, full_text: &str) -> GenderLabel;
}

/// Name-membership heuristic, most-confident-signal-first.
///
/// 1. First alphabetic token of the first non-empty line (resumes normally
///    lead with the candidate's name), then the filename fragment, looked up
///    in the fixed given-name sets.
/// 2. Substring scan of the leading window of the document for any known
///    name. The female list is checked first; first list wins when names
///    from both appear in the window.
/// 3. Pronoun/honorific keyword scan over the whole lowercased text,
///    female keywords first.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameHeuristic;

impl NameHeuristic {
    pub fn new() -> Self {
        Self
    }
}

impl GenderInference for NameHeuristic {
    fn infer(&self, name_fragment: &str, full_text: &str) -> GenderLabel {
        if full_text.is_empty() && name_fragment.is_empty() {
            return GenderLabel::Unknown;
        }

        for candidate in [leading_name(full_text), leading_name(name_fragment)]
            .into_iter()
            .flatten()
        {
            if is_female_name(&candidate) {
                return GenderLabel::Female;
            }
            if is_male_name(&candidate) {
                return GenderLabel::Male;
            }
        }

        let text_lower = full_text.to_lowercase();

        if let Some(label) = scan_window(&text_lower) {
            return label;
        }

        if let Some(label) = scan_keywords(&text_lower) {
            return label;
        }

        GenderLabel::Unknown
    }
}

/// First maximal ASCII-alphabetic run of the first non-empty line,
/// lowercased. `"Dr. Emma Watson"` yields `"dr"`; the window scan covers
/// that miss.
fn leading_name(text: &str) -> Option<String> {
    let first_line = text.trim().lines().next()?;

    let lowered = first_line.to_lowercase();
    let start = lowered.find(|c: char| c.is_ascii_alphabetic())?;
    let run: String = lowered[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    if run.is_empty() { None } else { Some(run) }
}

/// Substring scan of the leading window for any known given name.
/// Female set first (documented tie-break).
fn scan_window(text_lower: &str) -> Option<GenderLabel> {
    let end = text_lower
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&i| i <= NAME_SCAN_WINDOW)
        .last()
        .unwrap_or(0);
    let window = &text_lower[..end];

    if FEMALE_GIVEN_NAMES.iter().any(|name| window.contains(name)) {
        return Some(GenderLabel::Female);
    }
    if MALE_GIVEN_NAMES.iter().any(|name| window.contains(name)) {
        return Some(GenderLabel::Male);
    }
    None
}

/// Pronoun/honorific fallback over the whole text, female list first.
fn scan_keywords(text_lower: &str) -> Option<GenderLabel> {
    if FEMALE_KEYWORDS.iter().any(|kw| text_lower.contains(kw)) {
        return Some(GenderLabel::Female);
    }
    if MALE_KEYWORDS.iter().any(|kw| text_lower.contains(kw)) {
        return Some(GenderLabel::Male);
    }
    None
}
