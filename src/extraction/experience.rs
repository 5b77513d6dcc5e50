//! Experience-years heuristic.

use std::sync::LazyLock;

use regex::Regex;

/// Matches "5 years of", "10+ years in", "7 years experience", "3 yr exp"
/// style phrasings. The qualifier keyword keeps bare durations ("2 years
/// warranty") from matching at this confidence level.
static QUALIFIED_YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\+?\s*years?\s*(?:of|in|exp|experience)")
        .expect("qualified-years regex is valid")
});

/// Fallback: any standalone "<1-2 digits> years" mention.
static BARE_YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\s*years?\b").expect("bare-years regex is valid"));

/// Extracts years of experience from resume text.
///
/// Returns `None` when neither pattern matches. "Not found" is reported
/// distinctly from a parsed zero; callers may substitute a display
/// placeholder, but never a fabricated value.
pub fn extract_experience(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }

    let text_lower = text.to_lowercase();

    if let Some(captures) = QUALIFIED_YEARS.captures(&text_lower)
        && let Ok(years) = captures[1].parse::<u32>()
    {
        return Some(years);
    }

    BARE_YEARS
        .captures(&text_lower)
        .and_then(|captures| captures[1].parse::<u32>().ok())
}
