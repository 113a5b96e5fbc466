use factcheck_search::SearchResult;

use crate::summarizer::truncate_chars;

const RELEVANT_TERMS: &[&str] = &[
    "monk seal",
    "seal",
    "marine mammal",
    "species",
    "madeira",
    "conservation",
    "endangered",
    "breeding",
    "habitat",
    "marine biology",
    "wildlife",
    "monachus",
    "mediterranean",
    "endemic",
    "biodiversity",
    "coastal",
    "pup",
    "colony",
    "protected",
    "marine",
    "ocean",
];

// Software results leak in through words like "seal" and "rust".
const BLOCKED_TERMS: &[&str] = &[
    "framework",
    "programming",
    "code",
    "software",
    "api",
    "rust",
    "编程",
    "框架",
    "开发",
    "代码",
    "github",
    "npm",
    "cargo",
];

const SPECIES_TITLES: &[&str] = &["monk seal", "madeira monk seal", "mediterranean monk seal"];

/// Keep results about the species, in their original order.
///
/// Blocked terms drop a result outright. Otherwise a relevant term anywhere in the
/// title or body keeps it, as does a species name in the title.
#[must_use]
pub fn filter_results(results: Vec<SearchResult>, _question: &str) -> Vec<SearchResult> {
    results.into_iter().filter(is_relevant).collect()
}

fn is_relevant(result: &SearchResult) -> bool {
    let title = result.title.to_lowercase();
    let haystack = format!("{title} {}", result.body.to_lowercase());

    if BLOCKED_TERMS.iter().any(|t| haystack.contains(t)) {
        tracing::debug!(
            title = truncate_chars(&result.title, 50),
            "dropping off-topic search result"
        );
        return false;
    }

    RELEVANT_TERMS.iter().any(|t| haystack.contains(t))
        || SPECIES_TITLES.iter().any(|t| title.contains(t))
}
