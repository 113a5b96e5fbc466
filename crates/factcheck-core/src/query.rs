use crate::document::RetrievedDocument;

const SCANNED_DOCUMENTS: usize = 2;
const BASE_QUERY: &str = "Mediterranean monk seal";

const DOMAIN_TERMS: &[&str] = &[
    "monk seal",
    "mediterranean monk seal",
    "seal",
    "endemic",
    "madeira",
    "conservation",
    "endangered",
    "breeding",
    "pup",
    "habitat",
    "species",
    "population",
    "marine",
    "monachus",
    "monachus monachus",
    "coastal",
    "ocean",
    "marine mammal",
];

/// Build a domain-biased web query from the leading retrieved documents.
///
/// The question is accepted for signature stability but does not influence the query.
#[must_use]
pub fn optimize(_question: &str, documents: &[RetrievedDocument]) -> String {
    let lowered: Vec<String> = documents
        .iter()
        .take(SCANNED_DOCUMENTS)
        .map(|d| d.content.to_lowercase())
        .collect();
    let found: Vec<&str> = DOMAIN_TERMS
        .iter()
        .copied()
        .filter(|term| lowered.iter().any(|content| content.contains(term)))
        .collect();
    let has = |term: &str| found.contains(&term);

    let focus = if has("conservation") || has("endangered") {
        " conservation status"
    } else if has("breeding") {
        " breeding habitat"
    } else if has("madeira") {
        " Madeira island"
    } else {
        " marine mammal biology"
    };

    format!("{BASE_QUERY}{focus} seal species")
}

/// Query used when nothing was retrieved.
#[must_use]
pub fn fallback_query(question: &str) -> String {
    format!("{BASE_QUERY} {question} marine mammal")
}

/// Question-form query for backends that rank natural-language input.
#[must_use]
pub fn question_query(question: &str) -> String {
    format!("{BASE_QUERY} {question}")
}
