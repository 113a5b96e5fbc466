use crate::language::Language;

const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Header, knowledge-base summary and, when present, the web digest.
#[must_use]
pub fn assemble(kb_summary: &str, web_summary: Option<&str>, language: Language) -> String {
    let mut content = format!("{}{kb_summary}", language.header());
    if let Some(web) = web_summary.filter(|w| !w.is_empty()) {
        content.push_str(SECTION_SEPARATOR);
        content.push_str(web);
    }
    content
}
