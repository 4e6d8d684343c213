use std::sync::OnceLock;

use regex::Regex;

/// `source` as a whole word, optional whitespace, then digits, also ending on a word boundary.
const SELF_REFERENCE_PATTERN: &str = r"(?i)\bsource\s*[0-9]+\b";

fn self_reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SELF_REFERENCE_PATTERN).expect("self-reference pattern compiles"))
}

/// Strip echoed self-references (`Source 2`, `source2`, `SOURCE 10`) from a citation excerpt.
///
/// Every occurrence is deleted, surrounding whitespace is trimmed, then any leading colons left
/// behind (`Source 2: text` -> `: text`) are removed. Nothing else in the text is touched, so
/// `Section 2` or `sources 3` survive. The result may be empty.
///
/// Removal repeats until nothing matches because deleting one occurrence can splice a new one
/// together (`source source 1 1`). Together with stripping every leading colon this makes the
/// function idempotent.
pub fn normalize_citation_text(text: &str) -> String {
    let re = self_reference_re();
    let mut cleaned = text.to_string();
    while re.is_match(&cleaned) {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }

    let mut rest = cleaned.trim();
    while let Some(stripped) = rest.strip_prefix(':') {
        rest = stripped.trim();
    }
    rest.to_string()
}
