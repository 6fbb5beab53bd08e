use std::sync::OnceLock;

use regex::Regex;

use crate::consts::{LABEL_MAX_LEN, LABEL_MIN_LEN, LABEL_PATTERN, UNCERTAIN_SUFFIX};
use crate::models::{LabelAnnotation, ParsedLabel};

fn label_regex() -> &'static Regex {
    static LABEL_RE: OnceLock<Regex> = OnceLock::new();
    LABEL_RE.get_or_init(|| Regex::new(LABEL_PATTERN).unwrap())
}

/// Checks a bare label name against the naming rules.
///
/// Returns `(is_valid, is_len_valid, is_first_char_valid)`.
pub fn validate_label_detail(label: &str) -> (bool, bool, bool) {
    let is_len_valid = (LABEL_MIN_LEN..=LABEL_MAX_LEN).contains(&label.len());
    let is_first_char_valid = label
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let is_valid = is_len_valid && is_first_char_valid && label_regex().is_match(label);
    (is_valid, is_len_valid, is_first_char_valid)
}

pub fn validate_label(label: &str) -> bool {
    validate_label_detail(label).0
}

/// Strips the non-unique prefix and any annotation suffix from user input,
/// then validates what is left.
pub fn trim_and_validate_label(raw: &str, non_unique_prefix: char) -> ParsedLabel {
    let mut parsed = ParsedLabel {
        trimmed_name: raw.to_string(),
        is_valid: false,
        is_len_valid: false,
        is_first_char_valid: false,
        has_non_unique_prefix: false,
        annotation: LabelAnnotation::None,
    };
    if raw.is_empty() {
        return parsed;
    }

    let mut name = raw;
    if let Some(rest) = name.strip_prefix(non_unique_prefix) {
        name = rest;
        parsed.has_non_unique_prefix = true;
    }
    if let Some(rest) = name.strip_suffix(UNCERTAIN_SUFFIX) {
        name = rest;
        parsed.annotation = LabelAnnotation::Uncertain;
    }

    let (is_valid, is_len_valid, is_first_char_valid) = validate_label_detail(name);
    parsed.trimmed_name = name.to_string();
    parsed.is_valid = is_valid;
    parsed.is_len_valid = is_len_valid;
    parsed.is_first_char_valid = is_first_char_valid;
    parsed
}
