use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{GENERATED_SUFFIX, NON_UNIQUE_TAG_CHAR, NON_UNIQUE_TAG_DIGITS, UNCERTAIN_SUFFIX};
use crate::utils::Formatter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    #[default]
    Unique,
    /// Name shared by several declarations, told apart by distance to a reference offset
    NonUnique,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAnnotation {
    #[default]
    None,
    /// User flagged the label as a guess (`name?`)
    Uncertain,
    /// Label was created by the analyzer rather than typed in
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Stored label. Non-unique labels carry a `§` + offset tag so every stored label is unique.
    pub label: String,
    pub kind: LabelKind,
    pub annotation: LabelAnnotation,
}

impl Symbol {
    pub fn unique(name: &str, annotation: LabelAnnotation) -> Self {
        Self {
            label: name.to_string(),
            kind: LabelKind::Unique,
            annotation,
        }
    }

    pub fn non_unique(name: &str, offset: usize, annotation: LabelAnnotation) -> Self {
        Self {
            label: format!(
                "{}{}{:0width$X}",
                name,
                NON_UNIQUE_TAG_CHAR,
                offset,
                width = NON_UNIQUE_TAG_DIGITS
            ),
            kind: LabelKind::NonUnique,
            annotation,
        }
    }

    pub fn is_non_unique(&self) -> bool {
        self.kind == LabelKind::NonUnique
    }

    /// The name as the user knows it, without the uniquifier tag
    pub fn label_without_tag(&self) -> &str {
        if !self.is_non_unique() {
            return &self.label;
        }
        match self.label.rsplit_once(NON_UNIQUE_TAG_CHAR) {
            Some((name, _)) => name,
            None => &self.label,
        }
    }

    pub fn generate_display_label(&self, formatter: &Formatter) -> String {
        let mut display = String::with_capacity(self.label.len() + 2);
        if self.is_non_unique() {
            display.push(formatter.non_unique_label_prefix());
        }
        display.push_str(self.label_without_tag());
        match self.annotation {
            LabelAnnotation::None => {}
            LabelAnnotation::Uncertain => display.push(UNCERTAIN_SUFFIX),
            LabelAnnotation::Generated => display.push(GENERATED_SUFFIX),
        }
        display
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label_without_tag())
    }
}

/// Result of running raw text through the label-naming rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLabel {
    /// Input with the non-unique prefix and annotation suffix removed
    pub trimmed_name: String,
    pub is_valid: bool,
    pub is_len_valid: bool,
    pub is_first_char_valid: bool,
    pub has_non_unique_prefix: bool,
    pub annotation: LabelAnnotation,
}
