use std::fmt;

use serde::{Deserialize, Serialize};

use super::Symbol;
use crate::consts::DEFAULT_NON_UNIQUE_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Character the user types in front of a non-unique label, e.g. `@loop`
    pub non_unique_label_prefix: char,
    /// Render hex digits as `A-F` instead of `a-f`
    pub upper_hex_digits: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            non_unique_label_prefix: DEFAULT_NON_UNIQUE_PREFIX,
            upper_hex_digits: true,
        }
    }
}

/// Which interpretation of the input produced the offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    OffsetLiteral,
    Label,
    NonUniqueLabel,
    Address,
    /// Address only reachable after ignoring region isolation
    AddressBrokenIsolation,
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolutionKind::OffsetLiteral => "offset",
            ResolutionKind::Label => "label",
            ResolutionKind::NonUniqueLabel => "non-unique label",
            ResolutionKind::Address => "address",
            ResolutionKind::AddressBrokenIsolation => "address (isolation ignored)",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// File offset, always inside `[0, file_data_length)`
    pub offset: usize,
    pub kind: ResolutionKind,
}

/// Display strings for a resolved target. All empty when nothing resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTarget {
    pub offset_text: String,
    pub address_text: String,
    pub label_text: String,
}

impl FormattedTarget {
    pub fn is_empty(&self) -> bool {
        self.offset_text.is_empty() && self.address_text.is_empty() && self.label_text.is_empty()
    }
}

/// Per-offset attributes the project exposes to the formatter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// `None` when the offset sits in a non-addressable area
    pub address: Option<u32>,
    pub symbol: Option<Symbol>,
}
