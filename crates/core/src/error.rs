use thiserror::Error;

#[derive(Error, Debug)]
pub enum GotoError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse project: {0}")]
    ProjectParseError(#[from] serde_json::Error),
    #[error("Invalid address region: {0}")]
    InvalidRegion(String),
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),
}

/// Why a single resolution strategy (or the whole resolve) came up empty.
///
/// Only used for logging and tests; callers of `resolve` just see `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    #[error("input is empty")]
    Empty,
    #[error("offset is not a hexadecimal number")]
    NotHex,
    #[error("offset is outside the file")]
    OffsetOutOfRange,
    #[error("input is not a valid label")]
    InvalidLabel,
    #[error("no such label")]
    LabelNotFound,
    #[error("input is not an address")]
    NotAnAddress,
    #[error("address is not mapped to any offset")]
    AddressNotMapped,
}
