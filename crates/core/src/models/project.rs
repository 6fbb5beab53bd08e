use serde::{Deserialize, Serialize};

use super::{LabelAnnotation, LabelKind};

/// On-disk description of a disassembly project, as read by `DisasmProject::load`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Length of the file data; valid offsets are `0..file_data_length`
    pub file_data_length: usize,
    /// Top-level address regions. Anything outside them is non-addressable.
    #[serde(default)]
    pub regions: Vec<RegionDef>,
    #[serde(default)]
    pub symbols: Vec<SymbolDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDef {
    pub offset: usize,
    pub length: usize,
    /// Address of the first byte; `None` for a non-addressable region
    #[serde(default)]
    pub address: Option<u32>,
    /// Region cannot be entered by searches starting outside it
    #[serde(default)]
    pub disallow_inward: bool,
    /// Searches starting inside the region stop at its boundary
    #[serde(default)]
    pub disallow_outward: bool,
    #[serde(default)]
    pub children: Vec<RegionDef>,
}

impl RegionDef {
    pub fn new(offset: usize, length: usize, address: u32) -> Self {
        Self {
            offset,
            length,
            address: Some(address),
            ..Default::default()
        }
    }

    /// One past the last byte, or `None` when that does not fit in a `usize`
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.length)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDef {
    /// Plain label name, no prefix or annotation characters
    pub label: String,
    pub offset: usize,
    #[serde(default)]
    pub kind: LabelKind,
    #[serde(default)]
    pub annotation: LabelAnnotation,
}
