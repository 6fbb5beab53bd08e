use crate::models::{Attributes, ParsedLabel, Symbol};
use crate::parsing;

/// Read-only queries the goto logic needs from a disassembly project.
///
/// `DisasmProject` is the in-memory implementation; tests can supply their own.
pub trait ProjectView {
    /// Valid offsets are `0..file_data_length()`
    fn file_data_length(&self) -> usize;

    /// Offset of the symbol whose stored label is exactly `name`
    fn find_label_offset_by_name(&self, name: &str) -> Option<usize>;

    /// Of the non-unique labels called `name`, the one the project considers
    /// the best match when referenced from `anchor_offset`
    fn find_best_non_unique_label(&self, name: &str, anchor_offset: usize) -> Option<Symbol>;

    fn address_to_offset(&self, anchor_offset: usize, address: u32, break_isolation: bool) -> Option<usize>;

    fn attributes_at(&self, offset: usize) -> Attributes;

    fn trim_and_validate_label(&self, raw: &str, non_unique_prefix: char) -> ParsedLabel {
        parsing::trim_and_validate_label(raw, non_unique_prefix)
    }
}
