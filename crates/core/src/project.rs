use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use log::{debug, info};

use crate::error::GotoError;
use crate::memory::AddressMap;
use crate::models::{Attributes, LabelKind, ProjectFile, Symbol, SymbolDef};
use crate::parsing::validate_label;
use crate::traits::ProjectView;

/// In-memory disassembly project: file length, address map and symbol table.
#[derive(Debug, Clone)]
pub struct DisasmProject {
    file_data_length: usize,
    addr_map: AddressMap,
    /// One symbol per offset
    symbols: BTreeMap<usize, Symbol>,
    /// Stored (tagged) label -> offset
    label_offsets: HashMap<String, usize>,
}

impl DisasmProject {
    pub fn new(file_data_length: usize, addr_map: AddressMap) -> Self {
        Self {
            file_data_length,
            addr_map,
            symbols: BTreeMap::new(),
            label_offsets: HashMap::new(),
        }
    }

    pub fn from_project_file(file: &ProjectFile) -> Result<Self, GotoError> {
        let addr_map = AddressMap::new(file.file_data_length, &file.regions)?;
        let mut project = Self::new(file.file_data_length, addr_map);
        for def in &file.symbols {
            project.add_symbol(def)?;
        }
        info!(
            "Loaded project: {} bytes, {} regions, {} symbols",
            project.file_data_length,
            project.addr_map.region_count(),
            project.symbols.len()
        );
        Ok(project)
    }

    pub fn from_json(json: &str) -> Result<Self, GotoError> {
        let file: ProjectFile = serde_json::from_str(json)?;
        Self::from_project_file(&file)
    }

    pub fn load(path: &Path) -> Result<Self, GotoError> {
        debug!("Reading project from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn add_symbol(&mut self, def: &SymbolDef) -> Result<(), GotoError> {
        if !validate_label(&def.label) {
            return Err(GotoError::InvalidSymbol(format!("{:?} is not a valid label", def.label)));
        }
        if def.offset >= self.file_data_length {
            return Err(GotoError::InvalidSymbol(format!(
                "{} at +{:06X} is outside the file",
                def.label, def.offset
            )));
        }
        if let Some(existing) = self.symbols.get(&def.offset) {
            return Err(GotoError::InvalidSymbol(format!(
                "+{:06X} already has label {}",
                def.offset, existing
            )));
        }

        let symbol = match def.kind {
            LabelKind::Unique => Symbol::unique(&def.label, def.annotation),
            LabelKind::NonUnique => Symbol::non_unique(&def.label, def.offset, def.annotation),
        };
        if self.label_offsets.contains_key(&symbol.label) {
            return Err(GotoError::DuplicateLabel(def.label.clone()));
        }

        self.label_offsets.insert(symbol.label.clone(), def.offset);
        self.symbols.insert(def.offset, symbol);
        Ok(())
    }

    pub fn address_map(&self) -> &AddressMap {
        &self.addr_map
    }

    pub fn symbols(&self) -> impl Iterator<Item = (usize, &Symbol)> {
        self.symbols.iter().map(|(&offset, symbol)| (offset, symbol))
    }
}

impl ProjectView for DisasmProject {
    fn file_data_length(&self) -> usize {
        self.file_data_length
    }

    fn find_label_offset_by_name(&self, name: &str) -> Option<usize> {
        self.label_offsets.get(name).copied()
    }

    /// Closest declaration by absolute distance; ties go to the lower offset
    fn find_best_non_unique_label(&self, name: &str, anchor_offset: usize) -> Option<Symbol> {
        self.symbols
            .iter()
            .filter(|(_, symbol)| symbol.is_non_unique() && symbol.label_without_tag() == name)
            .min_by_key(|&(&offset, _)| (offset.abs_diff(anchor_offset), offset))
            .map(|(_, symbol)| symbol.clone())
    }

    fn address_to_offset(&self, anchor_offset: usize, address: u32, break_isolation: bool) -> Option<usize> {
        self.addr_map.address_to_offset(anchor_offset, address, break_isolation)
    }

    fn attributes_at(&self, offset: usize) -> Attributes {
        Attributes {
            address: self.addr_map.offset_to_address(offset),
            symbol: self.symbols.get(&offset).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LabelAnnotation;

    fn create_test_project() -> DisasmProject {
        DisasmProject::from_json(
            r#"{
                "file_data_length": 256,
                "regions": [ { "offset": 0, "length": 256, "address": 4096 } ],
                "symbols": [
                    { "label": "START", "offset": 16 },
                    { "label": "LOOP", "offset": 32, "kind": "non_unique" },
                    { "label": "LOOP", "offset": 80, "kind": "non_unique" },
                    { "label": "LOOP", "offset": 200, "kind": "non_unique", "annotation": "uncertain" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_label_lookup() {
        let project = create_test_project();
        assert_eq!(project.find_label_offset_by_name("START"), Some(0x10));
        assert_eq!(project.find_label_offset_by_name("LOOP"), None);
        assert_eq!(project.find_label_offset_by_name("LOOP§000050"), Some(0x50));
        assert_eq!(project.symbols().count(), 4);
    }

    #[test]
    fn test_best_non_unique_label() {
        let project = create_test_project();
        let best = |anchor| {
            project
                .find_best_non_unique_label("LOOP", anchor)
                .map(|symbol| project.find_label_offset_by_name(&symbol.label).unwrap())
        };
        assert_eq!(best(0), Some(0x20));
        assert_eq!(best(0x22), Some(0x20));
        assert_eq!(best(0x4F), Some(0x50));
        // 0x38 is equally far from 0x20 and 0x50
        assert_eq!(best(0x38), Some(0x20));
        assert_eq!(best(0xFF), Some(0xC8));
        assert!(project.find_best_non_unique_label("START", 0).is_none());
    }

    #[test]
    fn test_attributes() {
        let project = create_test_project();
        let attributes = project.attributes_at(0xC8);
        assert_eq!(attributes.address, Some(0x10C8));
        let symbol = attributes.symbol.unwrap();
        assert_eq!(symbol.label_without_tag(), "LOOP");
        assert_eq!(symbol.annotation, LabelAnnotation::Uncertain);
        assert!(project.attributes_at(0x11).symbol.is_none());
    }

    #[test]
    fn test_rejects_bad_symbols() {
        let mut project = DisasmProject::new(0x100, AddressMap::new(0x100, &[]).unwrap());
        let def = |label: &str, offset, kind| SymbolDef {
            label: label.to_string(),
            offset,
            kind,
            annotation: LabelAnnotation::None,
        };

        project.add_symbol(&def("START", 0x10, LabelKind::Unique)).unwrap();
        assert!(matches!(
            project.add_symbol(&def("START", 0x20, LabelKind::Unique)),
            Err(GotoError::DuplicateLabel(_))
        ));
        assert!(matches!(
            project.add_symbol(&def("OTHER", 0x10, LabelKind::Unique)),
            Err(GotoError::InvalidSymbol(_))
        ));
        assert!(matches!(
            project.add_symbol(&def("FAR", 0x100, LabelKind::Unique)),
            Err(GotoError::InvalidSymbol(_))
        ));
        assert!(matches!(
            project.add_symbol(&def("9bad", 0x30, LabelKind::Unique)),
            Err(GotoError::InvalidSymbol(_))
        ));
        project.add_symbol(&def("START", 0x40, LabelKind::NonUnique)).unwrap();
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            DisasmProject::from_json("{ \"regions\": [] }"),
            Err(GotoError::ProjectParseError(_))
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_huge_region_offset_is_rejected() {
        let json = r#"{
            "file_data_length": 256,
            "regions": [ { "offset": 18446744073709551615, "length": 2, "address": 0 } ]
        }"#;
        assert!(matches!(
            DisasmProject::from_json(json),
            Err(GotoError::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            DisasmProject::load(Path::new("/nonexistent/project.json")),
            Err(GotoError::FileReadError(_))
        ));
    }
}
