//! Go-to target resolution for 6502/65816 disassembly projects.
//!
//! Input such as `+1a00` (file offset), `MAIN_LOOP` / `@loop` (labels) or
//! `$C000` / `$01/2000` (addresses) is turned into a file offset, and a
//! resolved offset can be echoed back as offset, address and label text.

use std::path::Path;

pub mod consts;
pub mod error;
pub mod formatter;
pub mod memory;
pub mod models;
pub mod parsing;
pub mod project;
pub mod resolvers;
pub mod session;
pub mod traits;
pub mod utils;

pub use error::{GotoError, Miss};
pub use formatter::TargetFormatter;
pub use memory::AddressMap;
pub use models::{
    Attributes, FormatConfig, FormattedTarget, LabelAnnotation, LabelKind, ParsedLabel, ProjectFile,
    RegionDef, Resolution, ResolutionKind, Symbol, SymbolDef,
};
pub use project::DisasmProject;
pub use resolvers::TargetResolver;
pub use session::{GotoSession, SessionState};
pub use traits::{ProjectView, TargetStrategy};
pub use utils::Formatter;

/// Resolves goto input against a project, `None` if nothing matches
pub fn resolve_target(
    raw: &str,
    anchor_offset: usize,
    project: &dyn ProjectView,
    config: &FormatConfig,
) -> Option<usize> {
    TargetResolver::new(config).resolve(raw, anchor_offset, project)
}

pub fn format_target(offset: Option<usize>, project: &dyn ProjectView, config: &FormatConfig) -> FormattedTarget {
    TargetFormatter::new(config.clone()).format(offset, project)
}

/// Loads a JSON project description from disk
pub fn load_project(path: &Path) -> Result<DisasmProject, GotoError> {
    DisasmProject::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_resolve_format() {
        let path = std::env::temp_dir().join(format!("goto-target-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{
                "file_data_length": 64,
                "regions": [ { "offset": 0, "length": 64, "address": 2048 } ],
                "symbols": [ { "label": "ENTRY", "offset": 4 } ]
            }"#,
        )
        .unwrap();

        let project = load_project(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let config = FormatConfig::default();
        let offset = resolve_target("ENTRY", 0, &project, &config);
        assert_eq!(offset, Some(4));

        let formatted = format_target(offset, &project, &config);
        assert_eq!(formatted.offset_text, "+000004");
        assert_eq!(formatted.address_text, "$0804");
        assert_eq!(formatted.label_text, "ENTRY");
    }
}
