use log::{debug, trace};

use crate::error::Miss;
use crate::models::{Resolution, ResolutionKind};
use crate::traits::{ProjectView, TargetStrategy};

/// Symbolic labels, unique or (with the non-unique prefix) non-unique.
#[derive(Debug)]
pub struct LabelResolver {
    non_unique_prefix: char,
}

impl LabelResolver {
    pub fn new(non_unique_prefix: char) -> Self {
        Self { non_unique_prefix }
    }
}

impl TargetStrategy for LabelResolver {
    fn name(&self) -> &'static str {
        "label_resolver"
    }

    fn can_handle(&self, _input: &str) -> bool {
        true
    }

    fn resolve(&self, input: &str, anchor_offset: usize, project: &dyn ProjectView) -> Result<Resolution, Miss> {
        let parsed = project.trim_and_validate_label(input, self.non_unique_prefix);
        if !parsed.is_valid {
            trace!("{:?} is not a valid label", input);
            return Err(Miss::InvalidLabel);
        }

        let (offset, kind) = if parsed.has_non_unique_prefix {
            let symbol = project
                .find_best_non_unique_label(&parsed.trimmed_name, anchor_offset)
                .ok_or(Miss::LabelNotFound)?;
            debug!(
                "best match for non-unique {:?} near +{:06X} is {:?}",
                parsed.trimmed_name, anchor_offset, symbol.label
            );
            let offset = project
                .find_label_offset_by_name(&symbol.label)
                .ok_or(Miss::LabelNotFound)?;
            (offset, ResolutionKind::NonUniqueLabel)
        } else {
            let offset = project
                .find_label_offset_by_name(&parsed.trimmed_name)
                .ok_or(Miss::LabelNotFound)?;
            (offset, ResolutionKind::Label)
        };

        if offset >= project.file_data_length() {
            return Err(Miss::LabelNotFound);
        }
        Ok(Resolution { offset, kind })
    }
}
