use log::trace;

use crate::consts::OFFSET_PREFIX;
use crate::error::Miss;
use crate::models::{Resolution, ResolutionKind};
use crate::parsing::parse_hex;
use crate::traits::{ProjectView, TargetStrategy};

/// `+hex` file offsets. A leading `+` can only ever mean an offset.
#[derive(Debug, Default)]
pub struct OffsetResolver;

impl OffsetResolver {
    pub fn new() -> Self {
        Self
    }
}

impl TargetStrategy for OffsetResolver {
    fn name(&self) -> &'static str {
        "offset_resolver"
    }

    fn can_handle(&self, input: &str) -> bool {
        input.starts_with(OFFSET_PREFIX)
    }

    fn resolve(&self, input: &str, _anchor_offset: usize, project: &dyn ProjectView) -> Result<Resolution, Miss> {
        let digits = input.strip_prefix(OFFSET_PREFIX).unwrap_or(input);
        let offset = parse_hex(digits).ok_or(Miss::NotHex)? as usize;
        if offset >= project.file_data_length() {
            trace!("offset +{:06X} is past the end of the file", offset);
            return Err(Miss::OffsetOutOfRange);
        }
        Ok(Resolution {
            offset,
            kind: ResolutionKind::OffsetLiteral,
        })
    }

    fn commits(&self, _input: &str) -> bool {
        true
    }
}
