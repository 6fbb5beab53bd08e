use log::debug;

use crate::consts::MAX_ADDRESS;
use crate::error::Miss;
use crate::models::{Resolution, ResolutionKind};
use crate::parsing::parse_address;
use crate::traits::{ProjectView, TargetStrategy};

/// Numeric addresses, mapped through the project's address map.
#[derive(Debug, Default)]
pub struct AddressResolver;

impl AddressResolver {
    pub fn new() -> Self {
        Self
    }
}

impl TargetStrategy for AddressResolver {
    fn name(&self) -> &'static str {
        "address_resolver"
    }

    fn can_handle(&self, _input: &str) -> bool {
        true
    }

    fn resolve(&self, input: &str, anchor_offset: usize, project: &dyn ProjectView) -> Result<Resolution, Miss> {
        let address = parse_address(input, MAX_ADDRESS).ok_or(Miss::NotAnAddress)?;
        let length = project.file_data_length();

        // Stay inside the anchor's region first so overlapping banks resolve locally.
        if let Some(offset) = project
            .address_to_offset(anchor_offset, address, false)
            .filter(|&offset| offset < length)
        {
            return Ok(Resolution {
                offset,
                kind: ResolutionKind::Address,
            });
        }

        // An isolated anchor region would otherwise hide most of the file.
        let offset = project
            .address_to_offset(anchor_offset, address, true)
            .filter(|&offset| offset < length)
            .ok_or(Miss::AddressNotMapped)?;
        debug!(
            "address ${:06X} only reachable from +{:06X} by ignoring isolation",
            address, anchor_offset
        );
        Ok(Resolution {
            offset,
            kind: ResolutionKind::AddressBrokenIsolation,
        })
    }
}
