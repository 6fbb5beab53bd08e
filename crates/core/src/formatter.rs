use crate::consts::{ADDRESS_PREFIX, MAX_BANK0_ADDRESS, NON_ADDR_STR};
use crate::models::{FormatConfig, FormattedTarget};
use crate::traits::ProjectView;
use crate::utils::Formatter;

/// Echoes a resolved offset back as offset, address and label strings.
#[derive(Debug, Clone, Default)]
pub struct TargetFormatter {
    formatter: Formatter,
}

impl TargetFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            formatter: Formatter::new(config),
        }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn format(&self, offset: Option<usize>, project: &dyn ProjectView) -> FormattedTarget {
        let offset = match offset {
            Some(offset) if offset < project.file_data_length() => offset,
            _ => return FormattedTarget::default(),
        };

        let attributes = project.attributes_at(offset);
        let address_text = match attributes.address {
            Some(address) => self.formatter.format_address(address, address > MAX_BANK0_ADDRESS),
            None => NON_ADDR_STR.to_string(),
        };
        let address_text = format!("{}{}", ADDRESS_PREFIX, address_text);
        let label_text = attributes
            .symbol
            .map(|symbol| symbol.generate_display_label(&self.formatter))
            .unwrap_or_default();

        FormattedTarget {
            offset_text: self.formatter.format_offset24(offset),
            address_text,
            label_text,
        }
    }
}
