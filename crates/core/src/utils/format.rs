use crate::consts::{BANK_SEPARATOR, MAX_BANK0_ADDRESS};
use crate::models::FormatConfig;

/// Renders numbers the way the rest of the UI shows them
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn non_unique_label_prefix(&self) -> char {
        self.config.non_unique_label_prefix
    }

    pub fn format_hex(&self, value: u64, digits: usize) -> String {
        if self.config.upper_hex_digits {
            format!("{:0width$X}", value, width = digits)
        } else {
            format!("{:0width$x}", value, width = digits)
        }
    }

    /// `+` followed by at least six hex digits, e.g. `+00a000`
    pub fn format_offset24(&self, offset: usize) -> String {
        format!("+{}", self.format_hex(offset as u64, 6))
    }

    /// Four hex digits, or `BB/AAAA` when `show_bank` is set
    pub fn format_address(&self, address: u32, show_bank: bool) -> String {
        if show_bank {
            format!(
                "{}{}{}",
                self.format_hex(u64::from(address >> 16), 2),
                BANK_SEPARATOR,
                self.format_hex(u64::from(address & MAX_BANK0_ADDRESS), 4)
            )
        } else {
            self.format_hex(u64::from(address), 4)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_offset24() {
        let formatter = Formatter::default();
        assert_eq!(formatter.format_offset24(0), "+000000");
        assert_eq!(formatter.format_offset24(0xABCD), "+00ABCD");
        assert_eq!(formatter.format_offset24(0x123_4567), "+1234567");
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_format_offset24_keeps_high_bits() {
        let formatter = Formatter::default();
        assert_eq!(formatter.format_offset24(0x1_0000_0010), "+100000010");
    }

    #[test]
    fn test_format_address() {
        let formatter = Formatter::default();
        assert_eq!(formatter.format_address(0x12, false), "0012");
        assert_eq!(formatter.format_address(0xC000, false), "C000");
        assert_eq!(formatter.format_address(0x01_2345, true), "01/2345");
    }

    #[test]
    fn test_lower_case_hex() {
        let formatter = Formatter::new(FormatConfig {
            upper_hex_digits: false,
            ..Default::default()
        });
        assert_eq!(formatter.format_offset24(0xBEEF), "+00beef");
        assert_eq!(formatter.format_address(0xfe_dcba, true), "fe/dcba");
    }
}
