use super::parse_hex;
use crate::consts::{ADDRESS_PREFIX, BANK_SEPARATOR, MAX_BANK0_ADDRESS};

/// Parses a hex address such as `1000`, `$C000` or `$01/2345`.
///
/// The result must be below `max`. A bank part is limited to one byte and
/// the part after the separator to 16 bits.
pub fn parse_address(input: &str, max: u32) -> Option<u32> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix(ADDRESS_PREFIX).unwrap_or(trimmed);

    let address = match trimmed.split_once(BANK_SEPARATOR) {
        Some((bank, low)) => {
            let bank = parse_hex(bank)?;
            let low = parse_hex(low)?;
            if bank > 0xFF || low > MAX_BANK0_ADDRESS {
                return None;
            }
            (bank << 16) | low
        }
        None => parse_hex(trimmed)?,
    };

    (address < max).then_some(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_ADDRESS;

    #[test]
    fn test_plain_and_prefixed() {
        assert_eq!(parse_address("1000", MAX_ADDRESS), Some(0x1000));
        assert_eq!(parse_address("$c000", MAX_ADDRESS), Some(0xC000));
        assert_eq!(parse_address("  $FFFF ", MAX_ADDRESS), Some(0xFFFF));
        assert_eq!(parse_address("12ABCD", MAX_ADDRESS), Some(0x12ABCD));
        assert_eq!(parse_address("$0x1000", MAX_ADDRESS), Some(0x1000));
        assert_eq!(parse_address("0X01/0x2345", MAX_ADDRESS), Some(0x01_2345));
    }

    #[test]
    fn test_bank_form() {
        assert_eq!(parse_address("$01/2345", MAX_ADDRESS), Some(0x01_2345));
        assert_eq!(parse_address("ff/ffff", MAX_ADDRESS), Some(0xFF_FFFF));
        assert_eq!(parse_address("100/0000", MAX_ADDRESS), None);
        assert_eq!(parse_address("01/10000", MAX_ADDRESS), None);
        assert_eq!(parse_address("/1234", MAX_ADDRESS), None);
    }

    #[test]
    fn test_limit_and_garbage() {
        assert_eq!(parse_address("1000000", MAX_ADDRESS), None);
        assert_eq!(parse_address("10000", 0x10000), None);
        assert_eq!(parse_address("", MAX_ADDRESS), None);
        assert_eq!(parse_address("$", MAX_ADDRESS), None);
        assert_eq!(parse_address("LOOP", MAX_ADDRESS), None);
        assert_eq!(parse_address(":1234", MAX_ADDRESS), None);
    }
}
