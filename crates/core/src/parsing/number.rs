/// Parses hex digits with an optional `0x`/`0X` prefix. Unlike
/// `from_str_radix` this rejects signs, whitespace, and the empty string.
pub fn parse_hex(s: &str) -> Option<u32> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0"), Some(0));
        assert_eq!(parse_hex("ff"), Some(0xFF));
        assert_eq!(parse_hex("C000"), Some(0xC000));
        assert_eq!(parse_hex("00000010"), Some(0x10));
    }

    #[test]
    fn test_parse_hex_radix_prefix() {
        assert_eq!(parse_hex("0x10"), Some(0x10));
        assert_eq!(parse_hex("0XfF"), Some(0xFF));
        assert_eq!(parse_hex("0x0"), Some(0));
        assert_eq!(parse_hex("0x"), None);
        assert_eq!(parse_hex("0x-1"), None);
        assert_eq!(parse_hex("0x 10"), None);
        assert_eq!(parse_hex("0x0x10"), None);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("+10"), None);
        assert_eq!(parse_hex("-1"), None);
        assert_eq!(parse_hex("12 34"), None);
        assert_eq!(parse_hex(" 10"), None);
        assert_eq!(parse_hex("123456789"), None);
    }
}
