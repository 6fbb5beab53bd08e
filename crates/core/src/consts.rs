/// Addresses typed into the goto box are limited to a 24-bit space (65816 banks)
pub const MAX_ADDRESS: u32 = 1 << 24;

/// Highest address that fits without a bank byte
pub const MAX_BANK0_ADDRESS: u32 = 0xFFFF;

/// Separator between bank and 16-bit address, e.g. `$12/3456`
pub const BANK_SEPARATOR: char = '/';

pub const ADDRESS_PREFIX: char = '$';
pub const OFFSET_PREFIX: char = '+';

/// Appended (with the declaring offset) to non-unique labels so stored labels stay unique
pub const NON_UNIQUE_TAG_CHAR: char = '§';
pub const NON_UNIQUE_TAG_DIGITS: usize = 6;

pub const DEFAULT_NON_UNIQUE_PREFIX: char = '@';

pub const LABEL_MIN_LEN: usize = 2;
pub const LABEL_MAX_LEN: usize = 255;
pub const LABEL_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

pub const UNCERTAIN_SUFFIX: char = '?';
pub const GENERATED_SUFFIX: char = '\u{00a1}';

/// Shown in place of an address for offsets in non-addressable areas
pub const NON_ADDR_STR: &str = "NA";
