/// Windows-1252 meanings for bytes 0x80..=0x9F; unassigned slots are `-`
const C1_CHARS: [char; 32] = [
    // 0x80
    '\u{20AC}', '-', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    // 0x88
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '-', '\u{017D}', '-',
    // 0x90
    '-', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    // 0x98
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '-', '\u{017E}', '\u{0178}',
];

/// Map one Latin-1 byte to the char it stands for
pub fn remap_byte(b: u8) -> char {
    match b {
        0x80..=0x9F => C1_CHARS[usize::from(b - 0x80)],
        0x7F | 0xAD => '-',
        _ => char::from(b),
    }
}

/// Convert Latin-1 bytes to a string, one char per byte.
///
/// The input is never decoded as UTF-8: a multi-byte UTF-8 sequence becomes
/// one char per byte.
pub fn latin1_to_unicode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(remap_byte).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_range() {
        let bytes: Vec<u8> = (0x70..=0xAF).collect();
        let expected = "pqrstuvwxyz{|}~-€-‚ƒ„…†‡ˆ‰Š‹Œ-Ž--‘’“”•–—˜™š›œ-žŸ\u{A0}¡¢£¤¥¦§¨©ª«¬-®¯";
        assert_eq!(latin1_to_unicode(&bytes), expected);
    }

    #[test]
    fn test_one_char_per_byte() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(latin1_to_unicode(&bytes).chars().count(), 256);
    }

    #[test]
    fn test_utf8_input_is_not_decoded() {
        // "é" in UTF-8 is 0xC3 0xA9
        assert_eq!(latin1_to_unicode("é".as_bytes()), "Ã©");
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(latin1_to_unicode(b"plain text\n"), "plain text\n");
        assert_eq!(latin1_to_unicode(b""), "");
    }

    #[test]
    fn test_dash_bytes() {
        for b in [0x7F, 0x81, 0x8D, 0x8F, 0x90, 0x9D, 0xAD] {
            assert_eq!(remap_byte(b), '-', "byte {b:#04x}");
        }
    }
}
