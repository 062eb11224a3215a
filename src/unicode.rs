use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A `\uHHHH` escape with exactly four hex digits
static UNICODE_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\u([[:xdigit:]]{4})").expect("valid unicode escape regex"));

fn decode_escape(caps: &Captures<'_>) -> String {
    u32::from_str_radix(&caps[1], 16)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_else(|| caps[0].to_string())
}

/// Replace `\uHHHH` escapes with the chars they name.
///
/// Decoded text is not rescanned and malformed escapes are left as they are.
///
/// Surrogate code points (`\uD800` to `\uDFFF`) are not chars, so those
/// escapes are kept as literal text rather than dropped.
pub fn fix_unicode_escaped_text(src: &str) -> Cow<'_, str> {
    UNICODE_ESCAPE.replace_all(src, decode_escape)
}
