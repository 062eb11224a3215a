/// Collapse runs of spaces into one and trim surrounding whitespace.
///
/// Only U+0020 runs are collapsed; tabs and newlines inside the text are
/// kept as they are.
pub fn clean_spaces(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        let is_space = c == ' ';
        if !(is_space && prev_space) {
            result.push(c);
        }
        prev_space = is_space;
    }
    result.trim().to_string()
}

/// Strip trailing zeros (and a bare trailing `.`) from a decimal numeral.
///
/// `3.20000` becomes `3.2`, `3.000` becomes `3`, and `-0.0` becomes `0`.
/// Text without a `.` is left alone.
pub fn trim_dot_zeros(s: &str) -> String {
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format `f` with six decimals, then trim as [`trim_dot_zeros`] does
pub fn float_trim_dot_zeros(f: f64) -> String {
    trim_dot_zeros(&format!("{f:.6}"))
}
