//! Newline-separated lists.
//!
//! Every line is trimmed; blank lines and lines starting with `#` are
//! dropped so lists can carry comments.

/// Iterate over the kept lines of a list
pub fn list_items(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Collect the kept lines of a list, in order
pub fn list_to_vec(text: &str) -> Vec<&str> {
    list_items(text).collect()
}

/// Like [`list_to_vec`], but each line is also split on `sep`.
///
/// Pieces are trimmed and empty ones dropped. An empty `sep` leaves lines
/// whole.
pub fn sep_list_to_vec<'a>(text: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        return list_to_vec(text);
    }
    list_items(text)
        .flat_map(|line| line.split(sep))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Join the kept lines of a list with `sep`
pub fn list_to_sep_string(text: &str, sep: &str) -> String {
    list_to_vec(text).join(sep)
}
