//! Helpers for untrusted file names and for data entering tracing spans.

use std::path::Path;

use unicode_normalization::UnicodeNormalization;

/// Returns only the filename component of a path (no directory).
///
/// Safe for span fields: reveals the file name, never the full path.
pub fn redact_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}

/// Reduces an uploaded file name to a safe, flat name.
///
/// Accented letters are decomposed (NFKD) and lose their marks. Path
/// separators and whitespace runs become `_`, anything outside ASCII
/// letters, digits, `.`, `_` and `-` is dropped, and leading or trailing
/// dots and underscores are trimmed. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename.nfkd().filter(char::is_ascii).collect();
    let flattened = ascii.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}
