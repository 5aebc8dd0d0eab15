//! Textual scan of Java/Kotlin sources for `R.string.<name>` references.

use std::{borrow::Cow, collections::HashSet, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

static STRING_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R\.string\.(\w+)").unwrap());

/// Decode bytes as UTF-8, dropping invalid sequences.
pub fn decode_lenient(bytes: &[u8]) -> Cow<'_, str> {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => Cow::Borrowed(s),
        Cow::Owned(s) => Cow::Owned(s.replace(char::REPLACEMENT_CHARACTER, "")),
    }
}

/// Names referenced as `R.string.<name>` in `content`.
pub fn extract_string_references(content: &str) -> impl Iterator<Item = &str> {
    STRING_REFERENCE_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Read a source file leniently and add its references to `used`.
pub fn collect_string_references(path: &Path, used: &mut HashSet<String>) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read source file: {:?}", path))?;
    let content = decode_lenient(&bytes);
    used.extend(extract_string_references(&content).map(String::from));
    Ok(())
}
