//! Line-based removal of `<string>` declarations.
//!
//! The edit is textual: a declaration is the line whose trimmed content starts
//! with `<string name="`, plus the following line when that line is exactly
//! `</string>` after trimming. Everything else is kept byte for byte.
//! Lines end at `\n`, `\r\n` or a lone `\r`.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

const DECLARATION_PREFIX: &str = "<string name=\"";
const CLOSING_TAG: &str = "</string>";

static NAME_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name="([^"]+)""#).unwrap());

/// Result of removing declarations from one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalResult {
    pub content: String,
    /// Names whose declaration lines were dropped, in file order.
    pub removed: Vec<String>,
}

impl RemovalResult {
    pub fn is_modified(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Name declared on `line`, if the line opens a `<string name="...">` element.
fn declared_name(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if !trimmed.starts_with(DECLARATION_PREFIX) {
        return None;
    }
    NAME_ATTR_REGEX
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split after `\n`, `\r\n` or a lone `\r`, keeping the terminators.
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let is_break = b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n'));
        if is_break {
            lines.push(&content[start..=i]);
            start = i + 1;
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

pub fn remove_string_declarations(content: &str, unused: &HashSet<String>) -> RemovalResult {
    let lines = split_lines(content);
    let mut kept = String::with_capacity(content.len());
    let mut removed = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if let Some(name) = declared_name(lines[i])
            && unused.contains(name)
        {
            removed.push(name.to_string());
            i += 1;
            if i < lines.len() && lines[i].trim() == CLOSING_TAG {
                i += 1;
            }
            continue;
        }
        kept.push_str(lines[i]);
        i += 1;
    }

    RemovalResult {
        content: kept,
        removed,
    }
}

/// Remove unused declarations from the file at `path`, rewriting it in place.
///
/// Missing files are skipped and the file is only written when something was
/// removed. The write is not atomic.
pub fn remove_unused_from_file(path: &Path, unused: &HashSet<String>) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resource file: {:?}", path))?;
    let result = remove_string_declarations(&content, unused);

    if result.is_modified() {
        fs::write(path, &result.content)
            .with_context(|| format!("Failed to write resource file: {:?}", path))?;
    }

    Ok(result.removed)
}
