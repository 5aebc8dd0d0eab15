//! Android `strings.xml` reader.
//!
//! Only direct children of the root element are considered, so `<string>`
//! elements nested inside `<string-array>` or `<plurals>` are not entries.

use std::{collections::HashMap, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result, anyhow, bail};
use quick_xml::{
    Reader,
    escape::{resolve_predefined_entity, unescape_with},
    events::{BytesStart, Event},
};
use regex::Regex;

use crate::core::{EntryLocation, ResourceFile, StringEntry};

const STRING_TAG: &[u8] = b"string";

/// `<!ENTITY name "value">` in an internal DTD subset. Parameter entities
/// (`<!ENTITY % name ...>`) do not match.
static ENTITY_DECL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!ENTITY\s+([^\s%"'>]+)\s+(?:"([^"]*)"|'([^']*)')\s*>"#).unwrap()
});

pub fn parse_strings_file(path: &Path, qualifier: &str) -> Result<ResourceFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resource file: {:?}", path))?;
    let file_path = path.to_string_lossy().to_string();

    let entries = parse_strings_source(&content, &file_path)
        .with_context(|| format!("Failed to parse resource file: {:?}", path))?;

    let mut file = ResourceFile::new(qualifier, file_path);
    file.entries = entries;
    Ok(file)
}

/// Element currently being collected.
struct OpenEntry {
    name: String,
    value: String,
    line: usize,
    col: usize,
}

pub fn parse_strings_source(content: &str, file_path: &str) -> Result<Vec<StringEntry>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let line_index = build_line_index(content);
    let mut reader = Reader::from_str(content);

    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut current: Option<OpenEntry> = None;
    let mut entities: HashMap<String, String> = HashMap::new();

    loop {
        let offset = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| anyhow!("{} (at byte {})", e, reader.error_position()))?;

        match event {
            Event::Start(start) => {
                if depth == 0 {
                    ensure_single_root(&mut seen_root)?;
                } else if depth == 1 && start.name().as_ref() == STRING_TAG {
                    current = open_entry(&start, &entities, &line_index, offset)?;
                }
                depth += 1;
            }
            Event::Empty(start) => {
                if depth == 0 {
                    ensure_single_root(&mut seen_root)?;
                } else if depth == 1
                    && start.name().as_ref() == STRING_TAG
                    && let Some(open) = open_entry(&start, &entities, &line_index, offset)?
                {
                    entries.push(close_entry(open, file_path));
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| anyhow!("unexpected closing tag at byte {}", offset))?;
                if depth == 1
                    && let Some(open) = current.take()
                {
                    entries.push(close_entry(open, file_path));
                }
            }
            Event::Text(text) => {
                let value = text.unescape_with(|name| resolve_entity(&entities, name))?;
                if let Some(open) = current.as_mut() {
                    open.value.push_str(&value);
                } else if depth == 0 && !value.trim().is_empty() {
                    bail!("text outside of the root element at byte {}", offset);
                }
            }
            Event::CData(data) => {
                if let Some(open) = current.as_mut() {
                    open.value.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::DocType(doctype) => {
                collect_entities(&String::from_utf8_lossy(&doctype), &mut entities);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        bail!("unexpected end of file: {} element(s) left open", depth);
    }
    if !seen_root {
        bail!("no root element found");
    }

    Ok(entries)
}

fn ensure_single_root(seen_root: &mut bool) -> Result<()> {
    if *seen_root {
        bail!("junk after the document element");
    }
    *seen_root = true;
    Ok(())
}

/// Add the general entities declared in a DOCTYPE's internal subset.
///
/// The first declaration of a name wins. Entity values may refer to
/// entities declared before them.
fn collect_entities(doctype: &str, entities: &mut HashMap<String, String>) {
    for caps in ENTITY_DECL_REGEX.captures_iter(doctype) {
        let raw = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
        let value = unescape_with(raw, |name| resolve_entity(entities, name))
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        entities.entry(caps[1].to_string()).or_insert(value);
    }
}

fn resolve_entity<'a>(entities: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    entities
        .get(name)
        .map(String::as_str)
        .or_else(|| resolve_predefined_entity(name))
}

/// Returns `None` for `<string>` elements without a `name` attribute.
fn open_entry(
    start: &BytesStart,
    entities: &HashMap<String, String>,
    line_index: &[usize],
    offset: usize,
) -> Result<Option<OpenEntry>> {
    let Some(attr) = start.try_get_attribute("name")? else {
        return Ok(None);
    };
    let name = attr
        .unescape_value_with(|name| resolve_entity(entities, name))?
        .into_owned();
    let line = offset_to_line(line_index, offset);
    let col = offset - line_index[line - 1] + 1;

    Ok(Some(OpenEntry {
        name,
        value: String::new(),
        line,
        col,
    }))
}

fn close_entry(open: OpenEntry, file_path: &str) -> StringEntry {
    StringEntry::new(
        EntryLocation::new(file_path, open.line, open.col),
        open.name,
        open.value,
    )
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number for a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
