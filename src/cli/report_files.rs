//! Flat text reports written by `analyze`.
//!
//! The three files are overwritten on every run.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::issues::{DuplicateStringIssue, MissingTranslationIssue, UnusedStringIssue};

pub const DUPLICATES_FILE: &str = "duplicates.txt";
pub const MISSING_TRANSLATIONS_FILE: &str = "missing_translations.txt";
pub const UNUSED_STRINGS_FILE: &str = "unused_strings.txt";

const NONE: &str = "None";

pub fn write_duplicates<W: Write>(
    writer: &mut W,
    base_label: &str,
    issues: &[DuplicateStringIssue],
) -> io::Result<()> {
    writeln!(writer, "Duplicate strings in {}:", base_label)?;
    if issues.is_empty() {
        writeln!(writer, "  {}", NONE)?;
    }
    for issue in issues {
        writeln!(writer, "  {}", issue.entry.name)?;
    }
    Ok(())
}

pub fn write_missing_translations<W: Write>(
    writer: &mut W,
    issues: &[MissingTranslationIssue],
) -> io::Result<()> {
    writeln!(writer, "Missing translations:")?;
    for issue in issues {
        if issue.missing.is_empty() {
            writeln!(writer, "{}: {}", issue.locale, NONE)?;
        } else {
            writeln!(writer, "{}:", issue.locale)?;
            for name in issue.missing_names() {
                writeln!(writer, "  {}", name)?;
            }
        }
    }
    Ok(())
}

pub fn write_unused<W: Write>(writer: &mut W, issues: &[UnusedStringIssue]) -> io::Result<()> {
    writeln!(writer, "Unused strings:")?;
    if issues.is_empty() {
        writeln!(writer, "  {}", NONE)?;
    }
    for issue in issues {
        writeln!(writer, "  {}", issue.entry.name)?;
    }
    Ok(())
}

/// Write all three reports into `output_dir` (created if needed).
///
/// Returns the written paths in order: duplicates, missing translations, unused.
pub fn write_reports(
    output_dir: &Path,
    base_label: &str,
    duplicates: &[DuplicateStringIssue],
    missing: &[MissingTranslationIssue],
    unused: &[UnusedStringIssue],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let mut written = Vec::with_capacity(3);

    let mut buffer = Vec::new();
    write_duplicates(&mut buffer, base_label, duplicates)?;
    written.push(write_report(output_dir, DUPLICATES_FILE, &buffer)?);

    buffer.clear();
    write_missing_translations(&mut buffer, missing)?;
    written.push(write_report(output_dir, MISSING_TRANSLATIONS_FILE, &buffer)?);

    buffer.clear();
    write_unused(&mut buffer, unused)?;
    written.push(write_report(output_dir, UNUSED_STRINGS_FILE, &buffer)?);

    Ok(written)
}

fn write_report(output_dir: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = output_dir.join(file_name);
    fs::write(&path, content).with_context(|| format!("Failed to write report: {:?}", path))?;
    Ok(path)
}
