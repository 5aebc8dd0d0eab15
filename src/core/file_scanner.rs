use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning source roots.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Paths that could not be accessed while walking.
    pub skipped_count: usize,
}

/// Recursively collect files under `roots` whose extension is in `extensions`.
///
/// Missing roots are skipped. Paths matching any `ignore_patterns` glob are excluded.
pub fn scan_source_files(
    roots: &[PathBuf],
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut result = ScanResult::default();

    let glob_patterns: Vec<Pattern> = ignore_patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect();

    for root in roots {
        if !root.exists() {
            if verbose {
                eprintln!(
                    "{} Source directory does not exist: {}",
                    "warning:".bold().yellow(),
                    root.display()
                );
            }
            continue;
        }

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if glob_patterns
                .iter()
                .any(|p| p.matches(&path.to_string_lossy()))
            {
                continue;
            }

            if entry.file_type().is_file() && has_extension(path, extensions) {
                result.files.push(path.to_path_buf());
            }
        }
    }

    result.files.sort();
    result.files.dedup();
    result
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
