//! Unused string detection rule.
//!
//! Detects names declared in the base file that are never referenced as
//! `R.string.<name>` in any scanned source file.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, ResourceFile},
    issues::UnusedStringIssue,
};

pub fn check_unused_strings_issues(ctx: &CheckContext) -> Vec<UnusedStringIssue> {
    let resources = ctx.resources();
    let targets: Vec<String> = resources
        .file_paths()
        .map(|p| p.to_string_lossy().to_string())
        .collect();
    check_unused_strings(ctx.used_names(), &resources.base, &targets)
}

/// Check for unused names.
///
/// # Arguments
/// * `used_names` - Every name referenced from source code
/// * `base` - The base resource file
/// * `targets` - Resource files the declarations should be removed from
///
/// # Returns
/// One issue per unused name, in base declaration order
pub fn check_unused_strings(
    used_names: &HashSet<String>,
    base: &ResourceFile,
    targets: &[String],
) -> Vec<UnusedStringIssue> {
    let mut seen = HashSet::new();
    base.entries
        .iter()
        .filter(|entry| !used_names.contains(&entry.name) && seen.insert(entry.name.as_str()))
        .map(|entry| UnusedStringIssue {
            entry: entry.clone(),
            targets: targets.to_vec(),
        })
        .collect()
}
