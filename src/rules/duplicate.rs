//! Duplicate string detection rule.
//!
//! Detects names declared more than once in the base resource file.

use std::collections::{HashMap, HashSet};

use crate::{
    core::{CheckContext, ResourceFile},
    issues::DuplicateStringIssue,
};

pub fn check_duplicate_strings_issues(ctx: &CheckContext) -> Vec<DuplicateStringIssue> {
    check_duplicate_strings(&ctx.resources().base)
}

/// Check for duplicated names.
///
/// Issues are returned in order of each name's first declaration.
pub fn check_duplicate_strings(base: &ResourceFile) -> Vec<DuplicateStringIssue> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in base.names() {
        *counts.entry(name).or_default() += 1;
    }

    let mut reported = HashSet::new();
    base.entries
        .iter()
        .filter_map(|entry| {
            let count = counts.get(entry.name.as_str()).copied().unwrap_or(0);
            (count > 1 && reported.insert(entry.name.as_str())).then(|| DuplicateStringIssue {
                entry: entry.clone(),
                count,
            })
        })
        .collect()
}
