//! RemoveString action.
//!
//! Deletes unused string declarations from the base file and every locale file.
//! Used by the `stringsweep clean` command.

use std::collections::{BTreeSet, HashMap};

use crate::issues::UnusedStringIssue;

use super::operation::Operation;
use super::traits::Action;

/// Action to delete string declarations from resource files.
pub struct RemoveString;

impl Action<UnusedStringIssue> for RemoveString {
    /// One operation per target file, in the order targets are first seen.
    fn to_operations(issues: &[UnusedStringIssue]) -> Vec<Operation> {
        let mut order: Vec<&str> = Vec::new();
        let mut names_by_file: HashMap<&str, BTreeSet<String>> = HashMap::new();

        for issue in issues {
            for target in &issue.targets {
                names_by_file
                    .entry(target.as_str())
                    .or_insert_with(|| {
                        order.push(target.as_str());
                        BTreeSet::new()
                    })
                    .insert(issue.entry.name.clone());
            }
        }

        order
            .into_iter()
            .filter_map(|file_path| {
                names_by_file
                    .remove(file_path)
                    .map(|names| Operation::RemoveStrings {
                        file_path: file_path.to_string(),
                        names,
                    })
            })
            .collect()
    }
}
