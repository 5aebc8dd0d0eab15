//! Low-level file operations produced by actions.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result};

use crate::core::editor::{remove_string_declarations, remove_unused_from_file};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Remove the declarations of `names` from one resource file.
    RemoveStrings {
        file_path: String,
        names: BTreeSet<String>,
    },
}

/// Outcome of executing one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// Declarations removed (or that would be removed in a dry run).
    Removed(usize),
    /// The target file does not exist.
    Skipped,
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::RemoveStrings { file_path, .. } => file_path,
        }
    }

    /// Apply the operation to disk.
    pub fn execute(&self) -> Result<OperationResult> {
        match self {
            Operation::RemoveStrings { file_path, names } => {
                let path = Path::new(file_path);
                if !path.exists() {
                    return Ok(OperationResult::Skipped);
                }
                let removed = remove_unused_from_file(path, &to_lookup(names))?;
                Ok(OperationResult::Removed(removed.len()))
            }
        }
    }

    /// Compute what `execute` would do without writing anything.
    pub fn simulate(&self) -> Result<OperationResult> {
        match self {
            Operation::RemoveStrings { file_path, names } => {
                let path = Path::new(file_path);
                if !path.exists() {
                    return Ok(OperationResult::Skipped);
                }
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read resource file: {:?}", path))?;
                let result = remove_string_declarations(&content, &to_lookup(names));
                Ok(OperationResult::Removed(result.removed.len()))
            }
        }
    }
}

fn to_lookup(names: &BTreeSet<String>) -> HashSet<String> {
    names.iter().cloned().collect()
}
