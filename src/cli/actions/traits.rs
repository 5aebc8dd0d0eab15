//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types, providing type-safe handling.

use anyhow::Result;

use super::operation::{Operation, OperationResult};

/// Statistics from running an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    /// Number of declarations removed.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

/// Action trait - converts Issues into Operations and executes them.
///
/// ```ignore
/// let stats = if apply {
///     RemoveString::run(&issues)?
/// } else {
///     RemoveString::dry_run(&issues)?
/// };
/// ```
pub trait Action<I> {
    /// Convert issues to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    fn run(issues: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        execute_operations(&ops, true)
    }

    /// Count what the action would change without touching any file.
    fn dry_run(issues: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        execute_operations(&ops, false)
    }
}

pub(crate) fn execute_operations(ops: &[Operation], apply: bool) -> Result<ActionStats> {
    let mut stats = ActionStats::default();

    for op in ops {
        let result = if apply { op.execute()? } else { op.simulate()? };
        match result {
            OperationResult::Skipped | OperationResult::Removed(0) => {}
            OperationResult::Removed(removed) => {
                stats.changes_applied += removed;
                stats.files_modified += 1;
            }
        }
    }

    Ok(stats)
}
