use std::path::PathBuf;

use crate::issues::{DuplicateStringIssue, Issue, MissingTranslationIssue, UnusedStringIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Analyze(AnalyzeSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AnalyzeSummary {
    pub duplicate_issues: Vec<DuplicateStringIssue>,
    pub missing_issues: Vec<MissingTranslationIssue>,
    pub unused_issues: Vec<UnusedStringIssue>,
    /// Report files written, in write order.
    pub report_files: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub unused_count: usize,
    /// Declarations removed (or that would be removed) across all files.
    pub removed_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    pub unused_issues: Vec<UnusedStringIssue>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running stringsweep commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found, sorted.
    pub issues: Vec<Issue>,
    /// Number of resource files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files (Java/Kotlin) that were scanned.
    pub source_files_checked: usize,
    /// Number of resource files (base + locales) that were checked.
    pub resource_files_checked: usize,
}
