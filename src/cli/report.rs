//! Console output for command results.
//!
//! Issues are printed in cargo-style format. Separate from core logic to
//! allow stringsweep to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{AnalyzeSummary, CleanSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Analyze(summary) => print_analyze(result, summary, out),
        CommandSummary::Clean(summary) => print_clean(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
    print_parse_warning_to(result.parse_error_count, verbose, err);
}

/// Print issues in cargo-style format.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        print_issue(issue, writer);
    }
}

/// Print a warning about resource files that could not be parsed.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} resource file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Entry(entry) => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), entry.location);
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer);
}

/// Missing-translation issues for complete locales are only kept for the text
/// report; they are not worth a console entry.
fn is_reportable(issue: &Issue) -> bool {
    match issue {
        Issue::MissingTranslation(missing) => !missing.missing.is_empty(),
        _ => true,
    }
}

fn print_analyze<W: Write>(result: &CommandResult, summary: &AnalyzeSummary, writer: &mut W) {
    let reportable: Vec<Issue> = result
        .issues
        .iter()
        .filter(|i| is_reportable(i))
        .cloned()
        .collect();

    if reportable.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {}, {} resource {} - no issues found",
                result.source_files_checked,
                plural(result.source_files_checked, "file", "files"),
                result.resource_files_checked,
                plural(result.resource_files_checked, "file", "files"),
            )
            .green()
        );
    } else {
        report_to(&reportable, writer);

        let missing_total: usize = summary.missing_issues.iter().map(|i| i.missing.len()).sum();
        let _ = writeln!(
            writer,
            "{} {} duplicate, {} missing {}, {} unused",
            "summary:".bold(),
            summary.duplicate_issues.len(),
            missing_total,
            plural(missing_total, "translation", "translations"),
            summary.unused_issues.len(),
        );
    }

    let _ = writeln!(writer, "Analysis complete. Results saved to:");
    for path in &summary.report_files {
        let _ = writeln!(writer, "- {}", path.display());
    }
}

fn print_clean<W: Write>(summary: &CleanSummary, writer: &mut W) {
    if summary.unused_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unused strings found".green()
        );
        return;
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} Removed {} unused {} ({} {} from {} {})",
            SUCCESS_MARK.green(),
            summary.unused_count,
            plural(summary.unused_count, "string", "strings"),
            summary.removed_count,
            plural(summary.removed_count, "declaration", "declarations"),
            summary.file_count,
            plural(summary.file_count, "file", "files"),
        );
        return;
    }

    for issue in &summary.unused_issues {
        let _ = writeln!(
            writer,
            "{} \"{}\"  {} {}",
            "-".dimmed(),
            issue.entry.name,
            "-->".blue(),
            issue.entry.location
        );
    }
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "Would remove {} unused {} ({} {} in {} {})",
        summary.unused_count,
        plural(summary.unused_count, "string", "strings"),
        summary.removed_count,
        plural(summary.removed_count, "declaration", "declarations"),
        summary.file_count,
        plural(summary.file_count, "file", "files"),
    );
    let _ = writeln!(writer, "Run with {} to delete them.", "--apply".cyan());
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} Created {}",
            SUCCESS_MARK.green(),
            CONFIG_FILE_NAME
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
