//! Issue types for string resource analysis results.
//!
//! Each issue is self-contained with all information needed by:
//! - Reporter: to display the issue to users
//! - Action: to fix the issue (delete unused declarations)

use enum_dispatch::enum_dispatch;

use crate::core::StringEntry;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateString,
    MissingTranslation,
    UnusedString,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DuplicateString => write!(f, "duplicate-string"),
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::UnusedString => write!(f, "unused-string"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Name declared more than once in the base file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateStringIssue {
    /// First declaration of the name.
    pub entry: StringEntry,
    /// Total number of declarations.
    pub count: usize,
}

impl DuplicateStringIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateString
    }
}

/// Base strings without a translation in one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    /// Locale qualifier (e.g., "values-es").
    pub locale: String,
    /// Path of the locale file.
    pub file_path: String,
    /// Base entries missing from the locale, in base declaration order.
    /// Empty when the locale is complete.
    pub missing: Vec<StringEntry>,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }

    pub fn missing_names(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(|e| e.name.as_str())
    }
}

/// Name declared in the base file but never referenced from source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedStringIssue {
    pub entry: StringEntry,
    /// Resource files (base and locales) the declaration is removed from.
    pub targets: Vec<String>,
}

impl UnusedStringIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedString
    }
}

/// Resource file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A string resource issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateString(DuplicateStringIssue),
    MissingTranslation(MissingTranslationIssue),
    UnusedString(UnusedStringIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    /// Sort key: file, then line, then rule.
    fn sort_key(&self) -> (&str, usize, Rule) {
        match self.location() {
            ReportLocation::Entry(entry) => (entry.file_path(), entry.location.line, self.rule()),
            ReportLocation::File { path } => (path, 0, self.rule()),
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.message().cmp(&other.message()))
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A declaration inside a resource file.
    Entry(&'a StringEntry),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to the CLI.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (name, locale, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateStringIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("declared {} times", self.count))
    }
}

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.locale.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} missing: {}",
            self.missing.len(),
            self.missing_names().collect::<Vec<_>>().join(", ")
        ))
    }
}

impl Report for UnusedStringIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("(\"{}\")", self.entry.value.trim()))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
