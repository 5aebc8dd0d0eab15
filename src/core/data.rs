use std::{collections::HashSet, fmt};

/// Position of a declaration inside a resource file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryLocation {
    /// Path to the resource file (e.g., "app/src/main/res/values/strings.xml").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl EntryLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

impl fmt::Display for EntryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.line, self.col)
    }
}

/// A `<string name="...">value</string>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    pub location: EntryLocation,
    /// The resource name (`R.string.<name>`).
    pub name: String,
    /// The unescaped text content.
    pub value: String,
}

impl StringEntry {
    pub fn new(location: EntryLocation, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            location,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }
}

/// All string declarations of one locale, in document order.
///
/// Duplicated names are kept so they can be detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    /// Directory name of the file: `values` for the base file,
    /// `values-es`, `values-pt-rBR`, ... for locales.
    pub qualifier: String,
    pub file_path: String,
    pub entries: Vec<StringEntry>,
}

impl ResourceFile {
    pub fn new(qualifier: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            qualifier: qualifier.into(),
            file_path: file_path.into(),
            entries: Vec::new(),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn name_set(&self) -> HashSet<&str> {
        self.names().collect()
    }
}
