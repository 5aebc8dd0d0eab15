use std::{
    cell::OnceCell,
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        file_scanner::scan_source_files,
        parsers::source::collect_string_references,
        resources::{ResourceSet, load_resources},
    },
    issues::ParseErrorIssue,
};

/// Analysis context shared by all commands.
///
/// Resource files are loaded eagerly so a missing `res` directory fails fast.
/// Source references are scanned on first use, since `init` and friends never
/// need them.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--res-root app/src/main/res`)
/// 2. `.stringsweeprc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Source files (Java/Kotlin) to scan for references.
    pub files: Vec<PathBuf>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    resources: ResourceSet,

    /// Every name referenced as `R.string.<name>` in `files`.
    used_names: OnceCell<HashSet<String>>,

    resource_parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the resource directory
    /// doesn't exist.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No .stringsweeprc.json found, using default configuration");
        }

        let mut config = config_result.config;

        if let Some(ref res_root) = common_args.res_root {
            config.res_root = res_root.to_string_lossy().to_string();
        }

        if !common_args.source_dirs.is_empty() {
            config.source_roots = common_args
                .source_dirs
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect();
        }

        config.validate()?;

        let res_dir = resolve_path(&root_dir, &config.res_root);
        let resources = load_resources(&res_dir, &config.resource_file_name)?;

        let resource_parse_errors: Vec<ParseErrorIssue> = resources
            .warnings
            .iter()
            .map(|warning| {
                if verbose {
                    eprintln!(
                        "{} {}",
                        "warning:".bold().yellow(),
                        warning.error
                    );
                }
                ParseErrorIssue {
                    file_path: warning.file_path.clone(),
                    error: warning.error.clone(),
                }
            })
            .collect();

        let source_roots: Vec<PathBuf> = config
            .source_roots
            .iter()
            .map(|root| resolve_path(&root_dir, root))
            .collect();
        let scan_result = scan_source_files(
            &source_roots,
            &config.normalized_extensions(),
            &config.ignores,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            resources,
            used_names: OnceCell::new(),
            resource_parse_errors,
        })
    }

    /// Loaded resource files (base + locales).
    pub fn resources(&self) -> &ResourceSet {
        &self.resources
    }

    /// Resource files that could not be read or parsed.
    pub fn resource_parse_errors(&self) -> &[ParseErrorIssue] {
        &self.resource_parse_errors
    }

    /// Names referenced from source code (lazy initialization).
    ///
    /// Unreadable source files are skipped; their references are lost.
    pub fn used_names(&self) -> &HashSet<String> {
        self.used_names.get_or_init(|| {
            let mut used = HashSet::new();
            for file in &self.files {
                if let Err(e) = collect_string_references(file, &mut used)
                    && self.verbose
                {
                    eprintln!("{} {:#}", "warning:".bold().yellow(), e);
                }
            }
            used
        })
    }

    /// Directory where `analyze` writes its reports.
    pub fn output_dir(&self) -> PathBuf {
        resolve_path(&self.root_dir, &self.config.output_dir)
    }
}

/// Resolve a configured path against the project root.
///
/// Absolute paths are kept; relative ones are joined to `root_dir` unless the
/// root is the current directory.
pub fn resolve_path(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() || root_dir == Path::new(".") {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(".").unwrap_or(p);
        root_dir.join(rel)
    }
}
