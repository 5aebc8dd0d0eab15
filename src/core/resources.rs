//! Discovery and loading of `values*/strings.xml` files.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::{Pattern, glob};

use crate::core::{ResourceFile, parsers::xml::parse_strings_file};

pub const BASE_QUALIFIER: &str = "values";

/// A resource file found on disk, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    pub qualifier: String,
    pub path: PathBuf,
}

/// A resource file that could not be read or parsed.
#[derive(Debug, Clone)]
pub struct ResourceLoadWarning {
    pub file_path: String,
    pub error: String,
}

/// Base file plus every locale file under a `res` directory.
#[derive(Debug)]
pub struct ResourceSet {
    /// `values/strings.xml`. Empty when the file is missing or unparsable.
    pub base: ResourceFile,
    /// `values-*/strings.xml`, sorted by qualifier.
    pub locales: Vec<ResourceFile>,
    /// Every discovered path (base first), including unparsable ones.
    pub paths: Vec<ResourcePath>,
    pub warnings: Vec<ResourceLoadWarning>,
}

impl ResourceSet {
    /// Every path a remover should visit: the base file first, then locales.
    pub fn file_paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(|p| p.path.as_path())
    }

    /// Number of resource files (base included) that exist on disk.
    pub fn file_count(&self) -> usize {
        self.paths.iter().filter(|p| p.path.is_file()).count()
    }
}

/// Locale qualifier of a resource file: the name of its parent directory.
///
/// - "res/values-es/strings.xml" -> Some("values-es")
/// - "res/values/strings.xml" -> Some("values")
pub fn extract_qualifier(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Find `values/<file_name>` and every `values-*/<file_name>` under `res_dir`.
///
/// The base path is always returned (it may not exist); locale paths are sorted.
pub fn discover_resource_files(res_dir: &Path, file_name: &str) -> Result<Vec<ResourcePath>> {
    if !res_dir.exists() {
        bail!(
            "Resource directory '{}' does not exist.\n\
             Hint: Check the 'resRoot' setting or pass --res-root.",
            res_dir.display()
        );
    }

    if !res_dir.is_dir() {
        bail!("'{}' is not a directory.", res_dir.display());
    }

    let mut paths = vec![ResourcePath {
        qualifier: BASE_QUALIFIER.to_string(),
        path: res_dir.join(BASE_QUALIFIER).join(file_name),
    }];

    let escaped_root = Pattern::escape(&res_dir.to_string_lossy());
    let pattern = format!("{}/{}-*/{}", escaped_root, BASE_QUALIFIER, Pattern::escape(file_name));

    let mut locales: Vec<ResourcePath> = glob(&pattern)?
        .flatten()
        .filter(|path| path.is_file())
        .filter_map(|path| {
            extract_qualifier(&path).map(|qualifier| ResourcePath { qualifier, path })
        })
        .collect();
    locales.sort_by(|a, b| a.qualifier.cmp(&b.qualifier));

    paths.extend(locales);
    Ok(paths)
}

/// Discover and parse every resource file under `res_dir`.
///
/// Unreadable or malformed files contribute no entries and are recorded in
/// `warnings` instead of failing the whole load.
pub fn load_resources(res_dir: &Path, file_name: &str) -> Result<ResourceSet> {
    let paths = discover_resource_files(res_dir, file_name)?;
    let mut warnings = Vec::new();
    let mut files = paths.iter().map(|resource| {
        match parse_strings_file(&resource.path, &resource.qualifier) {
            Ok(file) => file,
            Err(e) => {
                warnings.push(ResourceLoadWarning {
                    file_path: resource.path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
                ResourceFile::new(&resource.qualifier, resource.path.to_string_lossy())
            }
        }
    });

    let base = files.next().unwrap_or_else(|| {
        ResourceFile::new(
            BASE_QUALIFIER,
            res_dir.join(BASE_QUALIFIER).join(file_name).to_string_lossy(),
        )
    });
    let locales: Vec<ResourceFile> = files.collect();

    Ok(ResourceSet {
        base,
        locales,
        paths,
        warnings,
    })
}
