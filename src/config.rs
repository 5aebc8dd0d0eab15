use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".stringsweeprc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_res_root")]
    pub res_root: String,
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default = "default_resource_file_name")]
    pub resource_file_name: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_res_root() -> String {
    "app/src/main/res".to_string()
}

fn default_source_roots() -> Vec<String> {
    ["app/src/main/java", "app/src/main/kotlin"]
        .map(String::from)
        .to_vec()
}

fn default_source_extensions() -> Vec<String> {
    ["java", "kt"].map(String::from).to_vec()
}

fn default_resource_file_name() -> String {
    "strings.xml".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            res_root: default_res_root(),
            source_roots: default_source_roots(),
            source_extensions: default_source_extensions(),
            resource_file_name: default_resource_file_name(),
            output_dir: default_output_dir(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, if no source
    /// extension is configured, or if `resourceFileName` is not a bare file name.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.source_extensions.is_empty() {
            bail!("'sourceExtensions' must list at least one file extension");
        }

        if self.resource_file_name.is_empty()
            || self.resource_file_name.contains('/')
            || self.resource_file_name.contains('\\')
        {
            bail!(
                "Invalid 'resourceFileName': \"{}\" (expected a bare file name such as strings.xml)",
                self.resource_file_name
            );
        }

        Ok(())
    }

    /// Source extensions without a leading dot (`.kt` and `kt` are equivalent).
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.source_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
