use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".docsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory scanned for apiDocJS comments.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Directory holding `_apidoc.js` and `apidoc.json`.
    #[serde(default = "default_apidoc_dir")]
    pub apidoc_dir: String,
    /// Output file name for the version history.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub recursive: bool,
    /// File extensions treated as source files.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns for paths excluded from the scan.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_source_root() -> String {
    "./src_versions".to_string()
}

fn default_apidoc_dir() -> String {
    ".".to_string()
}

fn default_output() -> String {
    "_apidoc.js".to_string()
}

fn default_extensions() -> Vec<String> {
    ["cpp", "c", "h", "hpp"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            apidoc_dir: default_apidoc_dir(),
            output: default_output(),
            recursive: false,
            extensions: default_extensions(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
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
            let content = fs::read_to_string(&path)?;
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
