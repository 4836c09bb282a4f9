use pagecraft_editor::serializer::DEFAULT_EXPORT_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Origin placed in front of share links
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Document file used when a command is given no `--file`
    #[serde(default = "default_file")]
    pub default_file: String,

    /// Pretty-print documents written to disk
    #[serde(default = "default_pretty")]
    pub pretty_export: bool,
}

fn default_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Resolve the document path: explicit argument, else the configured default
    pub fn document_path(&self, cwd: &str, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => PathBuf::from(cwd).join(path),
            None => PathBuf::from(cwd).join(&self.default_file),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            default_file: default_file(),
            pretty_export: default_pretty(),
        }
    }
}
