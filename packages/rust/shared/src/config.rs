//! Application configuration for the corpus builder.
//!
//! User config lives at `~/.morphcorpus/morphcorpus.toml`.
//! Every field has a default; a missing file means "all defaults".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CorpusError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "morphcorpus.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".morphcorpus";

// ---------------------------------------------------------------------------
// Config structs (matching morphcorpus.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where source documents are fetched from.
    #[serde(default)]
    pub source: SourceConfig,

    /// Where built documents are written.
    #[serde(default)]
    pub output: OutputConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[source]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL that each book's source filename is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Parse `base_url`, normalized to end in `/` so that joining a filename
    /// appends rather than replaces the last path segment.
    pub fn base_url(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw)
            .map_err(|e| CorpusError::config(format!("invalid source.base_url '{raw}': {e}")))
    }
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/morphgnt/sblgnt/master/".into()
}
fn default_timeout_secs() -> u64 {
    30
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory holding one `<CODE>.json` per book plus the manifest.
    #[serde(default = "default_output_dir")]
    pub dir: String,

    /// Manifest filename inside `dir`.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            manifest_file: default_manifest_file(),
        }
    }
}

fn default_output_dir() -> String {
    "data/gnt".into()
}
fn default_manifest_file() -> String {
    "books.json".into()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `text` (default) or `json`.
    #[serde(default)]
    pub format: LogFormat,
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.morphcorpus/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CorpusError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.morphcorpus/morphcorpus.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| CorpusError::config(format!("failed to parse {}: {e}", path.display())))?;

    // Surface a bad URL at load time rather than on the first fetch.
    config.source.base_url()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("books.json"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.source.timeout_secs, 30);
        assert_eq!(parsed.output.dir, "data/gnt");
        assert_eq!(parsed.logging.format, LogFormat::Text);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[output]
dir = "/srv/corpus"

[logging]
format = "json"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.output.dir, "/srv/corpus");
        assert_eq!(config.output.manifest_file, "books.json");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.source.base_url.contains("morphgnt"));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let source = SourceConfig {
            base_url: "https://example.com/corpus".into(),
            timeout_secs: 5,
        };
        let url = source.base_url().expect("valid url");
        assert_eq!(url.as_str(), "https://example.com/corpus/");
        assert_eq!(
            url.join("64-Jn-morphgnt.txt").expect("join").as_str(),
            "https://example.com/corpus/64-Jn-morphgnt.txt"
        );
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let source = SourceConfig {
            base_url: "not a url".into(),
            timeout_secs: 5,
        };
        let err = source.base_url().unwrap_err();
        assert!(err.to_string().starts_with("config error"));
    }

    #[test]
    fn load_config_from_file() {
        let path = std::env::temp_dir().join(format!("morphcorpus-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[source]\ntimeout_secs = 7\n").unwrap();

        let config = load_config_from(&path).expect("load");
        assert_eq!(config.source.timeout_secs, 7);

        let _ = std::fs::remove_file(&path);
    }
}
