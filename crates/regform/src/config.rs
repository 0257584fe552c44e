// File: src/config.rs
// Purpose: Configuration parsing from regform.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "regform.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// How the standalone page is put together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Stylesheet link emitted in the page head
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    /// JS module generated by wasm-pack for the regform-wasm crate
    #[serde(default = "default_script")]
    pub script: String,

    /// Emit the module script that wires live validation
    #[serde(default = "default_true")]
    pub client_validation: bool,
}

/// Preview server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the wasm-pack output, served under /pkg
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

fn default_title() -> String {
    "Form".to_string()
}

fn default_stylesheet() -> String {
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css".to_string()
}

fn default_script() -> String {
    "/pkg/regform_wasm.js".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_pkg_dir() -> String {
    "pkg".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            stylesheet: default_stylesheet(),
            script: default_script(),
            client_validation: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            pkg_dir: default_pkg_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./regform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.page.title, "Form");
        assert!(config.page.client_validation);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [page]
            title = "Register"
            client_validation = false

            [server]
            port = 8080
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.page.title, "Register");
        assert!(!config.page.client_validation);
        assert_eq!(config.page.script, "/pkg/regform_wasm.js");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.pkg_dir, "pkg");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("does/not/exist/regform.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("regform-bad-{}.toml", std::process::id()));
        fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        let _ = fs::remove_file(&path);
    }
}
