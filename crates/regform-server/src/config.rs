// File: src/config.rs
// Purpose: Configuration parsing from regform.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "REGFORM_PORT";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub form: FormConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Text shown around the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_success_message")]
    pub success_message: String,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_title() -> String {
    "Form Validation".to_string()
}

fn default_success_message() -> String {
    "Form submitted successfully!".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            success_message: default_success_message(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
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
        Self::load("regform.toml")
    }

    /// Apply `REGFORM_PORT` when set
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(port) = std::env::var(PORT_ENV) {
            self.server.port = port
                .parse()
                .with_context(|| format!("{} is not a valid port: {:?}", PORT_ENV, port))?;
        }
        Ok(self)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
