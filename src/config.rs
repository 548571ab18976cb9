//! Application configuration
//!
//! The API credential is ambient: it is read from the environment exactly
//! once at startup and its absence is a fatal configuration error. Model
//! selection and logging verbosity may be tuned through an optional TOML
//! file; everything else has sensible defaults.

use crate::log_debug;

use anyhow::{Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Legacy fallback environment variable
pub const API_KEY_ENV_FALLBACK: &str = "API_KEY";

/// Configuration structure for the mailmuse application
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Text-generation model used for campaigns and chat
    #[serde(default = "default_model")]
    pub model: String,
    /// Image-generation model used for hero images
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Whether to include noisy external-library logs (HTTP internals)
    #[serde(default)]
    pub verbose_logging: bool,
    /// API key resolved from the environment, never written to disk
    #[serde(skip)]
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            image_model: default_image_model(),
            verbose_logging: false,
            api_key: String::new(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

impl Config {
    /// Load the configuration file (if present) and resolve the API key
    ///
    /// A missing API key is a fatal startup condition; every remote call
    /// depends on it and failing later at call time gives a worse message.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;

        config.api_key = resolve_api_key().ok_or_else(|| {
            anyhow!(
                "No API key found. Set the {API_KEY_ENV} environment variable \
                 (or {API_KEY_ENV_FALLBACK}) before starting mailmuse."
            )
        })?;

        log_debug!(
            "Configuration loaded: model={}, image_model={}",
            config.model,
            config.image_model
        );
        Ok(config)
    }

    /// Load only the TOML file portion, with defaults when absent
    pub fn load_file() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Path to the optional configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = config_dir().ok_or_else(|| anyhow!("Unable to determine config directory"))?;
        Ok(config_dir.join("mailmuse").join("config.toml"))
    }
}

/// Resolve the API key from the environment, preferring the Gemini name
fn resolve_api_key() -> Option<String> {
    select_api_key(
        env::var(API_KEY_ENV).ok(),
        env::var(API_KEY_ENV_FALLBACK).ok(),
    )
}

/// Pick the effective API key from the two candidate variables
///
/// Blank values count as unset so an `export GEMINI_API_KEY=` typo still
/// fails fast at startup instead of at the first remote call.
pub fn select_api_key(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|key| !key.trim().is_empty())
        .or(fallback)
        .filter(|key| !key.trim().is_empty())
}
