//! Configuration loading.
//!
//! Settings come from a YAML file and can be overridden one by one with
//! environment variables of the same name. A missing file is tolerated and a
//! missing key stays `None` until something needs it.

use fundscan_extractor::{ExtractorConfig, OverflowPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Default completions API base URL
pub const DEFAULT_BASE_URL: &str = fundscan_llm::openai::DEFAULT_BASE_URL;

/// Default directory scanned for input PDFs
pub const DEFAULT_INPUT_DIR: &str = "data/input_data";

/// Default directory reports are written to
pub const DEFAULT_OUTPUT_DIR: &str = "data/output_data";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse YAML
    #[error("Failed to parse config YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Key needed but neither in the file nor the environment
    #[error("Missing configuration key: {0}")]
    MissingKey(&'static str),

    /// Environment value that does not parse
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },
}

/// Settings loaded from YAML and the environment
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    /// API key for the completion service
    #[serde(rename = "OPENAI_TOKEN", default)]
    pub openai_token: Option<String>,

    /// Completion model name
    #[serde(rename = "MODEL_NAME", default)]
    pub model_name: Option<String>,

    /// Candidate article numbers, tried in order
    #[serde(rename = "ARTICLE_NUMS", default)]
    pub article_nums: Option<Vec<u32>>,

    /// Base URL of an OpenAI-compatible server
    #[serde(rename = "OPENAI_BASE_URL", default)]
    pub openai_base_url: Option<String>,

    /// Directory scanned for input PDFs
    #[serde(rename = "INPUT_DIR", default)]
    pub input_dir: Option<PathBuf>,

    /// Directory reports are written to
    #[serde(rename = "OUTPUT_DIR", default)]
    pub output_dir: Option<PathBuf>,

    /// Token budget per summary chunk
    #[serde(rename = "CHUNK_TOKEN_LIMIT", default)]
    pub chunk_token_limit: Option<usize>,

    /// HTTP timeout per completion request
    #[serde(rename = "REQUEST_TIMEOUT_SECS", default)]
    pub request_timeout_secs: Option<u64>,
}

impl Settings {
    /// Load the file at `path`, then apply process environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut settings = Self::from_file(path)?;
        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Load settings from a YAML file; a missing or empty file gives defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!("Config file {} does not exist.", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Override fields with values returned by `lookup` for each key
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("OPENAI_TOKEN") {
            self.openai_token = Some(value);
        }
        if let Some(value) = lookup("MODEL_NAME") {
            self.model_name = Some(value);
        }
        if let Some(value) = lookup("ARTICLE_NUMS") {
            self.article_nums = Some(parse_article_nums(&value)?);
        }
        if let Some(value) = lookup("OPENAI_BASE_URL") {
            self.openai_base_url = Some(value);
        }
        if let Some(value) = lookup("INPUT_DIR") {
            self.input_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup("OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup("CHUNK_TOKEN_LIMIT") {
            self.chunk_token_limit = Some(parse_number("CHUNK_TOKEN_LIMIT", &value)?);
        }
        if let Some(value) = lookup("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = Some(parse_number("REQUEST_TIMEOUT_SECS", &value)?);
        }
        Ok(())
    }

    /// API key, required before any completion call
    pub fn api_token(&self) -> Result<&str, ConfigError> {
        self.openai_token
            .as_deref()
            .ok_or(ConfigError::MissingKey("OPENAI_TOKEN"))
    }

    /// Completions base URL
    pub fn base_url(&self) -> &str {
        self.openai_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Input directory
    pub fn input_dir(&self) -> PathBuf {
        self.input_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
    }

    /// Output directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Per-request HTTP timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(fundscan_llm::openai::DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Extractor configuration derived from these settings
    ///
    /// `MODEL_NAME` is required. A missing `ARTICLE_NUMS` means no article
    /// can be classified, which is logged but allowed.
    pub fn extractor_config(&self, overflow_policy: OverflowPolicy) -> Result<ExtractorConfig, ConfigError> {
        let model_name = self
            .model_name
            .clone()
            .ok_or(ConfigError::MissingKey("MODEL_NAME"))?;

        let article_nums = self.article_nums.clone().unwrap_or_else(|| {
            warn!("ARTICLE_NUMS is not set, no article will be classified");
            Vec::new()
        });

        let mut config = ExtractorConfig::new(model_name, article_nums);
        config.overflow_policy = overflow_policy;
        if let Some(limit) = self.chunk_token_limit {
            config.chunk_token_limit = limit;
        }
        Ok(config)
    }
}

/// Accept `[8, 9]` (YAML) or `8,9`
fn parse_article_nums(value: &str) -> Result<Vec<u32>, ConfigError> {
    if let Ok(nums) = serde_yaml::from_str::<Vec<u32>>(value) {
        return Ok(nums);
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ConfigError::InvalidValue {
            key: "ARTICLE_NUMS",
            value: value.to_string(),
        })
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
