//! Generation config, style options and error types.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::conf::{C_BASE_URL_DEFAULT, C_MODEL_DEFAULT, N_TIMEOUT_SECS_DEFAULT};

////////////////////////////////////////////////////////////////////////////////
// #region Config

/// Resolved connection settings for the generative API.
///
/// Built once at startup and handed to the client; nothing is read from the
/// environment afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct SpecGenerateConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl SpecGenerateConfig {
    /// Config with default model, endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: C_MODEL_DEFAULT.to_string(),
            base_url: C_BASE_URL_DEFAULT.to_string(),
            timeout_secs: N_TIMEOUT_SECS_DEFAULT,
        }
    }
}

impl fmt::Debug for SpecGenerateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecGenerateConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Raw config inputs, highest precedence first for the key.
#[derive(Debug, Clone, Default)]
pub struct SpecConfigSources {
    /// Key from a CLI flag or the process environment.
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Secrets TOML consulted when `api_key` is absent.
    pub secrets_path: Option<PathBuf>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Style

/// Optional tone requested for generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumContentStyle {
    Humorous,
    Professional,
    EmotionalAppeal,
    DeepDiscount,
}

impl EnumContentStyle {
    pub const ALL: [Self; 4] = [
        Self::Humorous,
        Self::Professional,
        Self::EmotionalAppeal,
        Self::DeepDiscount,
    ];

    /// Stable option id (`humorous`, `deep-discount`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Humorous => "humorous",
            Self::Professional => "professional",
            Self::EmotionalAppeal => "emotional-appeal",
            Self::DeepDiscount => "deep-discount",
        }
    }

    /// Display label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Humorous => "Humorous",
            Self::Professional => "Professional",
            Self::EmotionalAppeal => "Emotional appeal",
            Self::DeepDiscount => "Deep discount",
        }
    }

    /// Descriptor spliced into the prompt.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::Humorous => "hài hước",
            Self::Professional => "chuyên nghiệp",
            Self::EmotionalAppeal => "đánh vào cảm xúc",
            Self::DeepDiscount => "giảm giá sâu",
        }
    }
}

impl fmt::Display for EnumContentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnumContentStyle {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c_key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == c_key)
            .ok_or_else(|| {
                GenerateError::InvalidStyle(format!(
                    "Unknown content style {s:?}; expected one of: {}.",
                    Self::ALL.map(|style| style.as_str()).join(", ")
                ))
            })
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Startup configuration errors; all are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is not configured: set GEMINI_KEY in the environment, a .env file or {0}.")]
    MissingApiKey(String),
    #[error("Failed to read secrets file {path}: {source}")]
    SecretsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse secrets file {path}: {source}")]
    SecretsParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Generation call failures, surfaced verbatim to the caller.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("Request failed: {0}")]
    Request(reqwest::Error),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid response format: no generated text")]
    EmptyResponse,
    #[error("{0}")]
    InvalidStyle(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
