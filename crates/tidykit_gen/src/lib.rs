//! `tidykit_gen` v1:
//! Generative marketing-copy requests.
//!
//! - `conf`   : config keys, defaults, prompt template
//! - `spec`   : config/style models and errors
//! - `config` : startup config resolution
//! - `prompt` : prompt builder
//! - `client` : `ContentGenerator` trait and the Gemini client
pub mod client;
pub mod conf;
pub mod config;
pub mod prompt;
pub mod spec;

pub use client::{ContentGenerator, GeminiClient, generate_content};
pub use conf::{C_ENV_API_KEY, C_ENV_BASE_URL, C_ENV_MODEL, C_SECRETS_PATH_DEFAULT};
pub use config::{derive_generate_config, read_secrets_api_key};
pub use prompt::build_prompt;
pub use spec::{ConfigError, EnumContentStyle, GenerateError, SpecConfigSources, SpecGenerateConfig};
