//! Generation constants: config keys, defaults, prompt template.

/// Environment / secrets key holding the Gemini API key.
pub const C_ENV_API_KEY: &str = "GEMINI_KEY";
/// Environment key overriding the model id.
pub const C_ENV_MODEL: &str = "TIDYKIT_GEMINI_MODEL";
/// Environment key overriding the API base URL.
pub const C_ENV_BASE_URL: &str = "TIDYKIT_GEMINI_BASE_URL";

/// Default generative model.
pub const C_MODEL_DEFAULT: &str = "gemini-1.5-flash";
/// Default Gemini REST endpoint for model calls.
pub const C_BASE_URL_DEFAULT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Default request timeout.
pub const N_TIMEOUT_SECS_DEFAULT: u64 = 120;
/// Streamlit-style secrets file consulted when no key is given directly.
pub const C_SECRETS_PATH_DEFAULT: &str = ".streamlit/secrets.toml";

/// Prompt lead-in ("Write an advertisement for").
pub const C_PROMPT_PREFIX: &str = "Viết bài quảng cáo cho";
/// Style clause lead-in ("in the style of").
pub const C_PROMPT_STYLE_PREFIX: &str = "phong cách";
