//! Startup config resolution: flags/env first, then the secrets file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::conf::{
    C_BASE_URL_DEFAULT, C_MODEL_DEFAULT, C_SECRETS_PATH_DEFAULT, N_TIMEOUT_SECS_DEFAULT,
};
use crate::spec::{ConfigError, SpecConfigSources, SpecGenerateConfig};

#[derive(Debug, Default, Deserialize)]
struct SpecSecretsFile {
    #[serde(rename = "GEMINI_KEY")]
    gemini_key: Option<String>,
}

fn derive_non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|val| !val.is_empty())
        .map(str::to_string)
}

/// Read `GEMINI_KEY` from a secrets TOML; a missing file yields `Ok(None)`.
pub fn read_secrets_api_key(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.is_file() {
        debug!(path = %path.display(), "secrets file not found");
        return Ok(None);
    }

    let txt = fs::read_to_string(path).map_err(|source| ConfigError::SecretsRead {
        path: path.to_path_buf(),
        source,
    })?;
    let secrets: SpecSecretsFile =
        toml::from_str(&txt).map_err(|source| ConfigError::SecretsParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(derive_non_blank(secrets.gemini_key.as_deref()))
}

/// Resolve the generation config; an absent or blank key is an error.
pub fn derive_generate_config(
    sources: &SpecConfigSources,
) -> Result<SpecGenerateConfig, ConfigError> {
    let path_secrets = sources
        .secrets_path
        .as_deref()
        .unwrap_or_else(|| Path::new(C_SECRETS_PATH_DEFAULT));

    let api_key = match derive_non_blank(sources.api_key.as_deref()) {
        Some(key) => key,
        None => read_secrets_api_key(path_secrets)?.ok_or_else(|| {
            ConfigError::MissingApiKey(path_secrets.display().to_string())
        })?,
    };

    let model =
        derive_non_blank(sources.model.as_deref()).unwrap_or_else(|| C_MODEL_DEFAULT.to_string());
    let base_url = derive_non_blank(sources.base_url.as_deref())
        .unwrap_or_else(|| C_BASE_URL_DEFAULT.to_string())
        .trim_end_matches('/')
        .to_string();

    Ok(SpecGenerateConfig {
        api_key,
        model,
        base_url,
        timeout_secs: sources.timeout_secs.unwrap_or(N_TIMEOUT_SECS_DEFAULT),
    })
}
