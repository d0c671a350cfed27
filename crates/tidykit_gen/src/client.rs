//! Generative content client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::prompt::build_prompt;
use crate::spec::{EnumContentStyle, GenerateError, SpecGenerateConfig};

/// Prompt in, generated text out.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

////////////////////////////////////////////////////////////////////////////////
// #region WireModels

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    text: Option<String>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Gemini

/// `generateContent` client bound to one resolved config.
pub struct GeminiClient {
    client: reqwest::Client,
    config: SpecGenerateConfig,
}

impl GeminiClient {
    pub fn new(config: SpecGenerateConfig) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(GenerateError::Client)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SpecGenerateConfig {
        &self.config
    }

    fn derive_request_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model.trim(),
            self.config.api_key
        )
    }
}

fn build_request_body(prompt: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            parts: vec![GeminiPart {
                text: prompt.to_string(),
            }],
        }],
    }
}

/// Text of the first candidate, parts concatenated.
fn extract_response_text(response: GeminiResponse) -> Result<String, GenerateError> {
    let txt: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if txt.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }
    Ok(txt)
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        debug!(model = %self.config.model, "sending generateContent request");

        // Errors are stripped of the URL: it carries the key.
        let response = self
            .client
            .post(self.derive_request_url())
            .json(&build_request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerateError::Request(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Request(e.without_url()))?;
        if !status.is_success() {
            return Err(GenerateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        extract_response_text(serde_json::from_str(&body)?)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

/// Build the prompt for `product` and run it through `generator`.
pub async fn generate_content<G>(
    generator: &G,
    product: &str,
    style: Option<EnumContentStyle>,
) -> Result<String, GenerateError>
where
    G: ContentGenerator + ?Sized,
{
    let prompt = build_prompt(product, style);
    info!(style = ?style, n_chars_prompt = prompt.chars().count(), "[GENERATE] request");
    let txt = generator.generate(&prompt).await?;
    info!(n_chars = txt.chars().count(), "[GENERATE] done");
    Ok(txt)
}
