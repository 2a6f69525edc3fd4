use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::EngineError;
use super::config::{EngineConfig, InferenceConfig};
use super::context;
use crate::models::Listing;

/// Anything that can continue a prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Return only the newly generated continuation of `prompt`.
    async fn complete(&self, prompt: &str) -> Result<String, EngineError>;
}

/// Client for a hosted Hugging Face text-generation endpoint
pub struct HfClient {
    http: Client,
    config: InferenceConfig,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

impl HfClient {
    pub fn new(config: InferenceConfig) -> Result<Self, EngineError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EngineError::Generation(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerationRequest<'a> {
        GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: self.config.max_new_tokens,
                temperature: self.config.temperature,
                return_full_text: false,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for HfClient {
    async fn complete(&self, prompt: &str) -> Result<String, EngineError> {
        let mut request = self.http.post(&self.config.url).json(&self.request_body(prompt));
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| EngineError::Generation(format!("request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Generation(format!(
                "endpoint returned {}: {}",
                status,
                body.trim()
            )));
        }

        let completions: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|e| EngineError::Generation(format!("unexpected response body: {}", e)))?;

        completions
            .into_iter()
            .next()
            .map(|c| c.generated_text)
            .ok_or_else(|| EngineError::Generation("no completions returned".into()))
    }
}

/// Generate the user-facing reply about one listing.
///
/// Never fails: any generation problem is logged and replaced by the
/// canned fallback naming the listing.
pub async fn generate(
    question: &str,
    listing: &Listing,
    llm: &dyn TextGenerator,
    config: &EngineConfig,
) -> String {
    let prompt = context::build_prompt(question, listing, &config.reply_language);

    let completion = match llm.complete(&prompt).await {
        Ok(raw) => context::sanitize_completion(&raw),
        Err(e) => {
            tracing::warn!(listing = %listing.name, error = %e, "generation failed, using fallback reply");
            return context::fallback_reply(&listing.name);
        }
    };

    match completion {
        Some(text) => context::ensure_listing_named(&text, &listing.name),
        None => {
            tracing::warn!(listing = %listing.name, "empty completion, using fallback reply");
            context::fallback_reply(&listing.name)
        }
    }
}
