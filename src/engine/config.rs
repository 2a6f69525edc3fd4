use std::time::Duration;

/// Default hosted text-generation endpoint
pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/google/gemma-2-2b-it";

/// Answer pipeline configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Language the model is told to answer in
    pub reply_language: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reply_language: "English".into(),
        }
    }
}

/// Outbound text-generation call settings
#[derive(Clone, Debug)]
pub struct InferenceConfig {
    pub url: String,
    /// Bearer credential. Calls without one fail and take the fallback path.
    pub token: Option<String>,
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INFERENCE_URL.into(),
            token: None,
            max_new_tokens: 200,
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }
}
