//! Process configuration: command-line flags with environment fallbacks.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::engine::{DEFAULT_INFERENCE_URL, EngineConfig, InferenceConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "bandar-guide")]
#[command(about = "BandarAbbas AI local guide chat backend")]
pub struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding places.json, food.json, stays.json and shops.json
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory with the chat frontend (index.html)
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Re-read listing files on every request instead of once at startup
    #[arg(long, env = "RELOAD_PER_REQUEST", default_value_t = true, action = clap::ArgAction::Set)]
    pub reload_per_request: bool,

    /// Hosted text-generation endpoint
    #[arg(long, env = "INFERENCE_URL", default_value = DEFAULT_INFERENCE_URL)]
    pub inference_url: String,

    /// Bearer token for the inference endpoint
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub hf_token: Option<String>,

    /// Token budget per answer
    #[arg(long, env = "MAX_NEW_TOKENS", default_value_t = 200)]
    pub max_new_tokens: u32,

    /// Sampling temperature
    #[arg(long, env = "TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,

    /// Upper bound on the inference call, in seconds
    #[arg(long, env = "INFERENCE_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Language the guide answers in
    #[arg(long, env = "REPLY_LANGUAGE", default_value = "English")]
    pub reply_language: String,
}

/// Resolved configuration handed to the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub reload_per_request: bool,
    pub engine: EngineConfig,
    pub inference: InferenceConfig,
}

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            server: ServerConfig {
                host: cli.host,
                port: cli.port,
            },
            data_dir: cli.data_dir,
            static_dir: cli.static_dir,
            reload_per_request: cli.reload_per_request,
            engine: EngineConfig {
                reply_language: cli.reply_language,
            },
            inference: InferenceConfig {
                url: cli.inference_url,
                token: cli.hf_token.filter(|t| !t.trim().is_empty()),
                max_new_tokens: cli.max_new_tokens,
                temperature: cli.temperature,
                timeout: Duration::from_secs(cli.timeout_secs),
            },
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then parse flags and environment.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Cli::parse().into()
    }
}
