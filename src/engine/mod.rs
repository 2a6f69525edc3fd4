mod config;
pub mod context;
pub mod generator;
pub mod intent;
pub mod retriever;

pub use config::{DEFAULT_INFERENCE_URL, EngineConfig, InferenceConfig};
pub use generator::{HfClient, TextGenerator};

use thiserror::Error;

use crate::store::ListingSource;

/// Canned reply to a bare greeting
pub const GREETING_REPLY: &str = "Hello! I'm BandarAbbas AI, your local guide. \
Ask me about restaurants, hotels, shops or attractions in Bandar Abbas, \
for example: \"a good fish restaurant in Soro\".";

/// Reply when no listing matches the question
pub const NO_INFO_REPLY: &str = "I don't have information for this yet.";

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("generation failed: {0}")]
    Generation(String),

    #[error("listing load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Answer one question end to end.
///
/// Greetings short-circuit before any data is read. Otherwise the single
/// best listing (if any) is handed to the generator.
pub async fn answer(
    question: &str,
    source: &ListingSource,
    llm: &dyn TextGenerator,
    config: &EngineConfig,
) -> Result<String, EngineError> {
    if intent::is_greeting(question) {
        return Ok(GREETING_REPLY.into());
    }

    let listings = source.listings().await?;
    let categories = intent::classify(question);

    let Some(best) = retriever::best_match(question, &categories, &listings) else {
        tracing::info!(categories = ?categories, "no matching listing");
        return Ok(NO_INFO_REPLY.into());
    };

    tracing::info!(categories = ?categories, listing = %best.listing.name, score = best.score, "listing selected");

    Ok(generator::generate(question, best.listing, llm, config).await)
}
