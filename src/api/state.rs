use std::sync::Arc;

use crate::engine::{EngineConfig, HfClient, TextGenerator};
use crate::store::{ListingSource, ListingStore};

/// Shared state for all handlers. Nothing in here is mutated after startup.
pub struct AppState {
    pub listings: ListingSource,
    pub llm: Arc<dyn TextGenerator>,
    pub config: EngineConfig,
}

impl AppState {
    pub fn new(
        listings: ListingSource,
        llm: Arc<dyn TextGenerator>,
        config: EngineConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            listings,
            llm,
            config,
        })
    }

    pub fn from_config(config: &crate::config::AppConfig) -> anyhow::Result<Arc<Self>> {
        let store = ListingStore::new(&config.data_dir);
        let listings = ListingSource::new(store, config.reload_per_request);
        let llm = HfClient::new(config.inference.clone())?;

        Ok(Self::new(listings, Arc::new(llm), config.engine.clone()))
    }
}
