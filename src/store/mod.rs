use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::models::{Category, Listing, Listings};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid listing JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read-only listing source backed by one JSON file per category.
#[derive(Debug, Clone)]
pub struct ListingStore {
    dir: PathBuf,
}

impl ListingStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load all four collections.
    ///
    /// Each file is independent: a missing or malformed source leaves only
    /// its own category empty.
    pub fn load(&self) -> Listings {
        let mut listings = Listings::default();

        for category in Category::ALL {
            match load_category(&self.dir.join(category.file_name())) {
                Ok(items) => *listings.get_mut(category) = items,
                Err(e) => {
                    tracing::warn!(category = ?category, error = %e, "listing source unavailable, using empty collection");
                }
            }
        }

        tracing::debug!(count = listings.len(), dir = %self.dir.display(), "listings loaded");
        listings
    }
}

fn load_category(path: &Path) -> Result<Vec<Listing>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Where request handling gets its listings from.
#[derive(Debug, Clone)]
pub enum ListingSource {
    /// Re-read the files on every request
    Live(ListingStore),
    /// Loaded once at startup
    Cached(Arc<Listings>),
}

impl ListingSource {
    pub fn new(store: ListingStore, reload_per_request: bool) -> Self {
        if reload_per_request {
            Self::Live(store)
        } else {
            Self::Cached(Arc::new(store.load()))
        }
    }

    /// Current listings. Live sources read from disk on the blocking pool.
    pub async fn listings(&self) -> Result<Arc<Listings>, tokio::task::JoinError> {
        match self {
            Self::Live(store) => {
                let store = store.clone();
                let listings = tokio::task::spawn_blocking(move || store.load()).await?;
                Ok(Arc::new(listings))
            }
            Self::Cached(listings) => Ok(Arc::clone(listings)),
        }
    }
}
