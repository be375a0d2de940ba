use crate::models::{ContentItem, Profile};
use crate::services::loader::{parse_catalog, parse_profiles, LoadError};
use moka::future::Cache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const DATASET_KEY: &str = "dataset";

/// Profiles and catalog loaded together from disk
#[derive(Debug, Clone)]
pub struct Dataset {
    pub profiles: Vec<Profile>,
    pub catalog: Vec<ContentItem>,
}

/// File-backed store for profiles and content
///
/// The parsed dataset is cached for `ttl` so edits on disk show up once the
/// entry expires. Failed loads are never cached.
pub struct DataStore {
    profiles_path: PathBuf,
    content_path: PathBuf,
    cache: Cache<&'static str, Arc<Dataset>>,
}

impl DataStore {
    pub fn new(
        profiles_path: impl Into<PathBuf>,
        content_path: impl Into<PathBuf>,
        ttl: Duration,
    ) -> Self {
        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(ttl)
            .build();

        Self {
            profiles_path: profiles_path.into(),
            content_path: content_path.into(),
            cache,
        }
    }

    /// Get the current dataset, reading it from disk on a cache miss
    pub async fn dataset(&self) -> Result<Arc<Dataset>, Arc<LoadError>> {
        self.cache
            .try_get_with(DATASET_KEY, self.read_dataset())
            .await
    }

    /// Drop the cached dataset so the next call re-reads the files
    pub async fn invalidate(&self) {
        self.cache.invalidate(&DATASET_KEY).await;
        tracing::debug!("Dataset cache invalidated");
    }

    async fn read_dataset(&self) -> Result<Arc<Dataset>, LoadError> {
        let profiles = parse_profiles(&read_file(&self.profiles_path).await?)?;
        let catalog = parse_catalog(&read_file(&self.content_path).await?)?;

        tracing::info!(
            "Loaded {} profiles and {} content items",
            profiles.len(),
            catalog.len()
        );

        Ok(Arc::new(Dataset { profiles, catalog }))
    }
}

async fn read_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })
}
