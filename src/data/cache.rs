//! Local quote caching
//!
//! Caches fetched quote batches as JSON to reduce API calls and allow
//! re-running analyses offline.

use chrono::{DateTime, Duration, Utc};
use std::fs;
use std::path::PathBuf;

use crate::core::{FlowError, FlowResult, QuoteBatch};

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Cache directory
    pub cache_dir: PathBuf,
    /// Maximum age before a cached batch is considered stale (in minutes)
    pub max_age_minutes: i64,
    /// Whether to use the cache at all
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("./data/cache"),
            max_age_minutes: 15,
            enabled: true,
        }
    }
}

/// Quote batch cache
pub struct QuoteCache {
    config: CacheConfig,
}

impl QuoteCache {
    pub fn new(config: CacheConfig) -> FlowResult<Self> {
        if config.enabled && !config.cache_dir.exists() {
            fs::create_dir_all(&config.cache_dir)?;
        }

        Ok(Self { config })
    }

    fn batch_path(&self, symbol: &str) -> PathBuf {
        self.config.cache_dir.join(format!("{}_batch.json", symbol))
    }

    /// Is there a fresh cached batch for this symbol?
    pub fn is_fresh(&self, symbol: &str) -> bool {
        if !self.config.enabled {
            return false;
        }

        let path = self.batch_path(symbol);
        if !path.exists() {
            return false;
        }

        if let Ok(metadata) = fs::metadata(&path) {
            if let Ok(modified) = metadata.modified() {
                let modified: DateTime<Utc> = modified.into();
                let age = Utc::now() - modified;
                return age < Duration::minutes(self.config.max_age_minutes);
            }
        }

        false
    }

    /// Save a batch to the cache
    pub fn save(&self, batch: &QuoteBatch) -> FlowResult<()> {
        if !self.config.enabled {
            return Ok(());
        }

        let path = self.batch_path(&batch.symbol);
        let json = serde_json::to_string_pretty(batch)
            .map_err(|e| FlowError::Serialization(e.to_string()))?;
        fs::write(&path, json)?;

        tracing::info!("Cached {} quotes for {} at {:?}", batch.len(), batch.symbol, path);
        Ok(())
    }

    /// Load a fresh cached batch, `None` when absent or stale
    pub fn load(&self, symbol: &str) -> FlowResult<Option<QuoteBatch>> {
        if !self.is_fresh(symbol) {
            return Ok(None);
        }

        let json = fs::read_to_string(self.batch_path(symbol))?;
        let batch: QuoteBatch =
            serde_json::from_str(&json).map_err(|e| FlowError::Serialization(e.to_string()))?;

        tracing::info!("Loaded {} from cache", symbol);
        Ok(Some(batch))
    }

    /// Drop the cached batch for a symbol
    pub fn clear(&self, symbol: &str) -> FlowResult<()> {
        let path = self.batch_path(symbol);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Symbols with a cached batch (fresh or stale)
    pub fn cached_symbols(&self) -> FlowResult<Vec<String>> {
        let mut symbols = Vec::new();

        if !self.config.cache_dir.exists() {
            return Ok(symbols);
        }

        for entry in fs::read_dir(&self.config.cache_dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().to_string();

            if let Some(symbol) = file_name.strip_suffix("_batch.json") {
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}

/// Fetcher that serves from cache and falls back to a live pull
pub struct CachedFetcher {
    cache: QuoteCache,
}

impl CachedFetcher {
    pub fn new(config: CacheConfig) -> FlowResult<Self> {
        Ok(Self {
            cache: QuoteCache::new(config)?,
        })
    }

    /// Get the nearest-expiration batch for a symbol, from cache when fresh
    pub fn get_batch(&self, symbol: &str) -> FlowResult<QuoteBatch> {
        if let Some(batch) = self.cache.load(symbol)? {
            return Ok(batch);
        }

        tracing::info!("Fetching fresh data for {}", symbol);
        let batch = super::yahoo::YahooClient::new().get_batch(symbol, None)?;
        self.cache.save(&batch)?;

        Ok(batch)
    }

    /// Force a live pull, replacing whatever is cached
    pub fn refresh(&self, symbol: &str) -> FlowResult<QuoteBatch> {
        self.cache.clear(symbol)?;
        self.get_batch(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_clear() {
        let temp_dir = tempdir().unwrap();
        let config = CacheConfig {
            cache_dir: temp_dir.path().to_path_buf(),
            max_age_minutes: 15,
            enabled: true,
        };

        let cache = QuoteCache::new(config).unwrap();
        let batch = QuoteBatch::new("TEST", 100.0);

        cache.save(&batch).unwrap();
        assert!(cache.is_fresh("TEST"));

        let loaded = cache.load("TEST").unwrap().unwrap();
        assert_eq!(loaded.symbol, "TEST");
        assert_eq!(loaded.spot, 100.0);

        assert_eq!(cache.cached_symbols().unwrap(), vec!["TEST".to_string()]);

        cache.clear("TEST").unwrap();
        assert!(!cache.is_fresh("TEST"));
        assert!(cache.load("TEST").unwrap().is_none());
    }

    #[test]
    fn test_disabled_cache_is_passthrough() {
        let temp_dir = tempdir().unwrap();
        let config = CacheConfig {
            cache_dir: temp_dir.path().to_path_buf(),
            max_age_minutes: 15,
            enabled: false,
        };

        let cache = QuoteCache::new(config).unwrap();
        let batch = QuoteBatch::new("TEST", 100.0);

        cache.save(&batch).unwrap();
        assert!(!cache.is_fresh("TEST"));
        assert!(cache.load("TEST").unwrap().is_none());
    }
}
