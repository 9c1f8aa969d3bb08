//! Configuration service implementation.
//!
//! Loads `ShellConfig` from `config.toml` (by default
//! `~/.config/mdpad/config.toml`), writing a default file on first run.

use crate::paths::MdpadPaths;
use crate::storage::AtomicTomlFile;
use mdpad_core::{Result, ShellConfig};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the shell configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration; `None` until first access or after invalidation.
    config: Arc<RwLock<Option<ShellConfig>>>,
}

impl ConfigService {
    /// Creates a service for the platform default config file.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(MdpadPaths::config_file()?))
    }

    /// Creates a service for an explicit config file (tests, `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A file that fails to parse is logged and replaced by defaults in memory;
    /// it is never overwritten.
    pub fn get_config(&self) -> ShellConfig {
        if let Ok(guard) = self.config.read()
            && let Some(cached) = guard.as_ref()
        {
            return cached.clone();
        }

        let loaded = match self.load_or_create() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "[ConfigService] Falling back to defaults, failed to load {:?}: {}",
                    self.path,
                    e
                );
                ShellConfig::default()
            }
        };

        if let Ok(mut guard) = self.config.write() {
            *guard = Some(loaded.clone());
        }
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut guard) = self.config.write() {
            *guard = None;
        }
    }

    fn load_or_create(&self) -> Result<ShellConfig> {
        let file = AtomicTomlFile::<ShellConfig>::new(self.path.clone());
        match file.load()? {
            Some(config) => Ok(config),
            None => {
                let config = ShellConfig::default();
                file.save(&config)?;
                tracing::info!("[ConfigService] Wrote default config to {:?}", self.path);
                Ok(config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(&path);

        let config = service.get_config();

        assert_eq!(config, ShellConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_existing_file_is_respected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "app_name = \"notes\"\nmax_recent_documents = 3\n").unwrap();

        let config = ConfigService::with_path(&path).get_config();

        assert_eq!(config.app_name, "notes");
        assert_eq!(config.max_recent_documents, 3);
    }

    #[test]
    fn test_invalid_file_falls_back_without_overwriting() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "app_name = [").unwrap();

        let config = ConfigService::with_path(&path).get_config();

        assert_eq!(config, ShellConfig::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "app_name = [");
    }

    #[test]
    fn test_invalidate_cache_rereads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(&path);
        assert_eq!(service.get_config().app_name, "mdpad");

        std::fs::write(&path, "app_name = \"renamed\"\n").unwrap();
        assert_eq!(service.get_config().app_name, "mdpad");

        service.invalidate_cache();
        assert_eq!(service.get_config().app_name, "renamed");
    }
}
