//! Simple CLI configuration loader for claimpulse
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./claimpulse.json or ./.claimpulse/config.json
//! 3. User config: ~/.config/claimpulse/config.json (platform equivalent)
//! 4. Built-in defaults (no files)

use anyhow::{anyhow, Context, Result};
use claimpulse_core::DemoConfig;
use std::path::{Path, PathBuf};

/// CLI configuration loader
pub struct DemoConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    seed_override: Option<u64>,
    delay_override: Option<u64>,
    skip_delays_override: bool,
}

impl DemoConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            seed_override: None,
            delay_override: None,
            skip_delays_override: false,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set seed override
    pub fn with_seed_override(mut self, seed: u64) -> Self {
        self.seed_override = Some(seed);
        self
    }

    /// Set delay override (milliseconds)
    pub fn with_delay_override(mut self, delay_ms: u64) -> Self {
        self.delay_override = Some(delay_ms);
        self
    }

    /// Skip all simulated processing delays
    pub fn with_skip_delays(mut self, skip: bool) -> Self {
        self.skip_delays_override = skip;
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<DemoConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            // Use explicit config override
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            // Search in priority order
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(seed) = self.seed_override {
            config.seed = Some(seed);
        }
        if let Some(delay_ms) = self.delay_override {
            config.delay_ms = Some(delay_ms);
        }
        if self.skip_delays_override {
            config.skip_delays = true;
        }

        Ok(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<DemoConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. User config directory
        if let Some(config) = self.try_load_user_config().await? {
            return Ok(config);
        }

        // 3. Built-in defaults
        Ok(DemoConfig::default())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<DemoConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./claimpulse.json first
        let claimpulse_json = cwd.join("claimpulse.json");
        if claimpulse_json.exists() {
            return Ok(Some(self.load_file(&claimpulse_json).await?));
        }

        // Try ./.claimpulse/config.json
        let dir_config = cwd.join(".claimpulse").join("config.json");
        if dir_config.exists() {
            return Ok(Some(self.load_file(&dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from the user config directory
    async fn try_load_user_config(&self) -> Result<Option<DemoConfig>> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("claimpulse").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<DemoConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<DemoConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for DemoConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_flag_overrides_beat_file_values() {
        let path = std::env::temp_dir().join(format!(
            "claimpulse-loader-test-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, r#"{"seed": 1, "delay_ms": 100}"#)
            .await
            .expect("write temp config");

        let config = DemoConfigLoader::new()
            .with_config_override(path.clone())
            .with_seed_override(42)
            .with_skip_delays(true)
            .load()
            .await
            .expect("load config");

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.delay_ms, Some(100));
        assert!(config.skip_delays);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_missing_override_path_is_an_error() {
        let result = DemoConfigLoader::new()
            .with_config_override(PathBuf::from("/definitely/not/here.json"))
            .load()
            .await;
        assert!(result.is_err());
    }
}
