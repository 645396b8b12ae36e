//! Configuration handling for the waitlist page

use crate::state::Variant;
use crate::submitter::SimulatedSubmitter;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the page variant
pub const VARIANT_ENV: &str = "WAITLIST_VARIANT";
/// Environment variable overriding the simulated submission delay
pub const SUBMIT_DELAY_ENV: &str = "WAITLIST_SUBMIT_DELAY_MS";

const DEFAULT_BRAND: &str = "ACME";

/// User configuration for the waitlist page
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WaitlistConfig {
    /// Presentational variant
    pub variant: Option<Variant>,
    /// Brand shown in the header and footer
    pub brand: Option<String>,
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
}

impl WaitlistConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "acme", "waitlist-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: WaitlistConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply `WAITLIST_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(VARIANT_ENV).ok().as_deref(),
            std::env::var(SUBMIT_DELAY_ENV).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, variant: Option<&str>, delay_ms: Option<&str>) -> Self {
        if let Some(raw) = variant {
            match raw.parse::<Variant>() {
                Ok(v) => self.variant = Some(v),
                Err(err) => tracing::warn!("Ignoring {VARIANT_ENV}: {err}"),
            }
        }
        if let Some(raw) = delay_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.submit_delay_ms = Some(ms),
                Err(err) => tracing::warn!("Ignoring {SUBMIT_DELAY_ENV}={raw}: {err}"),
            }
        }
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant.unwrap_or_default()
    }

    pub fn brand(&self) -> &str {
        self.brand
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(DEFAULT_BRAND)
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(SimulatedSubmitter::DEFAULT_DELAY)
    }
}
