//! Host configuration, loaded from an optional JSON file.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use skirmish_core::constants::FRAME_RATE;
use skirmish_sim::engine::SimConfig;

/// Everything the host needs: the simulation setup plus pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub sim: SimConfig,
    /// Target frames per second.
    pub frame_rate: u32,
    /// Stop after this many frames; run until quit when absent.
    pub max_frames: Option<u64>,
    /// Frames between progress log lines.
    pub summary_interval: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frame_rate: FRAME_RATE,
            max_frames: None,
            summary_interval: u64::from(FRAME_RATE) * 10,
        }
    }
}

impl AppConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or use the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("failed to load config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.frame_rate > 0, "frame_rate must be positive");
        ensure!(self.summary_interval > 0, "summary_interval must be positive");
        self.sim.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.frame_rate, 100);
        assert_eq!(config.sim.initial_ships, 3);
        assert!(config.max_frames.is_none());
    }

    #[test]
    fn test_flattened_fields() {
        let config =
            AppConfig::from_json(r#"{"seed": 5, "width": 800, "height": 600, "max_frames": 10}"#)
                .unwrap();
        assert_eq!(config.sim.seed, 5);
        assert_eq!(config.sim.width, 800.0);
        assert_eq!(config.max_frames, Some(10));
        assert_eq!(config.frame_rate, 100);
    }

    #[test]
    fn test_rejects_zero_frame_rate() {
        assert!(AppConfig::from_json(r#"{"frame_rate": 0}"#).is_err());
    }

    #[test]
    fn test_rejects_empty_play_area() {
        assert!(AppConfig::from_json(r#"{"height": 0}"#).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/skirmish.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("skirmish.json"));
    }
}
