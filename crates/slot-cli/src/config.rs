use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slot_engine::SuggestOptions;
use tracing::debug;

/// CLI configuration loaded from a TOML file.
///
/// ```toml
/// [booking]
/// lead_minutes = 60
/// step_minutes = 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotsConfig {
    /// Suggestion policy; missing keys take the engine defaults
    #[serde(default)]
    pub booking: SuggestOptions,
}

impl SlotsConfig {
    /// Load config from `path`, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        debug!(config_path = %path.display(), "Loading config");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The suggestion policy with command-line overrides applied.
    pub fn suggest_options(&self, lead: Option<u32>, step: Option<u32>) -> SuggestOptions {
        let mut options = self.booking.clone();
        if let Some(lead) = lead {
            options.lead_minutes = lead;
        }
        if let Some(step) = step {
            options.step_minutes = step;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SlotsConfig::from_toml("").unwrap();
        assert_eq!(config.booking, SuggestOptions::default());
    }

    #[test]
    fn test_partial_booking_table() {
        let config = SlotsConfig::from_toml("[booking]\nlead_minutes = 60\n").unwrap();
        assert_eq!(config.booking.lead_minutes, 60);
        assert_eq!(config.booking.step_minutes, 15);
        assert_eq!(config.booking.fallback_time, "10:00");
    }

    #[test]
    fn test_flags_override_file() {
        let config =
            SlotsConfig::from_toml("[booking]\nlead_minutes = 60\nstep_minutes = 30\n").unwrap();
        let options = config.suggest_options(Some(45), None);
        assert_eq!(options.lead_minutes, 45);
        assert_eq!(options.step_minutes, 30);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = SlotsConfig::load(Some(Path::new("/nonexistent/slots.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_no_path_means_defaults() {
        assert_eq!(SlotsConfig::load(None).unwrap(), SlotsConfig::default());
    }
}
