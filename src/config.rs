use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Settings for a subset-construction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeterminizeConfig {
    /// Upper bound on the number of DFA states. Construction aborts with
    /// [crate::error::AutomatonError::StateLimitExceeded] once it is
    /// exceeded. `None` means unbounded.
    max_states: Option<usize>,
    /// Emit an info event every `progress_interval` discovered states. 0
    /// disables progress events.
    progress_interval: usize,
}

/// A [DeterminizeConfig] as read from a file, where every field may be
/// missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialDeterminizeConfig {
    max_states: Option<usize>,
    progress_interval: Option<usize>,
}

impl Default for DeterminizeConfig {
    fn default() -> Self {
        DeterminizeConfig {
            max_states: None,
            progress_interval: 1000,
        }
    }
}

impl DeterminizeConfig {
    pub fn from_partial(partial: PartialDeterminizeConfig) -> Self {
        let default = DeterminizeConfig::default();

        DeterminizeConfig {
            max_states: partial.max_states.or(default.max_states),
            progress_interval: partial
                .progress_interval
                .unwrap_or(default.progress_interval),
        }
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let partial = toml::from_str(content).context("Invalid determinize config")?;
        Ok(Self::from_partial(partial))
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> anyhow::Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read config file {}", file_path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_optional_file<P: AsRef<Path>>(file_path: Option<P>) -> anyhow::Result<Self> {
        match file_path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn with_max_states(mut self, max_states: Option<usize>) -> Self {
        self.max_states = max_states;
        self
    }

    pub fn set_max_states(&mut self, max_states: Option<usize>) {
        self.max_states = max_states;
    }

    pub fn get_max_states(&self) -> Option<usize> {
        self.max_states
    }

    pub fn with_progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    pub fn set_progress_interval(&mut self, progress_interval: usize) {
        self.progress_interval = progress_interval;
    }

    pub fn get_progress_interval(&self) -> usize {
        self.progress_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DeterminizeConfig::from_toml_str("").unwrap();
        assert_eq!(config, DeterminizeConfig::default());
        assert_eq!(config.get_max_states(), None);
        assert_eq!(config.get_progress_interval(), 1000);
    }

    #[test]
    fn test_partial_config() {
        let config = DeterminizeConfig::from_toml_str("max_states = 64").unwrap();
        assert_eq!(config.get_max_states(), Some(64));
        assert_eq!(config.get_progress_interval(), 1000);

        let config = DeterminizeConfig::from_toml_str("progress_interval = 0").unwrap();
        assert_eq!(config.get_max_states(), None);
        assert_eq!(config.get_progress_interval(), 0);
    }

    #[test]
    fn test_invalid_config() {
        assert!(DeterminizeConfig::from_toml_str("max_states = \"many\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(DeterminizeConfig::from_file("./does/not/exist.toml").is_err());
        assert_eq!(
            DeterminizeConfig::from_optional_file(None::<&str>).unwrap(),
            DeterminizeConfig::default()
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DeterminizeConfig::default()
            .with_max_states(Some(64))
            .with_progress_interval(5);

        let serialized = toml::to_string(&config).unwrap();
        assert_eq!(DeterminizeConfig::from_toml_str(&serialized).unwrap(), config);

        let unbounded = DeterminizeConfig::default().with_progress_interval(5);
        let serialized = toml::to_string(&unbounded).unwrap();
        assert!(!serialized.contains("max_states"));
        assert_eq!(
            DeterminizeConfig::from_toml_str(&serialized).unwrap(),
            unbounded
        );
    }

    #[test]
    fn test_builders() {
        let mut config = DeterminizeConfig::default()
            .with_max_states(Some(3))
            .with_progress_interval(10);
        assert_eq!(config.get_max_states(), Some(3));

        config.set_max_states(None);
        config.set_progress_interval(1);
        assert_eq!(config.get_max_states(), None);
        assert_eq!(config.get_progress_interval(), 1);
    }
}
