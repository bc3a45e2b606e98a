use std::path::PathBuf;

use thiserror::Error;

use crate::engine::Timings;

/// Application configuration, assembled from CLI flags.
/// The timing defaults are the reference behavior of the chart.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Number of seats in the initial row (ignored when a roster is given)
    pub seats: usize,
    /// Optional JSON roster file with seat labels
    pub roster: Option<PathBuf>,
    pub countdown_from: u32,
    pub countdown_interval_ms: u64,
    pub shuffle_duration_ms: u64,
    pub banner_ms: u64,
    /// Fixed RNG seed for reproducible shuffles
    pub seed: Option<u64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            seats: 6,
            roster: None,
            countdown_from: 3,
            countdown_interval_ms: 1000,
            shuffle_duration_ms: 600,
            banner_ms: 1500,
            seed: None,
        }
    }
}

impl ChartConfig {
    /// Fail fast on timings the engine cannot run with. The u64
    /// millisecond fields already make negative or non-finite values
    /// unrepresentable at this boundary.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shuffle_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.countdown_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    pub fn timings(&self) -> Timings {
        Timings {
            countdown_from: self.countdown_from,
            countdown_interval_ms: self.countdown_interval_ms,
            shuffle_duration_ms: self.shuffle_duration_ms,
            banner_ms: self.banner_ms,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shuffle duration must be greater than zero")]
    ZeroDuration,

    #[error("countdown interval must be greater than zero")]
    ZeroInterval,

    #[error("failed to read roster file: {0}")]
    RosterIo(#[from] std::io::Error),

    #[error("failed to parse roster file: {0}")]
    RosterParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ChartConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = ChartConfig {
            shuffle_duration_ms: 0,
            ..ChartConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroDuration)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = ChartConfig {
            countdown_interval_ms: 0,
            ..ChartConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroInterval)));
    }

    #[test]
    fn test_timings_carry_configured_values() {
        let config = ChartConfig {
            countdown_from: 5,
            shuffle_duration_ms: 250,
            ..ChartConfig::default()
        };
        let timings = config.timings();
        assert_eq!(timings.countdown_from, 5);
        assert_eq!(timings.shuffle_duration_ms, 250);
        assert_eq!(timings.banner_ms, 1500);
    }
}
