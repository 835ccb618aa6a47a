//! Runtime configuration from environment variables.
//!
//! - `QUEEN_BOARD_SIZE`: start directly on this board size instead of asking
//! - `QUEEN_SEED`: RNG seed for block/queen placement (default: clock-derived)
//! - `QUEEN_ASCII`: set to "1" or "true" to draw the queen as `Q`
//! - `QUEEN_LOG_PATH`: append log output to this file (logging is off otherwise)
//! - `QUEEN_LOG`: `env_logger` filter string (default: "info")

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::BoardSize;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub board_size: Option<BoardSize>,
    pub seed: u32,
    pub ascii_queen: bool,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    /// Problems found while reading the environment.
    ///
    /// Collected here because the logger is configured from this struct and
    /// cannot be running yet.
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: None,
            seed: time_seed(),
            ascii_queen: false,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; invalid values fall back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = non_empty("QUEEN_BOARD_SIZE") {
            match BoardSize::parse(&raw) {
                Ok(size) => config.board_size = Some(size),
                Err(err) => config
                    .warnings
                    .push(format!("ignoring QUEEN_BOARD_SIZE={raw:?}: {err}")),
            }
        }

        if let Some(raw) = non_empty("QUEEN_SEED") {
            match raw.parse::<u32>() {
                Ok(seed) => config.seed = seed,
                Err(err) => config
                    .warnings
                    .push(format!("ignoring QUEEN_SEED={raw:?}: {err}")),
            }
        }

        config.ascii_queen = non_empty("QUEEN_ASCII")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        config.log_path = non_empty("QUEEN_LOG_PATH").map(PathBuf::from);

        if let Some(filter) = non_empty("QUEEN_LOG") {
            config.log_filter = filter;
        }

        config
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.board_size, None);
        assert!(!config.ascii_queen);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_filter, "info");
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("QUEEN_BOARD_SIZE", " 12 "),
            ("QUEEN_SEED", "77"),
            ("QUEEN_ASCII", "TRUE"),
            ("QUEEN_LOG_PATH", "/tmp/queen.log"),
            ("QUEEN_LOG", "debug"),
        ]));
        assert_eq!(config.board_size, Some(BoardSize::new(12).unwrap()));
        assert_eq!(config.seed, 77);
        assert!(config.ascii_queen);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/queen.log")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn invalid_values_become_warnings() {
        let config = AppConfig::from_lookup(lookup(&[
            ("QUEEN_BOARD_SIZE", "30"),
            ("QUEEN_SEED", "-1"),
            ("QUEEN_LOG_PATH", "   "),
        ]));
        assert_eq!(config.board_size, None);
        assert_eq!(config.log_path, None);
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].contains("QUEEN_BOARD_SIZE"));
        assert!(config.warnings[1].contains("QUEEN_SEED"));
    }
}
