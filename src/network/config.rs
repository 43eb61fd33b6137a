//! Connectivity engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid network config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunable rules of the network computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Active relays also bring their eight adjacent friendly units online.
    pub adjacency_relay_propagation: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            adjacency_relay_propagation: true,
        }
    }
}

impl NetworkConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> String {
        // A struct with only bool fields always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_adjacency() {
        assert!(NetworkConfig::default().adjacency_relay_propagation);
    }

    #[test]
    fn from_json_reads_flag() {
        let cfg = NetworkConfig::from_json(r#"{"adjacency_relay_propagation": false}"#).unwrap();
        assert!(!cfg.adjacency_relay_propagation);
    }

    #[test]
    fn from_json_fills_defaults() {
        let cfg = NetworkConfig::from_json("{}").unwrap();
        assert_eq!(cfg, NetworkConfig::default());
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(NetworkConfig::from_json("not json").is_err());
        assert!(NetworkConfig::from_json(r#"{"relay_range": 3}"#).is_err());
    }

    #[test]
    fn to_json_roundtrip() {
        let cfg = NetworkConfig {
            adjacency_relay_propagation: false,
        };
        assert_eq!(NetworkConfig::from_json(&cfg.to_json()).unwrap(), cfg);
    }
}
