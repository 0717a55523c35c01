use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_probe_addr() -> String {
    "1.1.1.1:443".to_string()
}

fn default_probe_timeout_ms() -> u64 {
    1500
}

/// Where and how long to probe before a network-backed recognition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_probe_addr")]
    pub probe_addr: String,
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self {
            probe_addr: env_or("CONNECTIVITY_PROBE_ADDR", default_probe_addr()),
            probe_timeout_ms: env_or("CONNECTIVITY_TIMEOUT_MS", default_probe_timeout_ms()),
        }
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            probe_addr: default_probe_addr(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}
