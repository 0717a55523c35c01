use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::crop::CropConfig;
use self::network::NetworkConfig;
use self::ocr::OcrConfig;

pub mod crop;
pub mod network;
pub mod ocr;

pub use crop::{BOTTOM_MARGIN_PX, TARGET_HEIGHT_PX, TARGET_WIDTH_PX};
pub use ocr::OcrBackendKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crop: CropConfig,
    pub ocr: OcrConfig,
    pub network: NetworkConfig,
}

impl Config {
    /// Build from the process environment, falling back to defaults.
    pub fn new() -> Self {
        Config {
            crop: CropConfig::new(),
            ocr: OcrConfig::new(),
            network: NetworkConfig::new(),
        }
    }

    /// Load a JSON profile. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading config profile from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open config {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }
}

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
