use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env_or;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrBackendKind {
    /// Local `tesseract` binary, works offline.
    Tesseract,
    /// HTTP recognition API, needs connectivity.
    Remote,
}

impl FromStr for OcrBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tesseract" => Ok(Self::Tesseract),
            "remote" => Ok(Self::Remote),
            other => Err(format!("unknown OCR backend '{other}'")),
        }
    }
}

fn default_backend() -> OcrBackendKind {
    OcrBackendKind::Tesseract
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_tesseract_bin() -> String {
    "tesseract".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_backend")]
    pub backend: OcrBackendKind,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_tesseract_bin")]
    pub tesseract_bin: String,
    pub api_url: String,
    pub api_key: String,
}

impl OcrConfig {
    pub fn new() -> Self {
        Self {
            backend: env_or("OCR_BACKEND", default_backend()),
            language: env_or("OCR_LANGUAGE", default_language()),
            tesseract_bin: env_or("TESSERACT_BIN", default_tesseract_bin()),
            api_url: std::env::var("OCR_API_URL").unwrap_or_default(),
            api_key: std::env::var("OCR_API_KEY").unwrap_or_default(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            language: default_language(),
            tesseract_bin: default_tesseract_bin(),
            api_url: String::new(),
            api_key: String::new(),
        }
    }
}
