//! OCR backends and the connectivity gate consulted before network-backed
//! recognition. Everything here treats the engine as a black box: an image
//! goes in, text (or an error) eventually comes out.

mod capability;
mod connectivity;
mod encode;
mod remote;
mod tesseract;

use std::sync::Arc;

use stampr_config::ocr::{OcrBackendKind, OcrConfig};

pub use capability::{OcrCapability, OcrError};
pub use connectivity::{ConnectivityGate, StaticGate, TcpProbeGate};
pub use encode::encode_png;
pub use remote::RemoteOcr;
pub use tesseract::TesseractOcr;

/// Build the backend selected in `config`.
pub fn build_backend(config: &OcrConfig) -> Result<Arc<dyn OcrCapability>, OcrError> {
    match config.backend {
        OcrBackendKind::Tesseract => Ok(Arc::new(TesseractOcr::new(
            config.tesseract_bin.clone(),
            config.language.clone(),
        ))),
        OcrBackendKind::Remote => {
            if config.api_url.is_empty() {
                return Err(OcrError::NotConfigured(
                    "remote backend selected but OCR_API_URL is empty".to_string(),
                ));
            }
            Ok(Arc::new(RemoteOcr::new(
                config.api_url.clone(),
                config.api_key.clone(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_without_url_is_rejected() {
        let config = OcrConfig {
            backend: OcrBackendKind::Remote,
            ..OcrConfig::default()
        };
        assert!(matches!(
            build_backend(&config),
            Err(OcrError::NotConfigured(_))
        ));
    }

    #[test]
    fn network_requirement_follows_backend() {
        let local = build_backend(&OcrConfig::default()).unwrap();
        assert!(!local.requires_network());

        let config = OcrConfig {
            backend: OcrBackendKind::Remote,
            api_url: "http://localhost:9000/ocr".to_string(),
            ..OcrConfig::default()
        };
        let remote = build_backend(&config).unwrap();
        assert!(remote.requires_network());
        assert_eq!(remote.name(), "remote");
    }
}
