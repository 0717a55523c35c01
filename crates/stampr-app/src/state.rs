use std::sync::Arc;

use stampr_config::Config;
use stampr_core::Pipeline;
use stampr_ocr::{ConnectivityGate, OcrCapability, StaticGate, TcpProbeGate, TesseractOcr};

pub struct AppState {
    pub config: Config,
    /// Configured backend; serves the observable contract, and the callback
    /// contract when it runs alone.
    pub primary: Pipeline,
    /// On-device tesseract; serves the callback contract in `both` mode.
    pub local: Pipeline,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let backend = stampr_ocr::build_backend(&config.ocr)?;
        tracing::info!("Using {} OCR backend", backend.name());

        let gate: Arc<dyn ConnectivityGate> = if backend.requires_network() {
            Arc::new(TcpProbeGate::from_config(&config.network))
        } else {
            Arc::new(StaticGate(true))
        };

        let local: Arc<dyn OcrCapability> = Arc::new(TesseractOcr::new(
            config.ocr.tesseract_bin.clone(),
            config.ocr.language.clone(),
        ));

        let primary = Pipeline::new(config.crop, backend, gate);
        let local = Pipeline::new(config.crop, local, Arc::new(StaticGate(true)));

        Ok(Self::with_pipelines(config, primary, local))
    }

    pub fn with_pipelines(config: Config, primary: Pipeline, local: Pipeline) -> Self {
        Self {
            config,
            primary,
            local,
        }
    }
}
