use std::sync::Arc;

use image::{DynamicImage, GenericImageView};
use stampr_config::crop::CropConfig;
use stampr_ocr::{ConnectivityGate, OcrCapability};
use tokio::task::JoinHandle;

use crate::crop::RegionCropper;
use crate::dispatch::{RecognitionDispatcher, RecognitionStreams};
use crate::error::PipelineError;

/// Cropper and dispatcher wired together, plus the gate the observable
/// contract consults. Holds no per-invocation state.
#[derive(Clone)]
pub struct Pipeline {
    cropper: RegionCropper,
    dispatcher: RecognitionDispatcher,
    gate: Arc<dyn ConnectivityGate>,
}

impl Pipeline {
    pub fn new(
        crop: CropConfig,
        ocr: Arc<dyn OcrCapability>,
        gate: Arc<dyn ConnectivityGate>,
    ) -> Self {
        Self {
            cropper: RegionCropper::new(crop),
            dispatcher: RecognitionDispatcher::new(ocr),
            gate,
        }
    }

    pub fn cropper(&self) -> &RegionCropper {
        &self.cropper
    }

    fn crop(&self, source: &DynamicImage) -> Result<DynamicImage, PipelineError> {
        self.cropper.crop(source).ok_or_else(|| {
            let (width, height) = source.dimensions();
            tracing::warn!("No crop possible for {}x{} source", width, height);
            PipelineError::NoCropPossible { width, height }
        })
    }

    /// Crop `source` and recognize it, calling `on_complete` exactly once with
    /// the normalized text (`""` on failure). Returns `NoCropPossible` without
    /// calling back when the source has no usable region.
    pub fn crop_and_recognize<F>(
        &self,
        source: &DynamicImage,
        on_complete: F,
    ) -> Result<JoinHandle<()>, PipelineError>
    where
        F: FnOnce(String) + Send + 'static,
    {
        let cropped = self.crop(source)?;
        Ok(self.dispatcher.recognize_with_callback(cropped, on_complete))
    }

    /// Crop `source` and recognize it, reporting through a text stream and an
    /// error stream.
    pub fn crop_and_recognize_observable(
        &self,
        source: &DynamicImage,
    ) -> Result<RecognitionStreams, PipelineError> {
        let cropped = self.crop(source)?;
        Ok(self
            .dispatcher
            .recognize_observable(cropped, self.gate.clone()))
    }
}
