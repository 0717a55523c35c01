//! Controller tests with an in-process backend.

mod controller_tests;

use async_trait::async_trait;
use image::DynamicImage;
use stampr_ocr::{OcrCapability, OcrError};

pub(crate) struct EchoOcr(pub &'static str);

#[async_trait]
impl OcrCapability for EchoOcr {
    async fn submit(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        Ok(self.0.to_string())
    }

    fn requires_network(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "echo"
    }
}

pub(crate) struct BrokenOcr;

#[async_trait]
impl OcrCapability for BrokenOcr {
    async fn submit(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        Err(OcrError::Engine("no model".to_string()))
    }

    fn requires_network(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "broken"
    }
}
