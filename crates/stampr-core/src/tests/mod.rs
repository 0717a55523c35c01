//! Dispatcher and pipeline tests against in-process fake backends.


use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use image::{DynamicImage, RgbaImage};
use stampr_ocr::{ConnectivityGate, OcrCapability, OcrError};

/// Backend that answers with a fixed result and counts submissions.
pub(crate) struct FakeOcr {
    response: Result<String, String>,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeOcr {
    pub(crate) fn text(text: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(text.to_string()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn failing(cause: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(cause.to_string()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn slow_text(text: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(text.to_string()),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OcrCapability for FakeOcr {
    async fn submit(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.response.clone().map_err(OcrError::Engine)
    }

    fn requires_network(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Backend whose recognition task panics.
pub(crate) struct PanickingOcr;

#[async_trait]
impl OcrCapability for PanickingOcr {
    async fn submit(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        panic!("engine crashed");
    }

    fn requires_network(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "panicking"
    }
}

/// Gate with a fixed answer that counts how often it was asked.
pub(crate) struct CountingGate {
    available: bool,
    checks: AtomicUsize,
}

impl CountingGate {
    pub(crate) fn new(available: bool) -> Arc<Self> {
        Arc::new(Self {
            available,
            checks: AtomicUsize::new(0),
        })
    }

    pub(crate) fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

impl ConnectivityGate for CountingGate {
    fn is_available(&self) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst);
        self.available
    }
}

/// Gate that blocks its thread like a probe against an unresponsive host.
pub(crate) struct StallingGate {
    pub(crate) stall: Duration,
    pub(crate) available: bool,
}

impl ConnectivityGate for StallingGate {
    fn is_available(&self) -> bool {
        std::thread::sleep(self.stall);
        self.available
    }
}

pub(crate) fn photo(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::new(width, height))
}
