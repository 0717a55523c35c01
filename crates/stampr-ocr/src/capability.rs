use async_trait::async_trait;
use image::DynamicImage;

/// An asynchronous text recognizer.
#[async_trait]
pub trait OcrCapability: Send + Sync {
    /// Recognize text in `image`. Returns the raw, un-normalized text;
    /// an image with no text yields `Ok("")`.
    async fn submit(&self, image: &DynamicImage) -> Result<String, OcrError>;

    /// Whether recognition needs network access.
    fn requires_network(&self) -> bool;

    /// Short backend name for logs.
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Backend not configured: {0}")]
    NotConfigured(String),
}
