use async_trait::async_trait;
use image::DynamicImage;

use crate::{OcrCapability, OcrError, encode_png};

/// HTTP recognition API. POSTs the PNG body, expects `{"text": "..."}` back.
#[derive(Clone)]
pub struct RemoteOcr {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl RemoteOcr {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, api_key)
    }

    /// Use a preconfigured client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl OcrCapability for RemoteOcr {
    async fn submit(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let png = encode_png(image)?;

        let mut request = self
            .client
            .post(&self.api_url)
            .header(reqwest::header::CONTENT_TYPE, "image/png")
            .body(png);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(OcrError::ApiError(format!("HTTP {}", response.status())));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| OcrError::ApiError(format!("Failed to parse response: {}", e)))?;

        let text = json["text"]
            .as_str()
            .ok_or_else(|| OcrError::ApiError("No text in response".to_string()))?;

        Ok(text.to_string())
    }

    fn requires_network(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "remote"
    }
}
