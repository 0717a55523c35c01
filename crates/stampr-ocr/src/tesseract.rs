use std::process::Stdio;

use async_trait::async_trait;
use image::DynamicImage;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::{OcrCapability, OcrError, encode_png};

/// Runs the `tesseract` CLI, piping a PNG through stdin.
pub struct TesseractOcr {
    bin: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(bin: String, language: String) -> Self {
        Self { bin, language }
    }
}

#[async_trait]
impl OcrCapability for TesseractOcr {
    async fn submit(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let png = encode_png(image)?;

        let mut child = Command::new(&self.bin)
            .args(["stdin", "stdout", "-l", &self.language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        // an early exit (bad language, bad args) closes stdin; its stderr
        // says why, so the write error only matters if the exit was clean
        let mut write_error = None;
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(&png).await {
                tracing::debug!("{} stopped reading stdin: {}", self.bin, e);
                write_error = Some(e);
            }
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(format!(
                "{} exited with {}: {}",
                self.bin,
                output.status,
                stderr.trim()
            )));
        }

        if let Some(e) = write_error {
            return Err(OcrError::Io(e));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        // tesseract terminates every page with a newline and a form feed
        Ok(text.trim_end_matches(['\n', '\x0c']).to_string())
    }

    fn requires_network(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}
