use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use image::DynamicImage;
use kanal::AsyncSender;
use stampr_core::RecognitionStreams;
use stampr_types::{AppEvent, DeliveryMode};
use uuid::Uuid;

use crate::state::AppState;

/// Starts the requested contracts on one photo and collects their outcomes.
pub struct AppController {
    state: Arc<AppState>,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn save_crop(&self, source: &DynamicImage, path: &Path) -> anyhow::Result<()> {
        match self.state.primary.cropper().crop(source) {
            Some(cropped) => {
                cropped
                    .save(path)
                    .with_context(|| format!("Failed to save crop to {}", path.display()))?;
                tracing::info!("Saved crop to {}", path.display());
            }
            None => tracing::warn!("Nothing to save, no crop possible"),
        }
        Ok(())
    }

    /// Run `mode` against `source` and wait for every started contract to
    /// report. Returns no outcomes when the source has no croppable region.
    pub async fn run(&self, source: &DynamicImage, mode: DeliveryMode) -> anyhow::Result<Vec<AppEvent>> {
        // per-run channel; concurrent runs must not share events
        let (event_tx, event_rx) = kanal::bounded_async(16);
        tracing::debug!("Running {:?} with crop geometry {:?}", mode, self.state.config.crop);
        let mut pending = 0usize;

        if mode.uses_callback() {
            let pipeline = match mode {
                DeliveryMode::Both => &self.state.local,
                _ => &self.state.primary,
            };
            let invocation = Uuid::new_v4();
            let tx = event_tx.clone();
            let started = pipeline.crop_and_recognize(source, move |text| {
                tokio::spawn(async move {
                    let _ = tx.send(AppEvent::CallbackText { invocation, text }).await;
                });
            });
            match started {
                Ok(_) => pending += 1,
                Err(e) => tracing::warn!("Callback recognition not started: {}", e),
            }
        }

        if mode.uses_observable() {
            match self.state.primary.crop_and_recognize_observable(source) {
                Ok(streams) => {
                    pending += 1;
                    tokio::spawn(forward_streams(streams, event_tx.clone()));
                }
                Err(e) => tracing::warn!("Observable recognition not started: {}", e),
            }
        }

        let mut outcomes = Vec::with_capacity(pending);
        while pending > 0 {
            let event = event_rx.recv().await?;
            log_outcome(&event);
            outcomes.push(event);
            pending -= 1;
        }

        Ok(outcomes)
    }
}

/// Turn whichever stream fires into one `AppEvent`.
async fn forward_streams(streams: RecognitionStreams, event_tx: AsyncSender<AppEvent>) {
    let invocation = streams.invocation;
    let event = tokio::select! {
        Ok(text) = streams.text.recv() => AppEvent::ObservedText { invocation, text },
        Ok(reason) = streams.errors.recv() => AppEvent::ObservedError { invocation, reason },
        else => AppEvent::StreamsClosed { invocation },
    };
    let _ = event_tx.send(event).await;
}

fn log_outcome(event: &AppEvent) {
    match event {
        AppEvent::CallbackText { invocation, text } => {
            tracing::info!(%invocation, "OCR RESULT: {}", text);
        }
        AppEvent::ObservedText { invocation, text } => {
            tracing::info!(%invocation, "OCR RESULT API: {}", text);
        }
        AppEvent::ObservedError { invocation, reason } => {
            tracing::warn!(%invocation, "{}", reason);
        }
        AppEvent::StreamsClosed { invocation } => {
            tracing::error!(%invocation, "Recognition streams closed without a result");
        }
    }
}
