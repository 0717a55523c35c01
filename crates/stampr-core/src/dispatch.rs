use std::sync::Arc;

use image::DynamicImage;
use kanal::{AsyncReceiver, AsyncSender};
use stampr_ocr::{ConnectivityGate, OcrCapability};
use stampr_types::{FailureReason, RecognitionResult};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::PipelineError;
use crate::preprocess::{Normalizer, SpaceStripper};

/// Lifecycle of one observable invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    Idle,
    AwaitingRecognition,
    /// Text stream fired.
    Completed,
    /// Error stream fired.
    Failed,
}

/// Receiving ends of an observable invocation. Each stream carries at most
/// one event and closes once the invocation settles.
pub struct RecognitionStreams {
    pub invocation: Uuid,
    pub text: AsyncReceiver<String>,
    pub errors: AsyncReceiver<String>,
    /// Resolves to the states the invocation passed through, ending in
    /// `Completed` or `Failed`.
    pub states: JoinHandle<Vec<InvocationState>>,
}

/// Submits cropped images to one OCR backend and normalizes what comes back.
#[derive(Clone)]
pub struct RecognitionDispatcher {
    ocr: Arc<dyn OcrCapability>,
}

impl RecognitionDispatcher {
    pub fn new(ocr: Arc<dyn OcrCapability>) -> Self {
        Self { ocr }
    }

    /// Run one recognition to completion. Never fails outward: backend errors
    /// and a panicking backend both become `Failure`.
    pub async fn recognize(&self, image: Arc<DynamicImage>) -> RecognitionResult {
        let ocr = self.ocr.clone();
        let result = tokio::spawn(async move { ocr.submit(&image).await }).await;

        match result {
            Ok(Ok(raw)) => {
                let text = SpaceStripper.normalize(&raw);
                tracing::debug!(
                    "[OCR] {} returned {} chars ({} after normalization)",
                    self.ocr.name(),
                    raw.len(),
                    text.len()
                );
                RecognitionResult::Success(text)
            }
            Ok(Err(e)) => {
                tracing::warn!("[OCR] {} failed: {}", self.ocr.name(), e);
                RecognitionResult::Failure(FailureReason::RecognitionFailed(e.to_string()))
            }
            Err(e) => {
                tracing::error!("[OCR] {} task error: {}", self.ocr.name(), e);
                RecognitionResult::Failure(FailureReason::RecognitionFailed(format!(
                    "task error: {e}"
                )))
            }
        }
    }

    /// Callback contract. `on_complete` runs exactly once; any failure is
    /// reported as `""`, so "no text" and "failed" look the same to it.
    pub fn recognize_with_callback<F>(&self, image: DynamicImage, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(String) + Send + 'static,
    {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            let text = dispatcher.recognize(Arc::new(image)).await.into_text_or_empty();
            on_complete(text);
        })
    }

    /// Observable contract. Returns at once; the spawned invocation consults
    /// `gate` once on the blocking pool before submitting. When it reports no
    /// connectivity nothing is submitted and only the error stream fires.
    pub fn recognize_observable(
        &self,
        image: DynamicImage,
        gate: Arc<dyn ConnectivityGate>,
    ) -> RecognitionStreams {
        let invocation = Uuid::new_v4();
        let (text_tx, text_rx) = kanal::bounded_async(1);
        let (error_tx, error_rx) = kanal::bounded_async(1);
        let mut publisher = StreamPublisher::new(invocation, text_tx, error_tx);
        let dispatcher = self.clone();

        let states = tokio::spawn(async move {
            let available = match tokio::task::spawn_blocking(move || gate.is_available()).await {
                Ok(available) => available,
                Err(e) => {
                    tracing::error!(%invocation, "[OCR] Connectivity check task error: {}", e);
                    false
                }
            };

            if !available {
                tracing::warn!(%invocation, "[OCR] Connectivity unavailable, skipping recognition");
                return publisher
                    .publish(RecognitionResult::Failure(FailureReason::ConnectivityUnavailable))
                    .await;
            }

            publisher.advance(InvocationState::AwaitingRecognition);
            tracing::debug!(%invocation, "[OCR] Submitting to {}", dispatcher.ocr.name());
            let result = dispatcher.recognize(Arc::new(image)).await;
            publisher.publish(result).await
        });

        RecognitionStreams {
            invocation,
            text: text_rx,
            errors: error_rx,
            states,
        }
    }
}

/// Sending half of one observable invocation. Publishing consumes it, which
/// closes both streams.
struct StreamPublisher {
    invocation: Uuid,
    states: Vec<InvocationState>,
    text_tx: AsyncSender<String>,
    error_tx: AsyncSender<String>,
}

impl StreamPublisher {
    fn new(invocation: Uuid, text_tx: AsyncSender<String>, error_tx: AsyncSender<String>) -> Self {
        Self {
            invocation,
            states: vec![InvocationState::Idle],
            text_tx,
            error_tx,
        }
    }

    fn advance(&mut self, state: InvocationState) {
        tracing::debug!(invocation = %self.invocation, "[OCR] -> {:?}", state);
        self.states.push(state);
    }

    async fn publish(mut self, result: RecognitionResult) -> Vec<InvocationState> {
        let invocation = self.invocation;
        let terminal = match result {
            RecognitionResult::Success(text) => {
                if self.text_tx.send(text).await.is_err() {
                    tracing::debug!(%invocation, "[OCR] Text stream dropped before delivery");
                }
                InvocationState::Completed
            }
            RecognitionResult::Failure(reason) => {
                let message = PipelineError::from(reason).to_string();
                if self.error_tx.send(message).await.is_err() {
                    tracing::debug!(%invocation, "[OCR] Error stream dropped before delivery");
                }
                InvocationState::Failed
            }
        };
        self.advance(terminal);
        self.states
    }
}
