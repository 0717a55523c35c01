use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Clamped sub-region of a source image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Why a recognition produced no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Backend reported a failure; carries its message.
    RecognitionFailed(String),
    ConnectivityUnavailable,
}

/// Outcome of a single recognition. Empty text is still a success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecognitionResult {
    Success(String),
    Failure(FailureReason),
}

impl RecognitionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RecognitionResult::Success(_))
    }

    /// Collapse into the callback contract's view: failures read as `""`.
    pub fn into_text_or_empty(self) -> String {
        match self {
            RecognitionResult::Success(text) => text,
            RecognitionResult::Failure(_) => String::new(),
        }
    }
}

/// Which delivery contract a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    Callback,
    Observable,
    Both,
}

impl FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "callback" => Ok(Self::Callback),
            "observable" => Ok(Self::Observable),
            "both" => Ok(Self::Both),
            other => Err(format!("unknown delivery mode '{other}'")),
        }
    }
}

impl DeliveryMode {
    pub fn uses_callback(self) -> bool {
        matches!(self, Self::Callback | Self::Both)
    }

    pub fn uses_observable(self) -> bool {
        matches!(self, Self::Observable | Self::Both)
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Callback contract completed.
    CallbackText { invocation: Uuid, text: String },
    /// Observable contract text stream fired.
    ObservedText { invocation: Uuid, text: String },
    /// Observable contract error stream fired.
    ObservedError { invocation: Uuid, reason: String },
    /// An observable invocation closed both streams without an event.
    StreamsClosed { invocation: Uuid },
}
