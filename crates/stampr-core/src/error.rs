use stampr_types::FailureReason;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("No crop possible for a {width}x{height} source")]
    NoCropPossible { width: u32, height: u32 },

    #[error("Recognition failed: {0}")]
    RecognitionFailed(String),

    #[error("No internet connection available")]
    ConnectivityUnavailable,
}

impl From<FailureReason> for PipelineError {
    fn from(reason: FailureReason) -> Self {
        match reason {
            FailureReason::RecognitionFailed(cause) => PipelineError::RecognitionFailed(cause),
            FailureReason::ConnectivityUnavailable => PipelineError::ConnectivityUnavailable,
        }
    }
}
