pub mod types;

pub use types::{AppEvent, CropRect, DeliveryMode, FailureReason, RecognitionResult};
