//! Crop-and-recognize pipeline: select the bottom-left region of a photo,
//! run it through an OCR backend, strip spaces from the result, and deliver
//! it either through a one-shot callback or a pair of result streams.

pub mod crop;
pub mod dispatch;
pub mod error;
pub mod pipeline;
pub mod preprocess;

pub use crop::RegionCropper;
pub use dispatch::{InvocationState, RecognitionDispatcher, RecognitionStreams};
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use preprocess::{Normalizer, SpaceStripper};

#[cfg(test)]
mod tests;
