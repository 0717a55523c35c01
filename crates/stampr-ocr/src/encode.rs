use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::OcrError;

/// Encode an image as PNG bytes for backends that take a file payload.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, OcrError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
