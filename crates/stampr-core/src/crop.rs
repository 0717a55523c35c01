use image::{DynamicImage, GenericImageView};
use stampr_config::crop::CropConfig;
use stampr_types::CropRect;

/// Selects the fixed bottom-left window of a photo where overlay stamps live.
#[derive(Debug, Clone, Copy)]
pub struct RegionCropper {
    config: CropConfig,
}

impl RegionCropper {
    pub fn new(config: CropConfig) -> Self {
        Self { config }
    }

    /// Clamped crop rectangle for a `width` x `height` source, or `None` when
    /// the clamped window is empty.
    ///
    /// The top edge sits `bottom_margin_px` above the bottom. When the source
    /// is shorter than the margin the top clamps to 0 and the height is then
    /// measured from that clamped top, so the window can cover the whole
    /// source.
    pub fn crop_rect(&self, width: u32, height: u32) -> Option<CropRect> {
        let (source_width, source_height) = (i64::from(width), i64::from(height));

        let left: i64 = 0;
        let top = source_height - i64::from(self.config.bottom_margin_px);

        let crop_left = left.max(0);
        let crop_top = top.max(0);
        let crop_width = (source_width - crop_left).min(i64::from(self.config.target_width_px));
        let crop_height = (source_height - crop_top).min(i64::from(self.config.target_height_px));

        if crop_width > 0 && crop_height > 0 {
            Some(CropRect {
                left: crop_left as u32,
                top: crop_top as u32,
                width: crop_width as u32,
                height: crop_height as u32,
            })
        } else {
            None
        }
    }

    /// Copy the crop window out of `source` into a fresh image.
    pub fn crop(&self, source: &DynamicImage) -> Option<DynamicImage> {
        let (width, height) = source.dimensions();
        let rect = self.crop_rect(width, height)?;
        tracing::debug!(
            "Cropping {}x{} source to {}x{} at ({}, {})",
            width,
            height,
            rect.width,
            rect.height,
            rect.left,
            rect.top
        );
        Some(source.crop_imm(rect.left, rect.top, rect.width, rect.height))
    }
}

impl Default for RegionCropper {
    fn default() -> Self {
        Self::new(CropConfig::default())
    }
}
