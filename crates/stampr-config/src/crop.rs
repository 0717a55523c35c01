use serde::{Deserialize, Serialize};

use crate::env_or;

/// Distance of the crop's top edge from the bottom of the source.
pub const BOTTOM_MARGIN_PX: u32 = 35;
pub const TARGET_WIDTH_PX: u32 = 400;
pub const TARGET_HEIGHT_PX: u32 = 150;

fn default_bottom_margin() -> u32 {
    BOTTOM_MARGIN_PX
}

fn default_target_width() -> u32 {
    TARGET_WIDTH_PX
}

fn default_target_height() -> u32 {
    TARGET_HEIGHT_PX
}

/// Fixed geometry of the bottom-left crop window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin_px: u32,
    #[serde(default = "default_target_width")]
    pub target_width_px: u32,
    #[serde(default = "default_target_height")]
    pub target_height_px: u32,
}

impl CropConfig {
    pub fn new() -> Self {
        Self {
            bottom_margin_px: env_or("BOTTOM_MARGIN_PX", BOTTOM_MARGIN_PX),
            target_width_px: env_or("TARGET_WIDTH_PX", TARGET_WIDTH_PX),
            target_height_px: env_or("TARGET_HEIGHT_PX", TARGET_HEIGHT_PX),
        }
    }

    pub fn with_bottom_margin(mut self, bottom_margin_px: u32) -> Self {
        self.bottom_margin_px = bottom_margin_px;
        self
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            bottom_margin_px: default_bottom_margin(),
            target_width_px: default_target_width(),
            target_height_px: default_target_height(),
        }
    }
}
