use serde::{Deserialize, Serialize};

/// Colour statistics of a decoded RGB image.
///
/// Hue uses the 0..180 half-degree scale; brightness is the mean HSV value
/// on 0..255. All means are truncated toward zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStats {
    pub height: u32,
    pub width: u32,
    pub channels: u32,
    pub average_color_rgb: [u8; 3],
    pub dominant_hue: u8,
    pub brightness: u8,
    pub color_variance: u64,
}

/// Resized image with every channel value scaled into `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub pixels: Vec<f32>,
}

impl PreprocessedImage {
    pub fn shape(&self) -> (u32, u32, u32) {
        (self.height, self.width, self.channels)
    }

    pub fn min(&self) -> Option<f32> {
        self.pixels.iter().copied().reduce(f32::min)
    }

    pub fn max(&self) -> Option<f32> {
        self.pixels.iter().copied().reduce(f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_of_empty_image_is_none() {
        let image = PreprocessedImage {
            width: 0,
            height: 0,
            channels: 3,
            pixels: Vec::new(),
        };
        assert_eq!(image.min(), None);
        assert_eq!(image.max(), None);
    }

    #[test]
    fn shape_is_height_width_channels() {
        let image = PreprocessedImage {
            width: 2,
            height: 1,
            channels: 3,
            pixels: vec![0.0, 0.5, 1.0, 0.25, 0.75, 0.1],
        };
        assert_eq!(image.shape(), (1, 2, 3));
        assert_eq!(image.min(), Some(0.0));
        assert_eq!(image.max(), Some(1.0));
    }
}
