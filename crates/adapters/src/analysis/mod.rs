use std::path::Path;

use image::imageops::{self, FilterType};
use image::io::Reader as ImageReader;
use image::RgbImage;
use leaf_ingest_application::{ApplicationError, ImageAnalyzer};
use leaf_ingest_domain::{ImageStats, PreprocessedImage};

const CHANNELS: u32 = 3;

#[derive(Debug, Default)]
pub struct ImageCrateAnalyzer;

impl ImageAnalyzer for ImageCrateAnalyzer {
    fn analyze(&self, path: &Path) -> Result<ImageStats, ApplicationError> {
        let image = load_rgb(path)?;
        Ok(color_stats(&image))
    }

    fn preprocess(
        &self,
        path: &Path,
        target_width: u32,
        target_height: u32,
    ) -> Result<PreprocessedImage, ApplicationError> {
        let image = load_rgb(path)?;
        Ok(normalize(&image, target_width, target_height))
    }
}

fn load_rgb(path: &Path) -> Result<RgbImage, ApplicationError> {
    let image = ImageReader::open(path)
        .map_err(|error| ApplicationError::Io(error.to_string()))?
        .with_guessed_format()
        .map_err(|error| ApplicationError::Io(error.to_string()))?
        .decode()
        .map_err(|error| ApplicationError::Decode(error.to_string()))?;
    Ok(image.to_rgb8())
}

pub fn color_stats(image: &RgbImage) -> ImageStats {
    let pixel_count = u64::from(image.width()) * u64::from(image.height());
    let mut channel_sums = [0_u64; 3];
    let mut hue_sum = 0_u64;
    let mut value_sum = 0_u64;

    for pixel in image.pixels() {
        let [r, g, b] = pixel.0;
        channel_sums[0] += u64::from(r);
        channel_sums[1] += u64::from(g);
        channel_sums[2] += u64::from(b);
        hue_sum += u64::from(half_degree_hue(r, g, b));
        value_sum += u64::from(r.max(g).max(b));
    }

    let mean = |sum: u64| -> u8 {
        if pixel_count == 0 {
            0
        } else {
            (sum / pixel_count) as u8
        }
    };

    ImageStats {
        height: image.height(),
        width: image.width(),
        channels: CHANNELS,
        average_color_rgb: channel_sums.map(mean),
        dominant_hue: mean(hue_sum),
        brightness: mean(value_sum),
        color_variance: population_variance(image.as_raw()),
    }
}

/// Population variance over every channel value, truncated.
fn population_variance(samples: &[u8]) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    let count = samples.len() as f64;
    let mean = samples.iter().map(|&v| f64::from(v)).sum::<f64>() / count;
    let squared = samples
        .iter()
        .map(|&v| {
            let delta = f64::from(v) - mean;
            delta * delta
        })
        .sum::<f64>();
    (squared / count) as u64
}

/// Hue in half degrees (0..180) so it fits in a byte.
fn half_degree_hue(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta == 0.0 {
        return 0;
    }

    let mut degrees = if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if degrees < 0.0 {
        degrees += 360.0;
    }

    let half = (degrees / 2.0).round();
    if half >= 180.0 {
        0
    } else {
        half as u8
    }
}

pub fn normalize(image: &RgbImage, target_width: u32, target_height: u32) -> PreprocessedImage {
    let resized = imageops::resize(image, target_width, target_height, FilterType::Triangle);
    PreprocessedImage {
        width: resized.width(),
        height: resized.height(),
        channels: CHANNELS,
        pixels: resized
            .as_raw()
            .iter()
            .map(|&value| f32::from(value) / 255.0)
            .collect(),
    }
}
