use std::path::Path;

use serde::{Deserialize, Serialize};

/// Metadata for one source image, ready to be written as a table row.
///
/// `file_size_kb` and `resolution` are derived in [`ImageRecord::new`] and
/// cannot be set independently of the byte size and dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    file_name: String,
    file_path: String,
    file_size_kb: f64,
    resolution: String,
    width: u32,
    height: u32,
}

impl ImageRecord {
    pub fn new(file_path: &Path, file_size_bytes: u64, width: u32, height: u32) -> Self {
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            file_name,
            file_path: file_path.to_string_lossy().to_string(),
            file_size_kb: bytes_to_kb(file_size_bytes),
            resolution: format!("{width}x{height}"),
            width,
            height,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn file_size_kb(&self) -> f64 {
        self.file_size_kb
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Kilobytes rounded to two decimals, ties to even.
pub fn bytes_to_kb(bytes: u64) -> f64 {
    (bytes as f64 * 100.0 / 1024.0).round_ties_even() / 100.0
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// A row read back from a category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRow {
    pub file_path: String,
    pub label: String,
}

impl SampleRow {
    pub fn file_name(&self) -> String {
        Path::new(&self.file_path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file_path.clone())
    }
}
