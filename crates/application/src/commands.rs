use std::path::PathBuf;

use leaf_ingest_domain::CategorySource;

pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";
pub const DEFAULT_SAMPLE_LIMIT: i64 = 3;
pub const DEFAULT_PREPROCESS_SIZE: u32 = 256;

/// Immutable settings an importer is built with.
#[derive(Debug, Clone)]
pub struct ImportSettings {
    pub categories: Vec<CategorySource>,
    pub extension: String,
}

#[derive(Debug, Clone, Copy)]
pub struct SampleQuery {
    pub limit: i64,
}

impl Default for SampleQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageCommand {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PreprocessImageCommand {
    pub path: PathBuf,
    pub target_width: u32,
    pub target_height: u32,
}

impl PreprocessImageCommand {
    pub fn square(path: PathBuf) -> Self {
        Self {
            path,
            target_width: DEFAULT_PREPROCESS_SIZE,
            target_height: DEFAULT_PREPROCESS_SIZE,
        }
    }
}
