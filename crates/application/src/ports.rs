use std::path::{Path, PathBuf};

use leaf_ingest_domain::{
    CategorySource, ImageRecord, ImageStats, PreprocessedImage, SampleRow, TableName,
};

use crate::ApplicationError;

/// Result of listing a category directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryListing {
    Missing,
    Files(Vec<PathBuf>),
}

pub trait ImageDirectory {
    /// Files directly inside `folder` whose extension matches, in listing order.
    fn list_matching(
        &self,
        folder: &Path,
        extension: &str,
    ) -> Result<DirectoryListing, ApplicationError>;
}

pub trait MetadataExtractor {
    fn extract(&self, path: &Path) -> Result<ImageRecord, ApplicationError>;
}

/// Destination for imported rows, backed by a single open connection.
pub trait ImageStore {
    fn ensure_tables(&mut self, sources: &[CategorySource]) -> Result<(), ApplicationError>;

    /// Inserts `record` inside its own transaction. On success the
    /// transaction is committed; on failure it is rolled back before
    /// returning, so the next call starts clean.
    fn insert_row(&mut self, table: &TableName, record: &ImageRecord)
        -> Result<(), ApplicationError>;

    fn close(self: Box<Self>) -> Result<(), ApplicationError>;
}

pub trait SampleSource {
    fn read_samples(
        &self,
        table: &TableName,
        limit: i64,
    ) -> Result<Vec<SampleRow>, ApplicationError>;
}

pub trait ProgressReporter {
    fn start(&self, table: &TableName, total: usize);

    fn advance(&self, table: &TableName, processed: usize, total: usize);

    fn finish(&self, table: &TableName, processed: usize, total: usize);
}

pub trait ImageAnalyzer {
    fn analyze(&self, path: &Path) -> Result<ImageStats, ApplicationError>;

    fn preprocess(
        &self,
        path: &Path,
        target_width: u32,
        target_height: u32,
    ) -> Result<PreprocessedImage, ApplicationError>;
}
