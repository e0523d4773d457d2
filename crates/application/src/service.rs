use leaf_ingest_domain::{CategoryOutcome, CategoryReport, CategorySource, ImportSummary};
use tracing::{info, warn};

use crate::{
    ApplicationError, DirectoryListing, ImageDirectory, ImageStore, ImportSettings,
    MetadataExtractor, ProgressReporter,
};

/// Walks the configured category directories and writes one row per image.
pub struct ImportService {
    settings: ImportSettings,
    directory: Box<dyn ImageDirectory>,
    extractor: Box<dyn MetadataExtractor>,
    store: Box<dyn ImageStore>,
    progress: Box<dyn ProgressReporter>,
}

impl ImportService {
    pub fn new(
        settings: ImportSettings,
        directory: Box<dyn ImageDirectory>,
        extractor: Box<dyn MetadataExtractor>,
        store: Box<dyn ImageStore>,
        progress: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            settings,
            directory,
            extractor,
            store,
            progress,
        }
    }

    /// Imports every configured category in order.
    ///
    /// Only a failure to prepare the tables aborts the run; problems with
    /// individual directories or files are logged and skipped.
    pub fn run(&mut self) -> Result<ImportSummary, ApplicationError> {
        let sources = self.settings.categories.clone();
        self.store.ensure_tables(&sources)?;

        let mut summary = ImportSummary::default();
        for source in &sources {
            summary.categories.push(self.import_category(source));
        }
        Ok(summary)
    }

    pub fn import_category(&mut self, source: &CategorySource) -> CategoryReport {
        let folder = source.directory.as_path();
        let listing = match self.directory.list_matching(folder, &self.settings.extension) {
            Ok(listing) => listing,
            Err(error) => {
                warn!(path = %folder.display(), %error, "could not list folder");
                DirectoryListing::Missing
            }
        };

        let files = match listing {
            DirectoryListing::Missing => {
                info!("folder not found: {}", folder.display());
                return CategoryReport::empty(
                    source.category,
                    source.table.clone(),
                    CategoryOutcome::MissingDirectory,
                );
            }
            DirectoryListing::Files(files) if files.is_empty() => {
                info!(
                    "no {} images found in {}",
                    self.settings.extension.to_ascii_uppercase(),
                    folder.display()
                );
                return CategoryReport::empty(
                    source.category,
                    source.table.clone(),
                    CategoryOutcome::NoImages,
                );
            }
            DirectoryListing::Files(files) => files,
        };

        let table = &source.table;
        let mut report = CategoryReport::empty(
            source.category,
            table.clone(),
            CategoryOutcome::Processed,
        );
        report.total = files.len();
        info!("processing {} images for {table}", report.total);
        self.progress.start(table, report.total);

        for path in &files {
            match self.extractor.extract(path) {
                Ok(record) => match self.store.insert_row(table, &record) {
                    Ok(()) => report.inserted += 1,
                    Err(error) => {
                        report.failed += 1;
                        warn!(%table, file = record.file_name(), %error, "error inserting image");
                    }
                },
                Err(error) => {
                    report.skipped += 1;
                    warn!(path = %path.display(), %error, "error processing image");
                }
            }
            report.processed += 1;
            self.progress.advance(table, report.processed, report.total);
        }

        self.progress.finish(table, report.processed, report.total);
        report
    }

    /// Releases the store's connection.
    pub fn close(self) -> Result<(), ApplicationError> {
        self.store.close()
    }
}
