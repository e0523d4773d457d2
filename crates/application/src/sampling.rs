use leaf_ingest_domain::{
    CategorySource, DomainError, ImageStats, PreprocessedImage, SampleRow,
};

use crate::{
    AnalyzeImageCommand, ApplicationError, ImageAnalyzer, PreprocessImageCommand, SampleQuery,
    SampleSource,
};

/// Reads imported rows back and runs quick checks on the referenced images.
pub struct SampleService {
    categories: Vec<CategorySource>,
    samples: Box<dyn SampleSource>,
    analyzer: Box<dyn ImageAnalyzer>,
}

impl SampleService {
    pub fn new(
        categories: Vec<CategorySource>,
        samples: Box<dyn SampleSource>,
        analyzer: Box<dyn ImageAnalyzer>,
    ) -> Self {
        Self {
            categories,
            samples,
            analyzer,
        }
    }

    /// Up to `limit` rows from each category table, in category order.
    pub fn read_samples(&self, query: SampleQuery) -> Result<Vec<SampleRow>, ApplicationError> {
        if query.limit <= 0 {
            return Err(DomainError::InvalidSampleLimit(query.limit).into());
        }

        let mut rows = Vec::new();
        for source in &self.categories {
            rows.extend(self.samples.read_samples(&source.table, query.limit)?);
        }
        Ok(rows)
    }

    pub fn first_sample(&self) -> Result<SampleRow, ApplicationError> {
        self.read_samples(SampleQuery { limit: 1 })?
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::NotFound("no images found in database".to_string()))
    }

    pub fn analyze_image(&self, command: AnalyzeImageCommand) -> Result<ImageStats, ApplicationError> {
        self.analyzer.analyze(&command.path)
    }

    pub fn preprocess_image(
        &self,
        command: PreprocessImageCommand,
    ) -> Result<PreprocessedImage, ApplicationError> {
        if command.target_width == 0 || command.target_height == 0 {
            return Err(ApplicationError::InvalidInput(format!(
                "target size must be non-zero, got {}x{}",
                command.target_width, command.target_height
            )));
        }
        self.analyzer
            .preprocess(&command.path, command.target_width, command.target_height)
    }
}
