mod commands;
mod error;
mod ports;
mod sampling;
mod service;

pub use commands::{
    AnalyzeImageCommand, ImportSettings, PreprocessImageCommand, SampleQuery,
    DEFAULT_IMAGE_EXTENSION, DEFAULT_PREPROCESS_SIZE, DEFAULT_SAMPLE_LIMIT,
};
pub use error::ApplicationError;
pub use ports::{
    DirectoryListing, ImageAnalyzer, ImageDirectory, ImageStore, MetadataExtractor,
    ProgressReporter, SampleSource,
};
pub use sampling::SampleService;
pub use service::ImportService;
