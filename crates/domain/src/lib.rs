mod analysis;
mod category;
mod error;
mod image;
mod report;

pub use analysis::{ImageStats, PreprocessedImage};
pub use category::{Category, CategorySource, TableName};
pub use error::DomainError;
pub use image::{bytes_to_kb, has_extension, ImageRecord, SampleRow};
pub use report::{CategoryOutcome, CategoryReport, ImportSummary};
