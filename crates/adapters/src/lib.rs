pub mod analysis;
pub mod fs;
pub mod presenters;
pub mod progress;
pub mod sqlite;

pub use analysis::ImageCrateAnalyzer;
pub use fs::{HeaderMetadataExtractor, WalkdirImageDirectory};
pub use presenters::{
    present_category_report, present_preprocessed, present_sample_row, present_stats,
    present_stats_json,
};
pub use progress::TracingProgress;
pub use sqlite::SqliteImageStore;
