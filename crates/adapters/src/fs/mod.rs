mod metadata;
mod scanner;

pub use metadata::HeaderMetadataExtractor;
pub use scanner::WalkdirImageDirectory;
