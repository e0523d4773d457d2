use std::path::Path;

use image::io::Reader as ImageReader;
use leaf_ingest_application::{ApplicationError, MetadataExtractor};
use leaf_ingest_domain::ImageRecord;

/// Reads dimensions from the image header only; pixel data is never decoded.
#[derive(Debug, Default)]
pub struct HeaderMetadataExtractor;

impl MetadataExtractor for HeaderMetadataExtractor {
    fn extract(&self, path: &Path) -> Result<ImageRecord, ApplicationError> {
        let (width, height) = ImageReader::open(path)
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .into_dimensions()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;
        let size = path
            .metadata()
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .len();

        Ok(ImageRecord::new(path, size, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use leaf_ingest_domain::bytes_to_kb;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn extracts_dimensions_and_size() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("leaf001.jpg");
        let img = ImageBuffer::from_fn(400, 300, |x, _y| Rgb([(x % 256) as u8, 120_u8, 30_u8]));
        img.save(&src).expect("save");
        let bytes = fs::metadata(&src).expect("metadata").len();

        let record = HeaderMetadataExtractor.extract(&src).expect("extract");

        assert_eq!(record.file_name(), "leaf001.jpg");
        assert_eq!(record.file_path(), src.to_string_lossy());
        assert_eq!(record.width(), 400);
        assert_eq!(record.height(), 300);
        assert_eq!(record.resolution(), "400x300");
        assert_eq!(record.file_size_kb(), bytes_to_kb(bytes));
    }

    #[test]
    fn non_image_content_fails() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("broken.jpg");
        fs::write(&src, b"definitely not a jpeg").expect("write");

        assert!(HeaderMetadataExtractor.extract(&src).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let result = HeaderMetadataExtractor.extract(&dir.path().join("gone.jpg"));
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }
}
