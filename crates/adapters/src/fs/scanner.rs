use std::path::Path;

use leaf_ingest_application::{ApplicationError, DirectoryListing, ImageDirectory};
use leaf_ingest_domain::has_extension;
use walkdir::WalkDir;

/// Lists the top level of a folder without sorting, so files come back in
/// the order the filesystem reports them. Symlinked files are listed under
/// the link's own path.
#[derive(Debug, Default)]
pub struct WalkdirImageDirectory;

impl ImageDirectory for WalkdirImageDirectory {
    fn list_matching(
        &self,
        folder: &Path,
        extension: &str,
    ) -> Result<DirectoryListing, ApplicationError> {
        if !folder.exists() {
            return Ok(DirectoryListing::Missing);
        }
        if !folder.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "not a directory: {}",
                folder.display()
            )));
        }

        let files = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| has_extension(path, extension))
            .collect();

        Ok(DirectoryListing::Files(files))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_only_top_level_matching_files() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("a.jpg"), b"x").expect("write");
        fs::write(dir.path().join("B.JPG"), b"x").expect("write");
        fs::write(dir.path().join("c.png"), b"x").expect("write");
        fs::create_dir(dir.path().join("nested.jpg")).expect("mkdir");
        fs::write(dir.path().join("nested.jpg").join("d.jpg"), b"x").expect("write");

        let listing = WalkdirImageDirectory
            .list_matching(dir.path(), "jpg")
            .expect("list");

        let DirectoryListing::Files(files) = listing else {
            panic!("expected a file listing");
        };
        let mut names: Vec<String> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["B.JPG", "a.jpg"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_images_are_listed() {
        let dir = TempDir::new().expect("tempdir");
        let real = dir.path().join("real");
        let folder = dir.path().join("folder");
        fs::create_dir(&real).expect("mkdir");
        fs::create_dir(&folder).expect("mkdir");
        fs::write(real.join("leaf.jpg"), b"x").expect("write");
        std::os::unix::fs::symlink("../real/leaf.jpg", folder.join("leaf.jpg")).expect("symlink");

        let listing = WalkdirImageDirectory
            .list_matching(&folder, "jpg")
            .expect("list");

        assert_eq!(listing, DirectoryListing::Files(vec![folder.join("leaf.jpg")]));
    }

    #[test]
    fn missing_folder_is_reported_as_missing() {
        let dir = TempDir::new().expect("tempdir");
        let listing = WalkdirImageDirectory
            .list_matching(&dir.path().join("absent"), "jpg")
            .expect("list");
        assert_eq!(listing, DirectoryListing::Missing);
    }

    #[test]
    fn regular_file_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let file = dir.path().join("a.jpg");
        fs::write(&file, b"x").expect("write");
        assert!(matches!(
            WalkdirImageDirectory.list_matching(&file, "jpg"),
            Err(ApplicationError::InvalidInput(_))
        ));
    }
}
