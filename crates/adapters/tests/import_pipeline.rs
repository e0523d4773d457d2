use std::fs;
use std::path::Path;

use image::{ImageBuffer, Rgb};
use leaf_ingest_adapters::sqlite::count_rows;
use leaf_ingest_adapters::{
    HeaderMetadataExtractor, ImageCrateAnalyzer, SqliteImageStore, TracingProgress,
    WalkdirImageDirectory,
};
use leaf_ingest_application::{
    ImportService, ImportSettings, SampleQuery, SampleService, DEFAULT_IMAGE_EXTENSION,
};
use leaf_ingest_domain::{bytes_to_kb, Category, CategoryOutcome, CategorySource};
use tempfile::TempDir;

fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = ImageBuffer::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 90_u8]));
    img.save(path).expect("save jpeg");
}

fn settings(base: &Path) -> ImportSettings {
    ImportSettings {
        categories: Category::ALL
            .iter()
            .map(|category| CategorySource::with_defaults(*category, base))
            .collect(),
        extension: DEFAULT_IMAGE_EXTENSION.to_string(),
    }
}

fn import_service(base: &Path, db: &Path) -> ImportService {
    ImportService::new(
        settings(base),
        Box::new(WalkdirImageDirectory),
        Box::new(HeaderMetadataExtractor),
        Box::new(SqliteImageStore::open(db).expect("open store")),
        Box::new(TracingProgress),
    )
}

#[test]
fn imports_valid_images_and_skips_corrupt_ones() {
    let dir = TempDir::new().expect("tempdir");
    let base = dir.path();
    let healthy = base.join(Category::Healthy.default_directory_name());
    let rust = base.join(Category::Rust.default_directory_name());
    fs::create_dir_all(&healthy).expect("mkdir");
    fs::create_dir_all(&rust).expect("mkdir");
    write_jpeg(&healthy.join("leaf001.jpg"), 400, 300);
    write_jpeg(&healthy.join("leaf002.JPG"), 32, 16);
    fs::write(healthy.join("corrupt.jpg"), b"not an image").expect("write");
    fs::write(healthy.join("notes.txt"), b"ignored").expect("write");
    let db = base.join("leaves.sqlite3");

    let mut service = import_service(base, &db);
    let summary = service.run().expect("run");
    service.close().expect("close");

    let healthy_report = &summary.categories[0];
    assert_eq!(healthy_report.outcome, CategoryOutcome::Processed);
    assert_eq!(healthy_report.total, 3);
    assert_eq!(healthy_report.inserted, 2);
    assert_eq!(healthy_report.skipped, 1);
    assert_eq!(summary.categories[1].outcome, CategoryOutcome::NoImages);
    assert_eq!(
        summary.categories[2].outcome,
        CategoryOutcome::MissingDirectory
    );

    let store = SqliteImageStore::open(&db).expect("reopen");
    let conn = store.connection();
    assert_eq!(count_rows(conn, &Category::Healthy.default_table()).expect("count"), 2);
    assert_eq!(count_rows(conn, &Category::Rust.default_table()).expect("count"), 0);

    let (resolution, width, height, kb): (String, u32, u32, f64) = conn
        .query_row(
            "SELECT resolution, width, height, file_size_kb FROM healthy_leaves
             WHERE file_name = 'leaf001.jpg'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .expect("row");
    let bytes = fs::metadata(healthy.join("leaf001.jpg")).expect("meta").len();
    assert_eq!(resolution, "400x300");
    assert_eq!((width, height), (400, 300));
    assert_eq!(kb, bytes_to_kb(bytes));
}

#[test]
fn second_import_duplicates_rows() {
    let dir = TempDir::new().expect("tempdir");
    let base = dir.path();
    let smut = base.join(Category::Smut.default_directory_name());
    fs::create_dir_all(&smut).expect("mkdir");
    write_jpeg(&smut.join("s1.jpg"), 10, 10);
    let db = base.join("leaves.sqlite3");

    for _ in 0..2 {
        let mut service = import_service(base, &db);
        service.run().expect("run");
        service.close().expect("close");
    }

    let store = SqliteImageStore::open(&db).expect("reopen");
    assert_eq!(
        count_rows(store.connection(), &Category::Smut.default_table()).expect("count"),
        2
    );
}

#[test]
fn imported_rows_are_readable_as_samples() {
    let dir = TempDir::new().expect("tempdir");
    let base = dir.path();
    let rust = base.join(Category::Rust.default_directory_name());
    fs::create_dir_all(&rust).expect("mkdir");
    for name in ["r1.jpg", "r2.jpg", "r3.jpg"] {
        write_jpeg(&rust.join(name), 12, 12);
    }
    let db = base.join("leaves.sqlite3");
    let mut service = import_service(base, &db);
    service.run().expect("run");
    service.close().expect("close");

    let samples = SampleService::new(
        settings(base).categories,
        Box::new(SqliteImageStore::open(&db).expect("open")),
        Box::new(ImageCrateAnalyzer),
    );
    let rows = samples
        .read_samples(SampleQuery { limit: 2 })
        .expect("samples");

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.label == "rust"));

    let first = samples.first_sample().expect("first");
    let stats = samples
        .analyze_image(leaf_ingest_application::AnalyzeImageCommand {
            path: first.file_path.into(),
        })
        .expect("analyze");
    assert_eq!((stats.width, stats.height), (12, 12));
}
