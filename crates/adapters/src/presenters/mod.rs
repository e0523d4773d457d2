use leaf_ingest_application::ApplicationError;
use leaf_ingest_domain::{CategoryOutcome, CategoryReport, ImageStats, PreprocessedImage, SampleRow};
use serde::Serialize;

pub fn present_sample_row(row: &SampleRow) -> String {
    format!("{}\t{}\t{}", row.label, row.file_name(), row.file_path)
}

pub fn present_category_report(report: &CategoryReport) -> String {
    match report.outcome {
        CategoryOutcome::MissingDirectory => format!("{}: folder not found", report.table),
        CategoryOutcome::NoImages => format!("{}: no images", report.table),
        CategoryOutcome::Processed => format!(
            "{}: {}/{} processed",
            report.table, report.processed, report.total
        ),
    }
}

pub fn present_stats(stats: &ImageStats) -> Vec<String> {
    let [r, g, b] = stats.average_color_rgb;
    vec![
        format!(
            "{:>20}: ({}, {}, {})",
            "original_size", stats.height, stats.width, stats.channels
        ),
        format!("{:>20}: [{r} {g} {b}]", "average_color_rgb"),
        format!("{:>20}: {}", "dominant_hue", stats.dominant_hue),
        format!("{:>20}: {}", "brightness", stats.brightness),
        format!("{:>20}: {}", "color_variance", stats.color_variance),
    ]
}

pub fn present_stats_json(stats: &ImageStats) -> Result<String, ApplicationError> {
    render_json(stats)
}

fn render_json<T: Serialize>(value: &T) -> Result<String, ApplicationError> {
    serde_json::to_string_pretty(value).map_err(|error| {
        ApplicationError::InvalidInput(format!("cannot render as JSON: {error}"))
    })
}

pub fn present_preprocessed(image: &PreprocessedImage) -> Vec<String> {
    let (height, width, channels) = image.shape();
    vec![
        format!("preprocessed image shape: ({height}, {width}, {channels})"),
        format!(
            "pixel range: {:.2}-{:.2}",
            image.min().unwrap_or_default(),
            image.max().unwrap_or_default()
        ),
    ]
}
