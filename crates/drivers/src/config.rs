use std::path::{Path, PathBuf};

use leaf_ingest_application::{ImportSettings, DEFAULT_IMAGE_EXTENSION};
use leaf_ingest_domain::{Category, CategorySource};

const DATABASE_FILE: &str = "wheat_disease.sqlite3";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub categories: Vec<CategorySource>,
    pub extension: String,
}

impl AppConfig {
    /// Category folders and the database file all live under `base_dir`.
    pub fn for_base_dir(base_dir: &Path) -> Self {
        Self {
            database: DatabaseConfig {
                path: base_dir.join(DATABASE_FILE),
            },
            categories: Category::ALL
                .iter()
                .map(|category| CategorySource::with_defaults(*category, base_dir))
                .collect(),
            extension: DEFAULT_IMAGE_EXTENSION.to_string(),
        }
    }

    pub fn import_settings(&self) -> ImportSettings {
        ImportSettings {
            categories: self.categories.clone(),
            extension: self.extension.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_base_dir(&executable_dir())
    }
}

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
