mod queries;
mod schema;

use std::fs;
use std::path::Path;

use leaf_ingest_application::{ApplicationError, ImageStore, SampleSource};
use leaf_ingest_domain::{CategorySource, ImageRecord, SampleRow, TableName};
use rusqlite::{Connection, OpenFlags};
use tracing::{info, warn};

pub use queries::count_rows;

/// One SQLite connection shared by every category of an import run.
#[derive(Debug)]
pub struct SqliteImageStore {
    conn: Connection,
}

impl SqliteImageStore {
    pub fn open(path: &Path) -> Result<Self, ApplicationError> {
        if path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "database path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        Ok(Self { conn })
    }

    /// Opens a database that must already exist; the file is never created.
    pub fn open_existing(path: &Path) -> Result<Self, ApplicationError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|error| {
            ApplicationError::Persistence(format!("cannot open {}: {error}", path.display()))
        })?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl ImageStore for SqliteImageStore {
    fn ensure_tables(&mut self, sources: &[CategorySource]) -> Result<(), ApplicationError> {
        for source in sources {
            self.conn
                .execute_batch(&schema::create_category_table(source))
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }
        Ok(())
    }

    fn insert_row(
        &mut self,
        table: &TableName,
        record: &ImageRecord,
    ) -> Result<(), ApplicationError> {
        let tx = self
            .conn
            .transaction()
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        match queries::insert_image(&tx, table, record) {
            Ok(()) => tx
                .commit()
                .map_err(|error| ApplicationError::Persistence(error.to_string())),
            Err(error) => {
                if let Err(rollback_error) = tx.rollback() {
                    warn!(%table, error = %rollback_error, "rollback failed");
                }
                Err(ApplicationError::Persistence(error.to_string()))
            }
        }
    }

    fn close(self: Box<Self>) -> Result<(), ApplicationError> {
        self.conn
            .close()
            .map_err(|(_, error)| ApplicationError::Persistence(error.to_string()))?;
        info!("database connection closed");
        Ok(())
    }
}

impl SampleSource for SqliteImageStore {
    fn read_samples(
        &self,
        table: &TableName,
        limit: i64,
    ) -> Result<Vec<SampleRow>, ApplicationError> {
        queries::sample_rows(&self.conn, table, limit)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}
