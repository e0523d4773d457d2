use leaf_ingest_domain::{ImageRecord, SampleRow, TableName};
use rusqlite::{params, Connection, Result};

pub fn insert_image(conn: &Connection, table: &TableName, record: &ImageRecord) -> Result<()> {
    conn.execute(
        &format!(
            "INSERT INTO {table}
             (file_name, file_path, file_size_kb, resolution, width, height)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
        ),
        params![
            record.file_name(),
            record.file_path(),
            record.file_size_kb(),
            record.resolution(),
            record.width(),
            record.height(),
        ],
    )?;
    Ok(())
}

pub fn table_exists(conn: &Connection, table: &TableName) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table.as_str()],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Rows of `table`, or none at all when the table has not been created yet.
pub fn sample_rows(conn: &Connection, table: &TableName, limit: i64) -> Result<Vec<SampleRow>> {
    if !table_exists(conn, table)? {
        return Ok(Vec::new());
    }
    let mut stmt = conn.prepare(&format!("SELECT file_path, label FROM {table} LIMIT ?1"))?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(SampleRow {
            file_path: row.get(0)?,
            label: row.get(1)?,
        })
    })?;

    rows.collect()
}

pub fn count_rows(conn: &Connection, table: &TableName) -> Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
}
