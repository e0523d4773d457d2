use leaf_ingest_domain::CategorySource;

/// Creates a category table when it is absent. Existing tables are left
/// untouched.
pub fn create_category_table(source: &CategorySource) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            file_name TEXT NOT NULL,
            file_path TEXT NOT NULL,
            file_size_kb REAL NOT NULL,
            resolution TEXT NOT NULL,
            width INTEGER NOT NULL,
            height INTEGER NOT NULL,
            label TEXT NOT NULL DEFAULT '{label}'
        );",
        table = source.table,
        label = source.category.label(),
    )
}
