use leaf_ingest_application::ProgressReporter;
use leaf_ingest_domain::TableName;
use tracing::info;

/// Emits one `processed/total` line per file through `tracing`.
#[derive(Debug, Default)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn start(&self, table: &TableName, total: usize) {
        info!(%table, total, "importing to {table}");
    }

    fn advance(&self, table: &TableName, processed: usize, total: usize) {
        info!(%table, "importing to {table}: {processed}/{total}");
    }

    fn finish(&self, table: &TableName, processed: usize, total: usize) {
        info!(%table, "finished {table}: {processed}/{total}");
    }
}
