use crate::{Category, TableName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOutcome {
    MissingDirectory,
    NoImages,
    Processed,
}

/// What happened while importing one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: Category,
    pub table: TableName,
    pub outcome: CategoryOutcome,
    pub total: usize,
    pub processed: usize,
    pub inserted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl CategoryReport {
    pub fn empty(category: Category, table: TableName, outcome: CategoryOutcome) -> Self {
        Self {
            category,
            table,
            outcome,
            total: 0,
            processed: 0,
            inserted: 0,
            skipped: 0,
            failed: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories: Vec<CategoryReport>,
}

impl ImportSummary {
    pub fn inserted(&self) -> usize {
        self.categories.iter().map(|report| report.inserted).sum()
    }
}
