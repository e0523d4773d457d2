use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::DomainError;

const MAX_TABLE_NAME_LEN: usize = 63;

/// Health class an image belongs to. Each class is stored in its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Healthy,
    Rust,
    Smut,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Healthy, Category::Rust, Category::Smut];

    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Rust => "rust",
            Self::Smut => "smut",
        }
    }

    pub fn default_directory_name(self) -> &'static str {
        match self {
            Self::Healthy => "renamed_healthy",
            Self::Rust => "renamed_Wheat_Leaf_Rust",
            Self::Smut => "renamed_Wheat_Loose_Smut",
        }
    }

    pub fn default_table(self) -> TableName {
        let name = match self {
            Self::Healthy => "healthy_leaves",
            Self::Rust => "leaf_rust",
            Self::Smut => "loose_smut",
        };
        TableName(name.to_string())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A table identifier that is safe to splice into SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let mut chars = value.chars();
        let head_ok = chars
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');
        let tail_ok = chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        if !head_ok || !tail_ok || value.len() > MAX_TABLE_NAME_LEN {
            return Err(DomainError::InvalidTableName(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the category mapping: where a category's images live and
/// which table receives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySource {
    pub category: Category,
    pub directory: PathBuf,
    pub table: TableName,
}

impl CategorySource {
    pub fn with_defaults(category: Category, base_dir: &std::path::Path) -> Self {
        Self {
            category,
            directory: base_dir.join(category.default_directory_name()),
            table: category.default_table(),
        }
    }
}
