use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A CSV source could not be opened or read
    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV row did not have the expected shape
    #[error("Malformed row in {source_name} at line {line}: {reason}")]
    MalformedRow {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("A category named '{0}' already exists")]
    DuplicateCategory(String),

    #[error("Category names must not be empty")]
    EmptyInput,

    /// Batch deletion was rejected; nothing was removed
    #[error("Some authors were not found in the catalog: {}", .not_found.join(", "))]
    SomeAuthorsNotFound {
        found: Vec<String>,
        not_found: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
