use crate::config::Settings;
use std::path::{Path, PathBuf};

/// Default root for the CSV sources and cover images
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Answers whether a cover file is available for a book
pub trait CoverLocator {
    /// Check for a file by name relative to the data root
    fn file_exists(&self, relative_name: &str) -> bool;
}

/// Cover lookups against a directory on disk
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl CoverLocator for DataDir {
    fn file_exists(&self, relative_name: &str) -> bool {
        !relative_name.is_empty() && self.root.join(relative_name).exists()
    }
}

/// Locator that never finds a cover
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCovers;

impl CoverLocator for NoCovers {
    fn file_exists(&self, _relative_name: &str) -> bool {
        false
    }
}

/// Paths to the catalog sources derived from settings
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Directory holding the CSV files and cover images
    pub data_dir: PathBuf,
    /// Categories CSV
    pub categories_csv: PathBuf,
    /// Books CSV
    pub books_csv: PathBuf,
}

impl DataPaths {
    /// Resolve file names against the data directory; absolute names are kept as-is
    pub fn from_settings(settings: &Settings) -> Self {
        let data_dir = settings.data_dir.clone();
        Self {
            categories_csv: data_dir.join(&settings.categories_file),
            books_csv: data_dir.join(&settings.books_file),
            data_dir,
        }
    }

    pub fn covers(&self) -> DataDir {
        DataDir::new(&self.data_dir)
    }
}
