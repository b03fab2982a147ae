use crate::io::paths::DEFAULT_DATA_DIR;
use serde::Deserialize;
use std::path::PathBuf;

/// Where the catalog sources live
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the CSV files and cover images
    pub data_dir: PathBuf,
    /// Categories CSV, relative to `data_dir` unless absolute
    pub categories_file: PathBuf,
    /// Books CSV, relative to `data_dir` unless absolute
    pub books_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            categories_file: PathBuf::from("categorias.csv"),
            books_file: PathBuf::from("libros.csv"),
        }
    }
}

impl Settings {
    /// Parse settings from YAML; missing keys take their defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(content)
    }

    /// Apply command line overrides
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        categories_file: Option<PathBuf>,
        books_file: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(file) = categories_file {
            self.categories_file = file;
        }
        if let Some(file) = books_file {
            self.books_file = file;
        }
        self
    }
}
