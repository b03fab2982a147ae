use super::{to_json, CommandHandler};
use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::CatalogError;
use anyhow::{bail, Result};

/// Handler for the `delete-authors` command
pub struct DeleteAuthorsCommand {
    pub authors: Vec<String>,
}

impl DeleteAuthorsCommand {
    pub fn new(authors: Vec<String>) -> Self {
        Self { authors }
    }
}

impl CommandHandler for DeleteAuthorsCommand {
    fn execute(&self, catalog: &mut Catalog, format: OutputFormat) -> Result<String> {
        match catalog.delete_books_by_authors(self.authors.as_slice()) {
            Ok(report) => match format {
                OutputFormat::Json => to_json(&report),
                OutputFormat::Text => Ok(format!(
                    "{}\nBooks remaining: {}",
                    report,
                    catalog.book_count()
                )),
            },
            Err(CatalogError::SomeAuthorsNotFound { found, not_found }) => bail!(
                "No books were deleted.\nAuthors found: {}\nAuthors not found: {}",
                list_or_none(&found),
                list_or_none(&not_found)
            ),
            Err(other) => Err(other.into()),
        }
    }

    fn name(&self) -> &'static str {
        "delete-authors"
    }
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
