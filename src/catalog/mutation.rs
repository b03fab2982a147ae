//! Category rename and batch deletion of books by author

use super::{Catalog, DeletionReport};
use crate::{CatalogError, Result};
use std::collections::HashSet;
use tracing::{info, warn};

/// Requested authors split by whether the catalog has any of their books
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPartition {
    pub found: Vec<String>,
    pub not_found: Vec<String>,
}

impl AuthorPartition {
    /// True when every requested author is present
    pub fn is_complete(&self) -> bool {
        self.not_found.is_empty()
    }
}

/// Split `requested` into authors present in the catalog and authors absent from it.
///
/// Matching is exact. Order of `requested` is preserved within each side.
pub fn partition_authors<S: AsRef<str>>(catalog: &Catalog, requested: &[S]) -> AuthorPartition {
    let present: HashSet<&str> = catalog.books().map(|book| book.author()).collect();
    let mut partition = AuthorPartition::default();
    for name in requested {
        let name = name.as_ref();
        if present.contains(name) {
            partition.found.push(name.to_string());
        } else {
            partition.not_found.push(name.to_string());
        }
    }
    partition
}

impl Catalog {
    /// Rename a category in place.
    ///
    /// The new name must not match any existing category, including the one
    /// being renamed. Books keep pointing at the same category.
    pub fn rename_category(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if old_name.is_empty() || new_name.is_empty() {
            return Err(CatalogError::EmptyInput);
        }
        let id = self
            .position_of(old_name)
            .ok_or_else(|| CatalogError::CategoryNotFound(old_name.to_string()))?;
        if self.position_of(new_name).is_some() {
            return Err(CatalogError::DuplicateCategory(new_name.to_string()));
        }

        self.categories[id.0].rename(new_name);
        info!(from = old_name, to = new_name, "Renamed category");
        Ok(())
    }

    /// Remove every book written by any of `authors`.
    ///
    /// All-or-nothing: if any author has no books in the catalog, nothing is
    /// removed and the error carries both sides of the partition. Category
    /// membership lists are pruned along with the arena.
    pub fn delete_books_by_authors<S: AsRef<str>>(
        &mut self,
        authors: &[S],
    ) -> Result<DeletionReport> {
        let partition = partition_authors(self, authors);
        if !partition.is_complete() {
            warn!(
                found = ?partition.found,
                not_found = ?partition.not_found,
                "Rejected batch deletion"
            );
            return Err(CatalogError::SomeAuthorsNotFound {
                found: partition.found,
                not_found: partition.not_found,
            });
        }

        let targets: HashSet<&str> = partition.found.iter().map(String::as_str).collect();
        let before = self.books.len();
        self.books.retain(|_, book| !targets.contains(book.author()));
        let removed = before - self.books.len();

        let arena = &self.books;
        for category in &mut self.categories {
            category.retain_members(|id| arena.contains_key(id));
        }

        let report = DeletionReport {
            removed,
            authors: partition.found,
        };
        info!(removed, "{}", report);
        Ok(report)
    }
}
