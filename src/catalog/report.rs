//! Human-readable summaries of catalog changes

use super::Catalog;
use serde::Serialize;
use std::fmt;

/// Outcome of a successful batch deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    /// Number of books removed from the catalog
    pub removed: usize,
    /// Authors whose books were removed, in request order
    pub authors: Vec<String>,
}

impl fmt::Display for DeletionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Removed {}. Authors found: {}. Authors not found: none.",
            count_noun(self.removed, "book"),
            self.authors.join(", ")
        )
    }
}

impl Catalog {
    /// Describe the placeholder categories created while loading books.
    ///
    /// Returns `None` when the catalog has exactly the categories declared in
    /// the categories file.
    pub fn category_growth_report(&self) -> Option<String> {
        let on_file = self.categories_on_file();
        let current = self.category_count();
        if current <= on_file {
            return None;
        }

        let mut message = format!(
            "The categories file declared {}, but {} now exist. Created while loading books:",
            count_noun(on_file, "category"),
            current
        );
        for view in self.categories().skip(on_file) {
            message.push_str(&format!(
                "\n  - {}: {}",
                view.name(),
                count_noun(view.count(), "book")
            ));
        }
        Some(message)
    }
}

/// "1 book", "2 books", "0 books"
fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else if let Some(stem) = noun.strip_suffix('y') {
        format!("{count} {stem}ies")
    } else {
        format!("{count} {noun}s")
    }
}
