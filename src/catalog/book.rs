//! Book records held in the catalog arena

use super::category::CategoryId;
use serde::Serialize;
use std::fmt;

/// Stable key of a book inside the catalog arena.
///
/// Keys are handed out in ingestion order and never reused, so ordering by
/// key reproduces the order of the books file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BookId(pub(crate) u32);

/// Cover image descriptor; dimensions are taken from the books file as declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cover {
    pub file: String,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone)]
pub struct Book {
    title: String,
    author: String,
    rating: f64,
    category: CategoryId,
    cover: Option<Cover>,
}

impl Book {
    pub(crate) fn new(title: String, author: String, rating: f64, category: CategoryId) -> Self {
        Self {
            title,
            author,
            rating,
            category,
            cover: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Key of the category this book belongs to.
    ///
    /// Always resolves against the catalog that produced the book.
    pub fn category_id(&self) -> CategoryId {
        self.category
    }

    pub fn cover(&self) -> Option<&Cover> {
        self.cover.as_ref()
    }

    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }

    pub(crate) fn set_cover(&mut self, cover: Cover) {
        self.cover = Some(cover);
    }

    /// Case-insensitive substring match on the author
    pub(crate) fn author_contains(&self, query_lower: &str) -> bool {
        self.author.to_lowercase().contains(query_lower)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Serializable view of a book with its category resolved to a name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookSummary<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub rating: f64,
    pub category: &'a str,
    pub cover: Option<&'a Cover>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_assignment() {
        let mut book = Book::new(
            "Dune".to_string(),
            "Frank Herbert".to_string(),
            4.2,
            CategoryId(0),
        );
        assert!(!book.has_cover());

        book.set_cover(Cover {
            file: "dune.jpg".to_string(),
            width: 300,
            height: 450,
        });
        assert!(book.has_cover());
        assert_eq!(book.cover().unwrap().width, 300);
    }

    #[test]
    fn test_author_contains_ignores_case() {
        let book = Book::new(
            "Viaje al centro de la Tierra".to_string(),
            "Julio Verne".to_string(),
            4.0,
            CategoryId(0),
        );
        assert!(book.author_contains("ulio v"));
        assert!(book.author_contains(&"JULIO".to_lowercase()));
        assert!(book.author_contains(""));
        assert!(!book.author_contains("verne j"));
    }

    #[test]
    fn test_display() {
        let book = Book::new(
            "Rayuela".to_string(),
            "Julio Cortázar".to_string(),
            4.5,
            CategoryId(1),
        );
        assert_eq!(book.to_string(), "Rayuela by Julio Cortázar");
    }
}
