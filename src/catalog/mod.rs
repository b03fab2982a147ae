//! Bookshelf catalog - categories, books and the queries over them
//!
//! The catalog owns every book in a single arena keyed by [`BookId`] and an
//! append-only registry of [`Category`] values. Categories refer to their
//! books by key, and each book refers back to its category by [`CategoryId`].
//!
//! # Architecture
//!
//! ```text
//! categorias.csv ──┐
//!                  ├──► ingest ──► Catalog
//! libros.csv ──────┘                 ├── categories: Vec<Category>      (registry)
//!                                    └── books: BTreeMap<BookId, Book>  (arena)
//! ```
//!
//! Books that name an unknown category get a placeholder category appended to
//! the registry during ingestion. Plain lookups never create categories.

mod book;
mod category;
mod ingest;
mod mutation;
mod report;

pub use book::{Book, BookId, BookSummary, Cover};
pub use category::{Category, CategoryId, CategorySummary, CategoryView};
pub use mutation::{partition_authors, AuthorPartition};
pub use report::DeletionReport;

use crate::{CatalogError, Result};
use std::collections::{BTreeMap, HashMap};
use tracing::info;

#[derive(Debug, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    books: BTreeMap<BookId, Book>,
    next_book_id: u32,
    /// Number of categories read from the categories file, fixed at ingestion
    categories_on_file: usize,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All categories in registry order, placeholders last
    pub fn categories(&self) -> impl Iterator<Item = CategoryView<'_>> {
        let books = &self.books;
        self.categories
            .iter()
            .map(move |category| CategoryView::new(category, books))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// How many categories the categories file declared
    pub fn categories_on_file(&self) -> usize {
        self.categories_on_file
    }

    /// Every book in ingestion order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn category(&self, id: CategoryId) -> Option<CategoryView<'_>> {
        self.categories
            .get(id.0)
            .map(|category| CategoryView::new(category, &self.books))
    }

    /// The category a book belongs to
    pub fn category_of(&self, book: &Book) -> Option<CategoryView<'_>> {
        self.category(book.category_id())
    }

    /// Output snapshot of a book, carrying the name of its category
    pub fn book_summary<'a>(&'a self, book: &'a Book) -> BookSummary<'a> {
        BookSummary {
            title: book.title(),
            author: book.author(),
            rating: book.rating(),
            category: self.category_of(book).map_or("", |view| view.name()),
            cover: book.cover(),
        }
    }

    /// Resolve a category by exact name. Never creates a category.
    pub fn category_by_name(&self, name: &str) -> Option<CategoryView<'_>> {
        self.position_of(name).and_then(|id| self.category(id))
    }

    /// Copy of the books in the named category
    pub fn books_in_category(&self, name: &str) -> Result<Vec<&Book>> {
        self.category_by_name(name)
            .map(|view| view.books())
            .ok_or_else(|| CatalogError::CategoryNotFound(name.to_string()))
    }

    /// First book whose title matches exactly
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books().find(|book| book.title() == title)
    }

    /// Case-insensitive author substring search across every category, in category order
    pub fn find_books_by_author(&self, query: &str) -> Vec<&Book> {
        self.categories()
            .flat_map(|view| view.find_by_author(query))
            .collect()
    }

    /// Categories holding at least one book by exactly this author
    pub fn categories_with_author(&self, name: &str) -> Vec<CategoryView<'_>> {
        self.categories()
            .filter(|view| view.has_author(name))
            .collect()
    }

    /// Mean rating over the whole catalog; `NaN` when there are no books
    pub fn average_rating(&self) -> f64 {
        let total: f64 = self.books().map(Book::rating).sum();
        total / self.books.len() as f64
    }

    /// Category with the most books; the first one wins ties
    pub fn category_with_most_books(&self) -> Option<CategoryView<'_>> {
        let mut best: Option<(usize, CategoryView<'_>)> = None;
        for view in self.categories() {
            let count = view.count();
            if best.as_ref().map_or(true, |(max, _)| count > *max) {
                best = Some((count, view));
            }
        }
        best.map(|(_, view)| view)
    }

    /// Category with the highest average rating; the first one wins ties.
    ///
    /// Empty categories and categories averaging `NaN` rank as negative
    /// infinity and are never returned, so the result is `None` when no
    /// category has a comparable average.
    pub fn category_with_best_average(&self) -> Option<CategoryView<'_>> {
        let mut best: Option<(f64, CategoryView<'_>)> = None;
        for view in self.categories() {
            let average = ranked_average(&view);
            if average == f64::NEG_INFINITY {
                continue;
            }
            if best.as_ref().map_or(true, |(max, _)| average > *max) {
                best = Some((average, view));
            }
        }
        best.map(|(_, view)| view)
    }

    pub fn books_without_cover(&self) -> usize {
        self.books().filter(|book| !book.has_cover()).count()
    }

    /// True when some author has books under two differently named categories
    pub fn has_author_in_multiple_categories(&self) -> bool {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for book in self.books() {
            let Some(category) = self.categories.get(book.category_id().0) else {
                continue;
            };
            match seen.get(book.author()) {
                Some(previous) if *previous != category.name() => return true,
                Some(_) => {}
                None => {
                    seen.insert(book.author(), category.name());
                }
            }
        }
        false
    }

    fn position_of(&self, name: &str) -> Option<CategoryId> {
        self.categories
            .iter()
            .position(|category| category.name() == name)
            .map(CategoryId)
    }

    pub(crate) fn push_category(&mut self, category: Category) -> CategoryId {
        self.categories.push(category);
        CategoryId(self.categories.len() - 1)
    }

    /// Resolve a category for ingestion, appending a fiction placeholder when the name is unknown
    pub(crate) fn resolve_or_create(&mut self, name: &str) -> CategoryId {
        if let Some(id) = self.position_of(name) {
            return id;
        }
        info!(category = name, "Creating placeholder category for unknown name");
        self.push_category(Category::new(name, true))
    }

    /// Store a book in the arena and register it with its category
    pub(crate) fn add_book(&mut self, book: Book) -> BookId {
        let id = BookId(self.next_book_id);
        self.next_book_id += 1;
        if let Some(category) = self.categories.get_mut(book.category_id().0) {
            category.push_member(id);
        }
        self.books.insert(id, book);
        id
    }
}

/// Average used for ranking: empty categories and `NaN` averages rank last
fn ranked_average(view: &CategoryView<'_>) -> f64 {
    let average = view.average_rating();
    if view.count() == 0 || average.is_nan() {
        f64::NEG_INFINITY
    } else {
        average
    }
}

#[cfg(test)]
mod tests;
