//! Categories and the borrowed view used to query their books

use super::book::{Book, BookId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Position of a category in the catalog registry.
///
/// The registry is append-only, so an id stays valid for the catalog's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CategoryId(pub(crate) usize);

/// A named group of books.
///
/// Membership is stored as arena keys; the books themselves live in the catalog.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    fiction: bool,
    members: Vec<BookId>,
}

impl Category {
    pub fn new(name: impl Into<String>, fiction: bool) -> Self {
        Self {
            name: name.into(),
            fiction,
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_fiction(&self) -> bool {
        self.fiction
    }

    /// Replace the stored name. Uniqueness is checked by the catalog, not here.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }

    pub(crate) fn members(&self) -> &[BookId] {
        &self.members
    }

    pub(crate) fn push_member(&mut self, id: BookId) {
        self.members.push(id);
    }

    pub(crate) fn retain_members(&mut self, keep: impl FnMut(&BookId) -> bool) {
        self.members.retain(keep);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Read-only view pairing a category with the catalog's book arena
#[derive(Debug, Clone, Copy)]
pub struct CategoryView<'a> {
    category: &'a Category,
    arena: &'a BTreeMap<BookId, Book>,
}

impl<'a> CategoryView<'a> {
    pub(crate) fn new(category: &'a Category, arena: &'a BTreeMap<BookId, Book>) -> Self {
        Self { category, arena }
    }

    pub fn name(&self) -> &'a str {
        self.category.name()
    }

    pub fn is_fiction(&self) -> bool {
        self.category.is_fiction()
    }

    /// Books in insertion order
    pub fn books(&self) -> Vec<&'a Book> {
        self.iter().collect()
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Mean rating of the member books.
    ///
    /// Returns `NaN` when the category has no books; check `count() > 0`
    /// before trusting the value.
    pub fn average_rating(&self) -> f64 {
        let (sum, n) = self
            .iter()
            .fold((0.0, 0usize), |(sum, n), book| (sum + book.rating(), n + 1));
        sum / n as f64
    }

    /// Exact, case-sensitive author match
    pub fn has_author(&self, name: &str) -> bool {
        self.iter().any(|book| book.author() == name)
    }

    /// Case-insensitive substring search on the author. An empty query matches every book.
    pub fn find_by_author(&self, query: &str) -> Vec<&'a Book> {
        let query_lower = query.to_lowercase();
        self.iter()
            .filter(|book| book.author_contains(&query_lower))
            .collect()
    }

    fn iter(&self) -> impl Iterator<Item = &'a Book> + 'a {
        let arena = self.arena;
        let category = self.category;
        category.members.iter().filter_map(move |id| arena.get(id))
    }
}

/// Serializable snapshot of a category for command output
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub fiction: bool,
    pub books: usize,
    /// `None` when the category is empty
    pub average_rating: Option<f64>,
}

impl From<CategoryView<'_>> for CategorySummary {
    fn from(view: CategoryView<'_>) -> Self {
        let books = view.count();
        Self {
            name: view.name().to_string(),
            fiction: view.is_fiction(),
            books,
            average_rating: (books > 0).then(|| view.average_rating()),
        }
    }
}
