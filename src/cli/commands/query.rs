use super::{book_lines, books_json, to_json, CommandHandler};
use crate::catalog::{Catalog, CategorySummary};
use crate::cli::OutputFormat;
use anyhow::Result;

/// Handler for the `categories` command
pub struct CategoriesCommand;

impl CommandHandler for CategoriesCommand {
    fn execute(&self, catalog: &mut Catalog, format: OutputFormat) -> Result<String> {
        let summaries: Vec<CategorySummary> = catalog.categories().map(Into::into).collect();
        match format {
            OutputFormat::Json => to_json(&summaries),
            OutputFormat::Text => Ok(summary_lines(&summaries)),
        }
    }

    fn name(&self) -> &'static str {
        "categories"
    }
}

pub(crate) fn summary_lines(summaries: &[CategorySummary]) -> String {
    if summaries.is_empty() {
        return "No categories.".to_string();
    }
    summaries
        .iter()
        .map(|s| {
            let kind = if s.fiction { "fiction" } else { "non-fiction" };
            let average = s
                .average_rating
                .map(|avg| format!("{avg:.2}"))
                .unwrap_or_else(|| "-".to_string());
            format!("{} [{}] books: {} average: {}", s.name, kind, s.books, average)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handler for the `books` command
pub struct BooksCommand {
    pub category: String,
}

impl BooksCommand {
    pub fn new(category: String) -> Self {
        Self { category }
    }
}

impl CommandHandler for BooksCommand {
    fn execute(&self, catalog: &mut Catalog, format: OutputFormat) -> Result<String> {
        let books = catalog.books_in_category(&self.category)?;
        match format {
            OutputFormat::Json => books_json(catalog, &books),
            OutputFormat::Text => Ok(book_lines(&books)),
        }
    }

    fn name(&self) -> &'static str {
        "books"
    }
}

/// Handler for the `find` command
pub struct FindCommand {
    pub title: String,
}

impl FindCommand {
    pub fn new(title: String) -> Self {
        Self { title }
    }
}

impl CommandHandler for FindCommand {
    fn execute(&self, catalog: &mut Catalog, format: OutputFormat) -> Result<String> {
        let book = catalog.find_book(&self.title);
        match format {
            OutputFormat::Json => to_json(&book.map(|book| catalog.book_summary(book))),
            OutputFormat::Text => Ok(match book {
                Some(book) => {
                    let category = catalog
                        .category_of(book)
                        .map(|view| view.name().to_string())
                        .unwrap_or_default();
                    let cover = book
                        .cover()
                        .map(|c| format!("{} ({}x{})", c.file, c.width, c.height))
                        .unwrap_or_else(|| "none".to_string());
                    format!(
                        "{}\nRating: {}\nCategory: {}\nCover: {}",
                        book,
                        book.rating(),
                        category,
                        cover
                    )
                }
                None => format!("No book titled '{}'.", self.title),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "find"
    }
}

/// Handler for the `search` command
pub struct SearchCommand {
    pub query: String,
}

impl SearchCommand {
    pub fn new(query: String) -> Self {
        Self { query }
    }
}

impl CommandHandler for SearchCommand {
    fn execute(&self, catalog: &mut Catalog, format: OutputFormat) -> Result<String> {
        let books = catalog.find_books_by_author(&self.query);
        match format {
            OutputFormat::Json => books_json(catalog, &books),
            OutputFormat::Text => Ok(book_lines(&books)),
        }
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

/// Handler for the `author-categories` command
pub struct AuthorCategoriesCommand {
    pub author: String,
}

impl AuthorCategoriesCommand {
    pub fn new(author: String) -> Self {
        Self { author }
    }
}

impl CommandHandler for AuthorCategoriesCommand {
    fn execute(&self, catalog: &mut Catalog, format: OutputFormat) -> Result<String> {
        let names: Vec<&str> = catalog
            .categories_with_author(&self.author)
            .into_iter()
            .map(|view| view.name())
            .collect();
        match format {
            OutputFormat::Json => to_json(&names),
            OutputFormat::Text if names.is_empty() => {
                Ok(format!("No categories have books by '{}'.", self.author))
            }
            OutputFormat::Text => Ok(names.join("\n")),
        }
    }

    fn name(&self) -> &'static str {
        "author-categories"
    }
}
