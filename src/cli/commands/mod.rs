pub mod delete;
pub mod query;
pub mod rename;
pub mod stats;

use super::{Commands, OutputFormat};
use crate::catalog::Catalog;
use anyhow::{Context, Result};
use serde::Serialize;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Run the command against a loaded catalog and return the text to print
    fn execute(&self, catalog: &mut Catalog, format: OutputFormat) -> Result<String>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Build the handler for a parsed subcommand
pub fn handler_for(command: Commands) -> Box<dyn CommandHandler> {
    match command {
        Commands::Stats => Box::new(stats::StatsCommand),
        Commands::Categories => Box::new(query::CategoriesCommand),
        Commands::Books { category } => Box::new(query::BooksCommand::new(category)),
        Commands::Find { title } => Box::new(query::FindCommand::new(title)),
        Commands::Search { query } => Box::new(query::SearchCommand::new(query)),
        Commands::AuthorCategories { name } => {
            Box::new(query::AuthorCategoriesCommand::new(name))
        }
        Commands::Rename { old, new } => Box::new(rename::RenameCommand::new(old, new)),
        Commands::DeleteAuthors { authors } => Box::new(delete::DeleteAuthorsCommand::new(authors)),
    }
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize command output")
}

/// JSON array of books, each tagged with its category name
pub(crate) fn books_json(catalog: &Catalog, books: &[&crate::catalog::Book]) -> Result<String> {
    let summaries: Vec<_> = books.iter().map(|book| catalog.book_summary(book)).collect();
    to_json(&summaries)
}

/// One line per book, or a placeholder when there are none
pub(crate) fn book_lines(books: &[&crate::catalog::Book]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }
    books
        .iter()
        .map(|book| format!("{} ({:.1})", book, book.rating()))
        .collect::<Vec<_>>()
        .join("\n")
}
