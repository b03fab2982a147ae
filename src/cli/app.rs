use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bookshelf: query a book catalog loaded from CSV files
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Query a book catalog loaded from CSV files")]
#[command(
    long_about = "Bookshelf loads a categories file and a books file, then answers queries about the catalog. Changes made by rename and delete-authors last only for the current run."
)]
pub struct Cli {
    /// Settings file (defaults to ./bookshelf.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the CSV files and cover images
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Categories CSV file
    #[arg(long, global = true)]
    pub categories: Option<PathBuf>,

    /// Books CSV file
    #[arg(long, global = true)]
    pub books: Option<PathBuf>,

    /// Log level written to stderr (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Aggregate statistics over the whole catalog
    Stats,

    /// List categories with their book counts
    Categories,

    /// List the books in a category
    Books {
        /// Exact category name
        category: String,
    },

    /// Find a book by exact title
    Find {
        /// Exact title
        title: String,
    },

    /// Search books by author (case-insensitive, partial names allowed)
    Search {
        /// Part of an author's name
        query: String,
    },

    /// List categories containing books by an author (exact name)
    AuthorCategories {
        /// Exact author name
        name: String,
    },

    /// Rename a category
    Rename {
        /// Current category name
        old: String,

        /// New category name, must not already exist
        new: String,
    },

    /// Delete every book by the given authors; fails without changes if any author is unknown
    DeleteAuthors {
        /// Exact author names
        #[arg(required = true)]
        authors: Vec<String>,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Stats => "stats",
            Commands::Categories => "categories",
            Commands::Books { .. } => "books",
            Commands::Find { .. } => "find",
            Commands::Search { .. } => "search",
            Commands::AuthorCategories { .. } => "author-categories",
            Commands::Rename { .. } => "rename",
            Commands::DeleteAuthors { .. } => "delete-authors",
        }
    }

    /// Check if this command changes the in-memory catalog
    pub fn modifies_catalog(&self) -> bool {
        matches!(self, Commands::Rename { .. } | Commands::DeleteAuthors { .. })
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
