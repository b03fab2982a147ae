//! Bookshelf library exports

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;

pub use catalog::{Book, Catalog, Category, CategoryView};
pub use error::{CatalogError, Result};
