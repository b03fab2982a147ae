//! CSV ingestion for the categories and books files
//!
//! Both files start with a header row that is skipped. Rows are split on `,`
//! with no quoting. Categories are read first so books can resolve their
//! category by name; unknown names become placeholder categories.

use super::{Book, Catalog, Category, Cover};
use crate::io::paths::{CoverLocator, DataPaths};
use crate::{CatalogError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

const CATEGORY_FIELDS: usize = 2;
const BOOK_FIELDS: usize = 7;

/// Where rows come from, for error messages
struct Source {
    name: String,
    path: PathBuf,
}

impl Source {
    fn file(path: &Path) -> Self {
        Self {
            name: path.display().to_string(),
            path: path.to_path_buf(),
        }
    }

    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: PathBuf::from(name),
        }
    }

    fn malformed(&self, line: usize, reason: impl Into<String>) -> CatalogError {
        CatalogError::MalformedRow {
            source_name: self.name.clone(),
            line,
            reason: reason.into(),
        }
    }

    fn io(&self, source: std::io::Error) -> CatalogError {
        CatalogError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Catalog {
    /// Load a catalog from the two CSV files, checking covers with `covers`
    pub fn load(categories: &Path, books: &Path, covers: &dyn CoverLocator) -> Result<Self> {
        let categories_source = Source::file(categories);
        let categories_reader = open(&categories_source)?;
        let books_source = Source::file(books);

        let mut catalog = Catalog::new();
        catalog.read_categories(categories_reader, &categories_source)?;
        let books_reader = open(&books_source)?;
        catalog.read_books(books_reader, &books_source, covers)?;
        Ok(catalog)
    }

    /// Load using resolved data paths, looking for covers in the data directory
    pub fn load_from(paths: &DataPaths) -> Result<Self> {
        Self::load(&paths.categories_csv, &paths.books_csv, &paths.covers())
    }

    /// Load from in-memory or already opened sources
    pub fn from_readers<C: BufRead, B: BufRead>(
        categories: C,
        books: B,
        covers: &dyn CoverLocator,
    ) -> Result<Self> {
        let mut catalog = Catalog::new();
        catalog.read_categories(categories, &Source::named("categories"))?;
        catalog.read_books(books, &Source::named("books"), covers)?;
        Ok(catalog)
    }

    fn read_categories<R: BufRead>(&mut self, reader: R, source: &Source) -> Result<()> {
        let mut rows = 0;
        for_each_row(reader, source, CATEGORY_FIELDS, |_, fields| {
            let fiction = fields[1] == "true";
            self.push_category(Category::new(fields[0], fiction));
            rows += 1;
            Ok(())
        })?;
        self.categories_on_file = rows;
        debug!(source = %source.name, categories = rows, "Loaded categories");
        Ok(())
    }

    fn read_books<R: BufRead>(
        &mut self,
        reader: R,
        source: &Source,
        covers: &dyn CoverLocator,
    ) -> Result<()> {
        let mut rows = 0;
        for_each_row(reader, source, BOOK_FIELDS, |line, fields| {
            let rating: f64 = parse_field(source, line, "rating", fields[2])?;
            let width: i32 = parse_field(source, line, "width", fields[5])?;
            let height: i32 = parse_field(source, line, "height", fields[6])?;

            let category = self.resolve_or_create(fields[3]);
            let mut book = Book::new(
                fields[0].to_string(),
                fields[1].to_string(),
                rating,
                category,
            );
            if covers.file_exists(fields[4]) {
                book.set_cover(Cover {
                    file: fields[4].to_string(),
                    width,
                    height,
                });
            }
            self.add_book(book);
            rows += 1;
            Ok(())
        })?;
        debug!(
            source = %source.name,
            books = rows,
            categories = self.category_count(),
            "Loaded books"
        );
        Ok(())
    }
}

fn open(source: &Source) -> Result<BufReader<File>> {
    File::open(&source.path)
        .map(BufReader::new)
        .map_err(|e| source.io(e))
}

/// Feed every data row (header skipped, blank lines ignored) to `handle`.
///
/// Rows shorter than `min_fields` are rejected; extra fields are ignored.
fn for_each_row<R, F>(reader: R, source: &Source, min_fields: usize, mut handle: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<()>,
{
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(|e| source.io(e))?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() < min_fields {
            return Err(source.malformed(
                line_no,
                format!("expected {} fields, found {}", min_fields, fields.len()),
            ));
        }
        handle(line_no, &fields)?;
    }
    Ok(())
}

fn parse_field<T: FromStr>(source: &Source, line: usize, name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| source.malformed(line, format!("invalid {name} '{raw}'")))
}
