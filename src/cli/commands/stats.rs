use super::{to_json, CommandHandler};
use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Handler for the `stats` command
pub struct StatsCommand;

#[derive(Debug, Serialize)]
pub struct CatalogStats {
    pub books: usize,
    pub categories: usize,
    pub categories_on_file: usize,
    /// `None` for an empty catalog
    pub average_rating: Option<f64>,
    pub most_books: Option<String>,
    pub best_average: Option<String>,
    pub books_without_cover: usize,
    pub author_in_multiple_categories: bool,
    pub growth_report: Option<String>,
}

impl CatalogStats {
    pub fn collect(catalog: &Catalog) -> Self {
        Self {
            books: catalog.book_count(),
            categories: catalog.category_count(),
            categories_on_file: catalog.categories_on_file(),
            average_rating: (catalog.book_count() > 0).then(|| catalog.average_rating()),
            most_books: catalog
                .category_with_most_books()
                .map(|view| view.name().to_string()),
            best_average: catalog
                .category_with_best_average()
                .map(|view| view.name().to_string()),
            books_without_cover: catalog.books_without_cover(),
            author_in_multiple_categories: catalog.has_author_in_multiple_categories(),
            growth_report: catalog.category_growth_report(),
        }
    }
}

impl CommandHandler for StatsCommand {
    fn execute(&self, catalog: &mut Catalog, format: OutputFormat) -> Result<String> {
        let stats = CatalogStats::collect(catalog);
        match format {
            OutputFormat::Json => to_json(&stats),
            OutputFormat::Text => Ok(render_text(&stats)),
        }
    }

    fn name(&self) -> &'static str {
        "stats"
    }
}

fn render_text(stats: &CatalogStats) -> String {
    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let mut lines = vec![
        format!("Books: {}", stats.books),
        format!(
            "Categories: {} ({} on file)",
            stats.categories, stats.categories_on_file
        ),
        format!(
            "Average rating: {}",
            stats
                .average_rating
                .map(|avg| format!("{avg:.2}"))
                .unwrap_or_else(|| "-".to_string())
        ),
        format!("Category with most books: {}", or_dash(&stats.most_books)),
        format!("Category with best average: {}", or_dash(&stats.best_average)),
        format!("Books without cover: {}", stats.books_without_cover),
        format!(
            "Author in more than one category: {}",
            if stats.author_in_multiple_categories { "yes" } else { "no" }
        ),
    ];
    if let Some(report) = &stats.growth_report {
        lines.push(report.clone());
    }
    lines.join("\n")
}
