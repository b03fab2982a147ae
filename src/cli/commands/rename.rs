use super::query::summary_lines;
use super::{to_json, CommandHandler};
use crate::catalog::{Catalog, CategorySummary};
use crate::cli::OutputFormat;
use anyhow::Result;

/// Handler for the `rename` command
pub struct RenameCommand {
    pub old: String,
    pub new: String,
}

impl RenameCommand {
    pub fn new(old: String, new: String) -> Self {
        Self { old, new }
    }
}

impl CommandHandler for RenameCommand {
    fn execute(&self, catalog: &mut Catalog, format: OutputFormat) -> Result<String> {
        catalog.rename_category(&self.old, &self.new)?;

        let summaries: Vec<CategorySummary> = catalog.categories().map(Into::into).collect();
        match format {
            OutputFormat::Json => to_json(&summaries),
            OutputFormat::Text => Ok(format!(
                "Renamed '{}' to '{}'.\n{}",
                self.old,
                self.new,
                summary_lines(&summaries)
            )),
        }
    }

    fn name(&self) -> &'static str {
        "rename"
    }
}
