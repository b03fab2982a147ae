use anyhow::{Context, Result};
use bookshelf::{
    catalog::Catalog,
    cli::{commands::handler_for, Cli, LogLevel},
    config::SettingsLoader,
    io::paths::DataPaths,
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn initialize_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let settings = SettingsLoader::new()
        .load(cli.config.as_deref())?
        .with_overrides(cli.data_dir, cli.categories, cli.books);
    let paths = DataPaths::from_settings(&settings);

    let mut catalog = Catalog::load_from(&paths).with_context(|| {
        format!(
            "Failed to load catalog from {} and {}",
            paths.categories_csv.display(),
            paths.books_csv.display()
        )
    })?;
    if let Some(report) = catalog.category_growth_report() {
        info!("{report}");
    }

    if cli.command.modifies_catalog() {
        info!("Changes are applied in memory only; CSV files are left untouched");
    }
    let handler = handler_for(cli.command);
    debug!(command = handler.name(), "Running command");
    let output = handler.execute(&mut catalog, cli.format)?;
    println!("{output}");

    Ok(())
}
