use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use collection::{BatchOutcome, ShelfSession};
use data_loader::Movie;
use sources::{ConfigProvider, FileSource, HttpSource, RecordSource};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

mod table;

use table::Column;

/// Shelf - browse a personal movie collection
#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Browse a movie collection filtered by category, language and print quality", long_about = None)]
struct Cli {
    /// Location of the collection configuration
    #[arg(short, long, default_value = "app/resources/config.json")]
    config: String,

    /// Directory that configuration and category files are read from
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Read configuration and category files from this URL instead of --root
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the movies that pass the filters
    List {
        /// Language whose category files are read
        #[arg(long, default_value = pipeline::DEFAULT_LANGUAGE)]
        language: String,

        /// Only show Hindi movies
        #[arg(long)]
        hindi: bool,

        /// Only show these categories (repeatable); all categories if omitted
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Only show these print qualities (repeatable); any quality if omitted
        #[arg(long = "quality")]
        qualities: Vec<String>,

        /// Column to sort by
        #[arg(long, value_enum)]
        sort: Option<Column>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page to show, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,

        /// Rows per page
        #[arg(long, default_value = "10")]
        rows: usize,
    },

    /// Show the categories and print qualities the configuration defines
    Options,
}

/// Filters requested on the command line for the `list` command.
struct ListFilters {
    language: String,
    hindi: bool,
    categories: Vec<String>,
    qualities: Vec<String>,
}

/// How the table is shown.
struct View {
    sort: Option<Column>,
    desc: bool,
    page: usize,
    rows: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (provider, source) = build_sources(&cli);
    let start = Instant::now();
    let session = ShelfSession::open(provider.as_ref(), &cli.config, source)
        .await
        .with_context(|| format!("Failed to open shelf from {}", cli.config))?;
    info!("Configuration loaded in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            language,
            hindi,
            categories,
            qualities,
            sort,
            desc,
            page,
            rows,
        } => {
            let filters = ListFilters {
                language,
                hindi,
                categories,
                qualities,
            };
            let view = View {
                sort,
                desc,
                page,
                rows,
            };
            handle_list(session, filters, view).await?
        }
        Commands::Options => handle_options(&session),
    }

    Ok(())
}

/// Pick the file or HTTP backend for both configuration and records
fn build_sources(cli: &Cli) -> (Arc<dyn ConfigProvider>, Arc<dyn RecordSource>) {
    match &cli.base_url {
        Some(base_url) => {
            let source = Arc::new(HttpSource::new(base_url.clone()));
            let provider: Arc<dyn ConfigProvider> = source.clone();
            let records: Arc<dyn RecordSource> = source;
            (provider, records)
        }
        None => {
            let source = Arc::new(FileSource::new(cli.root.clone()));
            let provider: Arc<dyn ConfigProvider> = source.clone();
            let records: Arc<dyn RecordSource> = source;
            (provider, records)
        }
    }
}

/// Handle the 'list' command
async fn handle_list(mut session: ShelfSession, filters: ListFilters, view: View) -> Result<()> {
    // Each change reloads; only the last reload's batches survive
    if filters.language != session.state().language {
        session.set_language(filters.language);
    }
    if filters.hindi != session.state().hindi_only {
        session.set_hindi_only(filters.hindi);
    }
    session.show_only(&filters.categories, &filters.qualities)?;

    let start = Instant::now();
    let outcomes = session.settle().await;
    for outcome in &outcomes {
        if let BatchOutcome::Failed { category, error } = outcome {
            eprintln!("{} {}: {:#}", "!".yellow(), category, error);
        }
    }

    let mut movies = session.movies().to_vec();
    println!(
        "{} {} movies in {:?}",
        "✓".green(),
        movies.len(),
        start.elapsed()
    );

    if let Some(column) = view.sort {
        table::sort_movies(&mut movies, column, view.desc);
    }
    print_table(&movies, view.page, view.rows);
    Ok(())
}

/// Handle the 'options' command
fn handle_options(session: &ShelfSession) {
    let state = session.state();
    println!("{}", "Categories:".bold().blue());
    for category in &state.categories {
        println!("  - {}", category.name);
    }
    println!("{}", "Print qualities:".bold().blue());
    for quality in &state.print_qualities {
        println!("  - {}", quality.name);
    }
    println!("{} {}", "Resources:".bold().blue(), session.resource_path());
}

/// Helper function to print one page of the table
fn print_table(movies: &[Movie], page: usize, rows: usize) {
    let rows = rows.max(1);
    let pages = table::page_count(movies.len(), rows);
    let range = table::page_range(movies.len(), page, rows);

    let widths: Vec<usize> = Column::ALL
        .iter()
        .map(|column| {
            movies[range.clone()]
                .iter()
                .map(|movie| column.cell(movie).chars().count())
                .chain(std::iter::once(column.header().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header = Column::ALL
        .iter()
        .zip(&widths)
        .map(|(column, width)| format!("{:<width$}", column.header(), width = width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());

    for movie in &movies[range] {
        let line = Column::ALL
            .iter()
            .zip(&widths)
            .map(|(column, width)| format!("{:<width$}", column.cell(movie), width = width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }

    println!("{}", format!("Page {} of {}", page.max(1), pages).dimmed());
}
