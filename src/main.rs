//! wistaar server entry point.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wistaar::{
    config::{Cli, Command, Config},
    content::{Clock, FixedClock, SystemClock},
    library::Catalog,
    search::{SearchSummary, search_book},
    server,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Find or load config
    let config_path = cli.config.clone().or_else(Config::find_config_file);

    let config = if let Some(ref path) = config_path {
        Config::load(path)?
    } else {
        Config::default()
    };

    // Handle command
    match cli.command {
        Some(Command::Init { force }) => cmd_init(force),
        Some(Command::Books) => cmd_books(&config),
        Some(Command::Read {
            book,
            chapter,
            date,
        }) => cmd_read(&config, &book, chapter, date),
        Some(Command::Search { book, query, date }) => cmd_search(&config, &book, &query, date),
        Some(Command::Serve { bind, catalog }) => cmd_serve(config, bind, catalog).await,
        None => {
            // Default: start server
            cmd_serve(config, None, None).await
        }
    }
}

/// Write a default config file and sample catalog.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let config_path = PathBuf::from("config.toml");

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, Config::generate_default())?;
    println!("Created config file: {}", config_path.display());

    let catalog_path = PathBuf::from("data/catalog.json");
    if let Some(parent) = catalog_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let sample = serde_json::to_string_pretty(Catalog::sample().all_books())?;
    std::fs::write(&catalog_path, sample)?;
    println!("Created sample catalog: {}", catalog_path.display());

    println!("\nEdit config.toml, then run: wistaar serve");

    Ok(())
}

/// List catalog books to stdout.
fn cmd_books(config: &Config) -> anyhow::Result<()> {
    let catalog = server::AppState::load_catalog(config)?;

    println!(
        "{:<8} {:<32} {:<20} {:<18} CHAPTERS",
        "ID", "TITLE", "AUTHOR", "GENRE"
    );
    println!("{}", "-".repeat(90));
    for book in catalog.approved() {
        println!(
            "{:<8} {:<32} {:<20} {:<18} {}",
            book.id,
            book.title,
            book.author,
            book.genre,
            book.chapters.len()
        );
    }

    Ok(())
}

/// Clock for CLI commands: pinned when --date was given.
fn cli_clock(date: Option<chrono::NaiveDate>) -> Arc<dyn Clock> {
    match date {
        Some(d) => Arc::new(FixedClock(d)),
        None => Arc::new(SystemClock),
    }
}

/// Print a chapter's daily text.
fn cmd_read(
    config: &Config,
    book_id: &str,
    chapter: u32,
    date: Option<chrono::NaiveDate>,
) -> anyhow::Result<()> {
    let catalog = server::AppState::load_catalog(config)?;
    let book = catalog
        .get(book_id)
        .ok_or_else(|| anyhow::anyhow!("Book not found: {}", book_id))?;
    let chapter_meta = book
        .chapter(chapter)
        .ok_or_else(|| anyhow::anyhow!("Chapter {} not found in {}", chapter, book.title))?;

    let clock = cli_clock(date);
    let paragraphs = wistaar::daily_content(
        &book.title,
        chapter,
        config.content.paragraphs_per_chapter,
        clock.as_ref(),
    );

    println!(
        "{} - Chapter {}: {}\n",
        book.title, chapter, chapter_meta.title
    );
    for paragraph in paragraphs {
        println!("{}\n", paragraph);
    }

    Ok(())
}

/// Search a book and print the excerpts.
fn cmd_search(
    config: &Config,
    book_id: &str,
    query: &str,
    date: Option<chrono::NaiveDate>,
) -> anyhow::Result<()> {
    let catalog = server::AppState::load_catalog(config)?;
    let book = catalog
        .get(book_id)
        .ok_or_else(|| anyhow::anyhow!("Book not found: {}", book_id))?;

    let clock = cli_clock(date);
    let results = search_book(
        book,
        query,
        config.content.paragraphs_per_chapter,
        clock.as_ref(),
    );

    if results.is_empty() {
        println!("No results for \"{}\"", query);
        return Ok(());
    }

    for result in &results {
        println!(
            "Chapter {}: {}\n  {}\n",
            result.chapter_number, result.chapter_title, result.excerpt
        );
    }

    let summary = SearchSummary::of(&results);
    println!(
        "Found {} result(s) across {} chapter(s)",
        summary.total, summary.chapters
    );

    Ok(())
}

/// Start the server.
async fn cmd_serve(
    mut config: Config,
    bind: Option<std::net::SocketAddr>,
    catalog_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    // CLI overrides
    if let Some(addr) = bind {
        config.server.bind = addr;
    }
    if catalog_path.is_some() {
        config.catalog.path = catalog_path;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wistaar=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = server::AppState::load_catalog(&config)?;

    tracing::info!(
        bind = %config.server.bind,
        books = catalog.book_count(),
        "Starting wistaar server"
    );

    let state = server::AppState::new(config.clone(), catalog);
    let app = server::create_router(state);

    let listener = TcpListener::bind(config.server.bind).await?;
    tracing::info!(address = %config.server.bind, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
