//! Application state shared across handlers.

use crate::config::Config;
use crate::content::{Clock, SystemClock, daily_content};
use crate::error::Result;
use crate::library::{Book, BookFilter, Catalog, SortBy};
use crate::search::{self, SearchResult};
use std::path::Path;
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is immutable after startup: the catalog is loaded once,
/// generated content and search results are computed per request and
/// discarded.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,
    /// The book catalog.
    catalog: Arc<Catalog>,
    /// Calendar date source for content rotation.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create application state with the system clock.
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self::with_clock(config, catalog, Arc::new(SystemClock))
    }

    /// Create application state with an explicit clock.
    pub fn with_clock(config: Config, catalog: Catalog, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            clock,
        }
    }

    /// Load the catalog named by the config, or the sample set.
    pub fn load_catalog(config: &Config) -> Result<Catalog> {
        match &config.catalog.path {
            Some(path) => Catalog::load(Path::new(path)),
            None => {
                tracing::info!("No catalog path configured, serving sample catalog");
                Ok(Catalog::sample())
            }
        }
    }

    /// Browse approved books.
    pub fn browse(&self, filter: &BookFilter, sort: SortBy) -> Vec<Book> {
        self.catalog.browse(filter, sort)
    }

    /// Get an approved book by id.
    pub fn get_book(&self, id: &str) -> Option<Book> {
        self.catalog.get(id).cloned()
    }

    /// Today's paragraphs for a chapter of a book.
    pub fn chapter_content(&self, book: &Book, chapter_number: u32) -> Vec<&'static str> {
        daily_content(
            &book.title,
            chapter_number,
            self.config.content.paragraphs_per_chapter,
            self.clock.as_ref(),
        )
    }

    /// Search a book's generated chapter text.
    pub fn search_book(&self, book: &Book, query: &str) -> Vec<SearchResult> {
        search::search_book(
            book,
            query,
            self.config.content.paragraphs_per_chapter,
            self.clock.as_ref(),
        )
    }

    /// Number of approved books.
    pub fn book_count(&self) -> usize {
        self.catalog.book_count()
    }

    /// Number of chapters across approved books.
    pub fn chapter_count(&self) -> usize {
        self.catalog.chapter_count()
    }

    /// Distinct genres across approved books.
    pub fn genres(&self) -> Vec<String> {
        self.catalog.genres()
    }
}
