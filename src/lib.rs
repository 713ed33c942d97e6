//! wistaar: a serialized book reading server with deterministic daily content.
//!
//! Readers browse a catalog of serialized books and read chapters whose text
//! is synthesized fresh each calendar day from a fixed paragraph pool. The
//! same (day, book, chapter) always produces the same text, so in-book search
//! runs against exactly what readers see.
//!
//! # Features
//!
//! - Deterministic daily chapter content (seeded shuffle over a fixed pool)
//! - Case-insensitive in-book search with bounded, ellipsis-marked excerpts
//! - Match highlighting segments for display emphasis
//! - Catalog browsing with genre/author/price filters and sorting
//! - JSON API and a small CLI for offline reading and search

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Configuration and CLI.
pub mod config;
/// Deterministic daily content generation.
pub mod content;
/// Error types.
pub mod error;
/// Book and catalog models.
pub mod library;
/// In-book search and highlighting.
pub mod search;
/// HTTP server.
pub mod server;

#[cfg(test)]
mod tests;

pub use config::{Cli, Command, Config};
pub use content::{Clock, FixedClock, SystemClock, daily_content};
pub use error::{AppError, Result};
pub use search::{SearchResult, highlight, search_book};
pub use server::AppState;
