use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serialized book reading server with daily content rotation.
#[derive(Parser, Debug, Clone)]
#[command(name = "wistaar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file.
    #[arg(short, long, env = "WISTAAR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the server (default if no command given).
    Serve {
        /// Address to bind the server to.
        #[arg(short, long)]
        bind: Option<SocketAddr>,

        /// Path to a catalog JSON file.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Create a default config file and sample catalog.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },

    /// List the books in the catalog.
    Books,

    /// Print a chapter's daily text.
    Read {
        /// Book id.
        book: String,

        /// 1-based chapter number.
        chapter: u32,

        /// Generate content for this date instead of today (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Search a book's chapters.
    Search {
        /// Book id.
        book: String,

        /// Query text (at least 2 characters).
        query: String,

        /// Search content for this date instead of today (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Main configuration from TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Content generation configuration.
    #[serde(default)]
    pub content: ContentConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,

    /// Site title.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            title: default_title(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::new(
        std::net::IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        8080,
    )
}

fn default_title() -> String {
    "Wistaar".to_string()
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON book catalog. The sample catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Content generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Paragraphs generated per chapter. Clamps to the pool size.
    #[serde(default = "default_paragraphs")]
    pub paragraphs_per_chapter: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            paragraphs_per_chapter: default_paragraphs(),
        }
    }
}

fn default_paragraphs() -> usize {
    crate::content::DEFAULT_PARAGRAPH_COUNT
}

impl Config {
    /// Load configuration from file.
    pub fn load(path: &PathBuf) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to parse config file: {}", e))
        })
    }

    /// Find config file in default locations.
    pub fn find_config_file() -> Option<PathBuf> {
        let candidates = [
            PathBuf::from("config.toml"),
            PathBuf::from("wistaar.toml"),
            PathBuf::from("/etc/wistaar/config.toml"),
        ];

        candidates.into_iter().find(|p| p.exists())
    }

    /// Generate default config file content.
    pub fn generate_default() -> String {
        r#"# wistaar configuration

[server]
bind = "0.0.0.0:8080"
title = "Wistaar"

[catalog]
# Path to a JSON book catalog. The built-in sample is served when unset.
# path = "data/catalog.json"

[content]
# Paragraphs generated per chapter (clamps to the paragraph pool size)
paragraphs_per_chapter = 10
"#
        .to_string()
    }
}
