//! Catalog loading and browsing.

use super::book::{Book, BookStatus, Chapter, Price};
use crate::error::{AppError, Result};
use std::path::Path;

/// The in-memory book catalog.
///
/// Loaded once at startup and never mutated afterwards. Submissions, review
/// and storage live in an external system; this process only serves what it
/// was given.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

/// Filter parameters for browsing the catalog.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    /// Substring match against title, author or genre (case-insensitive).
    pub query: Option<String>,
    /// Exact genre.
    pub genre: Option<String>,
    /// Exact author.
    pub author: Option<String>,
    /// Pricing tier.
    pub price: Option<Price>,
}

/// Sort orders for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Keep catalog order.
    #[default]
    Relevance,
    /// Most recent publication date first.
    Newest,
    /// Oldest publication date first.
    Oldest,
    /// Highest rating first.
    Rating,
    /// Title A-Z.
    TitleAsc,
    /// Title Z-A.
    TitleDesc,
}

impl SortBy {
    /// Parse a sort parameter. Unknown values fall back to relevance.
    pub fn from_param(s: &str) -> Self {
        match s {
            "newest" => SortBy::Newest,
            "oldest" => SortBy::Oldest,
            "rating" => SortBy::Rating,
            "title-asc" => SortBy::TitleAsc,
            "title-desc" => SortBy::TitleDesc,
            _ => SortBy::Relevance,
        }
    }
}

impl Catalog {
    /// Build a catalog from a book list. Entries without an id get one.
    pub fn new(mut books: Vec<Book>) -> Self {
        for book in &mut books {
            if book.id.is_empty() {
                book.id = uuid::Uuid::new_v4().to_string();
            }
        }
        Self { books }
    }

    /// Load a catalog from a JSON file (an array of books).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let books: Vec<Book> = serde_json::from_str(&content)?;

        tracing::info!(books = books.len(), path = %path.display(), "Loaded catalog");
        Ok(Self::new(books))
    }

    /// Every book regardless of status.
    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    /// Books approved for readers, in catalog order.
    pub fn approved(&self) -> impl Iterator<Item = &Book> {
        self.books
            .iter()
            .filter(|b| b.status == BookStatus::Approved)
    }

    /// Look up an approved book by id.
    pub fn get(&self, id: &str) -> Option<&Book> {
        self.approved().find(|b| b.id == id)
    }

    /// Number of approved books.
    pub fn book_count(&self) -> usize {
        self.approved().count()
    }

    /// Total chapters across approved books.
    pub fn chapter_count(&self) -> usize {
        self.approved().map(|b| b.chapters.len()).sum()
    }

    /// Distinct genres across approved books, sorted.
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = self.approved().map(|b| b.genre.clone()).collect();
        genres.sort();
        genres.dedup();
        genres
    }

    /// Browse approved books with filters and a sort order.
    pub fn browse(&self, filter: &BookFilter, sort: SortBy) -> Vec<Book> {
        let needle = filter.query.as_deref().map(str::to_lowercase);

        let mut result: Vec<Book> = self
            .approved()
            .filter(|b| match &needle {
                Some(q) => {
                    b.title.to_lowercase().contains(q)
                        || b.author.to_lowercase().contains(q)
                        || b.genre.to_lowercase().contains(q)
                }
                None => true,
            })
            .filter(|b| filter.genre.as_deref().is_none_or(|g| b.genre == g))
            .filter(|b| filter.author.as_deref().is_none_or(|a| b.author == a))
            .filter(|b| filter.price.is_none_or(|p| b.price == p))
            .cloned()
            .collect();

        match sort {
            SortBy::Relevance => {}
            SortBy::Newest => result.sort_by(|a, b| b.published_date.cmp(&a.published_date)),
            SortBy::Oldest => result.sort_by(|a, b| a.published_date.cmp(&b.published_date)),
            SortBy::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortBy::TitleAsc => result.sort_by(|a, b| a.title.cmp(&b.title)),
            SortBy::TitleDesc => result.sort_by(|a, b| b.title.cmp(&a.title)),
        }

        result
    }

    /// Built-in sample catalog used when no catalog file is configured.
    pub fn sample() -> Self {
        let chapter_titles = [
            "The Beginning",
            "First Steps",
            "Unexpected Turns",
            "Rising Tension",
            "The Discovery",
            "Crossroads",
            "Into the Unknown",
            "Revelations",
            "The Climax",
            "Resolution",
            "New Horizons",
            "Epilogue",
        ];

        let chapters = |count: usize| -> Vec<Chapter> {
            (1..=count)
                .map(|n| Chapter {
                    number: n as u32,
                    title: chapter_titles
                        .get(n - 1)
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| format!("Chapter {}", n)),
                    reading_time: Some(format!("{} min", 5 + (n * 7) % 15)),
                })
                .collect()
        };

        let entry = |id: &str,
                     title: &str,
                     author: &str,
                     genre: &str,
                     price: Price,
                     rating: f32,
                     published: &str,
                     chapter_count: usize| Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            author_bio: None,
            genre: genre.to_string(),
            price,
            rating,
            description: None,
            full_description: None,
            published_date: published.parse().ok(),
            page_count: Some(160 + chapter_count as u32 * 18),
            language: "English".to_string(),
            status: BookStatus::Approved,
            chapters: chapters(chapter_count),
        };

        Self::new(vec![
            entry(
                "1",
                "The Silent Garden",
                "Priya Sharma",
                "Literary Fiction",
                Price::Free,
                4.6,
                "2024-08-15",
                10,
            ),
            entry(
                "2",
                "Beyond the Horizon",
                "Arjun Mehta",
                "Adventure",
                Price::Free,
                4.4,
                "2024-06-20",
                12,
            ),
            entry(
                "3",
                "Letters to Myself",
                "Kavya Nair",
                "Poetry",
                Price::Free,
                4.8,
                "2024-09-01",
                8,
            ),
            entry(
                "4",
                "The Last Monsoon",
                "Vikram Das",
                "Drama",
                Price::Free,
                4.5,
                "2024-05-10",
                11,
            ),
            entry(
                "5",
                "The Architecture of Dreams",
                "Meera Krishnan",
                "Psychology",
                Price::Premium,
                4.8,
                "2024-10-05",
                9,
            ),
            entry(
                "6",
                "Conversations with Time",
                "Siddharth Rao",
                "Philosophy",
                Price::Premium,
                4.9,
                "2024-07-12",
                9,
            ),
        ])
    }
}
