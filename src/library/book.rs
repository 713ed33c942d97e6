//! Book metadata model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A serialized book in the catalog.
///
/// Metadata only: chapter text is never stored, it is generated on demand by
/// the daily content selector from the book title and chapter number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book.
    pub id: String,

    /// Book title. Feeds the content seed, so renaming a book changes its
    /// generated text.
    pub title: String,

    /// Author display name.
    pub author: String,

    /// Short author biography.
    #[serde(default)]
    pub author_bio: Option<String>,

    /// Genre label.
    pub genre: String,

    /// Pricing tier.
    #[serde(default)]
    pub price: Price,

    /// Average reader rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f32,

    /// One-line description.
    #[serde(default)]
    pub description: Option<String>,

    /// Long-form description.
    #[serde(default)]
    pub full_description: Option<String>,

    /// Publication date.
    #[serde(default)]
    pub published_date: Option<NaiveDate>,

    /// Page count of the print edition.
    #[serde(default)]
    pub page_count: Option<u32>,

    /// Language name (e.g., "English").
    #[serde(default = "default_language")]
    pub language: String,

    /// Review status. Only approved books are served.
    #[serde(default)]
    pub status: BookStatus,

    /// Chapters ordered by number ascending, numbers 1-based and contiguous.
    pub chapters: Vec<Chapter>,
}

fn default_language() -> String {
    "English".to_string()
}

impl Book {
    /// Look up a chapter by its 1-based number.
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }
}

/// A chapter entry. Content-free: text comes from the daily selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based position within the book.
    pub number: u32,

    /// Chapter title. Display only; does not affect generated content.
    pub title: String,

    /// Estimated reading time label (e.g., "12 min").
    #[serde(default)]
    pub reading_time: Option<String>,
}

/// Pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Price {
    /// Readable by everyone.
    #[default]
    Free,
    /// Requires a subscription.
    Premium,
}

impl Price {
    /// Parse a filter value ("free" or "premium").
    pub fn from_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "free" => Some(Price::Free),
            "premium" => Some(Price::Premium),
            _ => None,
        }
    }
}

/// Manuscript review status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    /// Awaiting review.
    Pending,
    /// Approved for readers.
    #[default]
    Approved,
    /// Rejected by review.
    Rejected,
}
