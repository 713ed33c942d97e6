//! In-book full-text search over generated chapter content.

mod engine;
mod highlight;

pub use engine::{
    MAX_RESULTS_PER_CHAPTER, MAX_TOTAL_RESULTS, MIN_QUERY_LEN, SearchResult, SearchSummary,
    chapter_text, search_book,
};
pub use highlight::{Segment, highlight};
