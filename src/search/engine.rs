//! Substring search across a book's chapters.
//!
//! Chapter text is synthesized through the daily selector, so search always
//! runs against exactly what a reader sees today. Matching is case-insensitive
//! substring scan; every hit carries a bounded excerpt suitable for a result
//! list. Pure and synchronous, safe to call on every keystroke.

use crate::content::{Clock, daily_content};
use crate::library::Book;
use serde::Serialize;

/// Queries shorter than this return no results.
pub const MIN_QUERY_LEN: usize = 2;

/// At most this many hits are reported per chapter.
pub const MAX_RESULTS_PER_CHAPTER: usize = 3;

/// At most this many hits are reported per search.
pub const MAX_TOTAL_RESULTS: usize = 20;

/// Bytes of context kept before a match in its excerpt.
const EXCERPT_BEFORE: usize = 40;

/// Bytes of context kept after a match in its excerpt.
const EXCERPT_AFTER: usize = 60;

const ELLIPSIS: &str = "...";

/// One match inside a chapter.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// 1-based chapter number the match was found in.
    pub chapter_number: u32,
    /// Title of that chapter.
    pub chapter_title: String,
    /// Context window around the match, ellipsis-marked when truncated.
    pub excerpt: String,
    /// Byte offset of the match within `excerpt`.
    pub match_start: usize,
}

/// Aggregate counts for a result set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchSummary {
    /// Total matches reported.
    pub total: usize,
    /// Number of distinct chapters with at least one match.
    pub chapters: usize,
}

impl SearchSummary {
    /// Summarize a result list, counting distinct chapter numbers.
    pub fn of(results: &[SearchResult]) -> Self {
        let mut chapters: Vec<u32> = results.iter().map(|r| r.chapter_number).collect();
        chapters.dedup();
        Self {
            total: results.len(),
            chapters: chapters.len(),
        }
    }
}

/// A chapter's searchable text: today's paragraphs joined with single spaces.
pub fn chapter_text(
    book_title: &str,
    chapter_number: u32,
    paragraph_count: usize,
    clock: &dyn Clock,
) -> String {
    daily_content(book_title, chapter_number, paragraph_count, clock).join(" ")
}

/// Search a book's chapters for a query, case-insensitively.
///
/// Results come back in chapter order, then by position within the chapter,
/// capped at [`MAX_RESULTS_PER_CHAPTER`] per chapter and [`MAX_TOTAL_RESULTS`]
/// overall. Queries shorter than [`MIN_QUERY_LEN`] yield an empty list.
pub fn search_book(
    book: &Book,
    query: &str,
    paragraph_count: usize,
    clock: &dyn Clock,
) -> Vec<SearchResult> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut results = Vec::new();

    for chapter in &book.chapters {
        let content = chapter_text(&book.title, chapter.number, paragraph_count, clock);
        // Lowercasing the pool's text is length-preserving, so offsets into
        // `haystack` are valid offsets into `content`.
        let haystack = content.to_lowercase();

        let mut found_here = 0usize;
        let mut from = 0usize;

        while let Some(offset) = haystack[from..].find(&needle) {
            let at = from + offset;
            results.push(excerpt_at(&content, at, needle.len(), chapter));

            found_here += 1;
            if found_here >= MAX_RESULTS_PER_CHAPTER {
                break;
            }
            // Advance one position so overlapping matches are still seen,
            // stepping over a partial char if the match starts mid-codepoint.
            from = ceil_boundary(&haystack, at + 1);
        }
    }

    results.truncate(MAX_TOTAL_RESULTS);
    results
}

/// Build the bounded excerpt around a match at byte `at`.
fn excerpt_at(
    content: &str,
    at: usize,
    match_len: usize,
    chapter: &crate::library::Chapter,
) -> SearchResult {
    let start = floor_boundary(content, at.saturating_sub(EXCERPT_BEFORE));
    let end = ceil_boundary(content, (at + match_len + EXCERPT_AFTER).min(content.len()));

    let mut excerpt = String::new();
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    let match_start = at - start + excerpt.len();
    excerpt.push_str(&content[start..end]);
    if end < content.len() {
        excerpt.push_str(ELLIPSIS);
    }

    SearchResult {
        chapter_number: chapter.number,
        chapter_title: chapter.title.clone(),
        excerpt,
        match_start,
    }
}

/// Largest char boundary at or below `i`.
fn floor_boundary(s: &str, mut i: usize) -> usize {
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary at or above `i`.
fn ceil_boundary(s: &str, mut i: usize) -> usize {
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}
