//! HTTP request handlers.

use crate::error::{AppError, Result};
use crate::library::{Book, BookFilter, Price, SortBy};
use crate::search::{self, SearchSummary, Segment};
use crate::server::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use serde::{Deserialize, Serialize};

/// Index page (simple HTML).
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 600px; margin: 2rem auto; padding: 0 1rem; }}
        h1 {{ color: #333; }}
        a {{ color: #0066cc; }}
        .stats {{ background: #f5f5f5; padding: 1rem; border-radius: 8px; margin: 1rem 0; }}
        code {{ background: #e8e8e8; padding: 0.2rem 0.4rem; border-radius: 4px; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <div class="stats">
        <p><strong>{books}</strong> books, <strong>{chapters}</strong> chapters</p>
    </div>
    <h2>API</h2>
    <ul>
        <li><code>GET /api/books</code> — browse the catalog</li>
        <li><code>GET /api/books/{{id}}</code> — book details</li>
        <li><code>GET /api/books/{{id}}/chapters/{{n}}</code> — today's chapter text</li>
        <li><code>GET /api/books/{{id}}/search?q=...</code> — search inside a book</li>
        <li><a href="/api/stats">GET /api/stats</a></li>
    </ul>
</body>
</html>"#,
        title = state.config.server.title,
        books = state.book_count(),
        chapters = state.chapter_count(),
    );

    Html(html)
}

// ============================================================================
// CATALOG API
// ============================================================================

/// Browse query parameters.
#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    /// Substring query over title/author/genre.
    pub query: Option<String>,
    /// Exact genre filter.
    pub genre: Option<String>,
    /// Exact author filter.
    pub author: Option<String>,
    /// Price filter: "free" or "premium".
    pub price: Option<String>,
    /// Sort order: newest, oldest, rating, title-asc, title-desc.
    pub sort: Option<String>,
}

/// List approved books with filters and sorting.
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Json<Vec<Book>> {
    let filter = BookFilter {
        query: params.query.filter(|q| !q.trim().is_empty()),
        genre: params.genre,
        author: params.author,
        price: params.price.as_deref().and_then(Price::from_param),
    };
    let sort = params
        .sort
        .as_deref()
        .map(SortBy::from_param)
        .unwrap_or_default();

    Json(state.browse(&filter, sort))
}

/// Book metadata including its chapter list.
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>> {
    let book = state
        .get_book(&id)
        .ok_or_else(|| AppError::NotFound(format!("Book not found: {}", id)))?;

    Ok(Json(book))
}

// ============================================================================
// CHAPTER CONTENT
// ============================================================================

/// Chapter content response.
#[derive(Debug, Serialize)]
pub struct ChapterContent {
    /// 1-based chapter number.
    pub number: u32,
    /// Chapter title.
    pub title: String,
    /// Today's generated paragraphs, in reading order.
    pub paragraphs: Vec<&'static str>,
}

/// Today's generated text for one chapter.
pub async fn chapter_content(
    State(state): State<AppState>,
    Path((id, number)): Path<(String, u32)>,
) -> Result<Json<ChapterContent>> {
    let book = state
        .get_book(&id)
        .ok_or_else(|| AppError::NotFound(format!("Book not found: {}", id)))?;

    // Chapter metadata comes from the provider; numbers outside the book are
    // a caller error, not a content-generation concern.
    let chapter = book
        .chapter(number)
        .ok_or_else(|| AppError::NotFound(format!("Chapter {} not found in {}", number, id)))?;

    Ok(Json(ChapterContent {
        number: chapter.number,
        title: chapter.title.clone(),
        paragraphs: state.chapter_content(&book, number),
    }))
}

// ============================================================================
// IN-BOOK SEARCH
// ============================================================================

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: String,
}

/// One search hit with its highlight segmentation.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    /// 1-based chapter number of the hit.
    pub chapter_number: u32,
    /// Title of that chapter.
    pub chapter_title: String,
    /// Ellipsis-marked context window around the match.
    pub excerpt: String,
    /// Byte offset of the match within the excerpt.
    pub match_start: usize,
    /// Excerpt split into plain/matched runs for display emphasis.
    pub segments: Vec<Segment>,
}

/// Search response with footer counts.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The query that was run.
    pub query: String,
    /// Matches in chapter-then-position order.
    pub results: Vec<SearchHit>,
    /// Total match count and distinct chapter count.
    pub summary: SearchSummary,
}

/// Search a book's chapters for a query.
pub async fn book_search(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let book = state
        .get_book(&id)
        .ok_or_else(|| AppError::NotFound(format!("Book not found: {}", id)))?;

    let results = state.search_book(&book, &params.q);
    let summary = SearchSummary::of(&results);

    let results = results
        .into_iter()
        .map(|r| SearchHit {
            segments: search::highlight(&r.excerpt, &params.q),
            chapter_number: r.chapter_number,
            chapter_title: r.chapter_title,
            excerpt: r.excerpt,
            match_start: r.match_start,
        })
        .collect();

    Ok(Json(SearchResponse {
        query: params.q,
        results,
        summary,
    }))
}

// ============================================================================
// STATS
// ============================================================================

/// Catalog statistics.
#[derive(Debug, Serialize)]
pub struct Stats {
    /// Approved book count.
    pub books: usize,
    /// Chapter count across approved books.
    pub chapters: usize,
    /// Distinct genres.
    pub genres: Vec<String>,
}

/// Catalog statistics endpoint.
pub async fn api_stats(State(state): State<AppState>) -> Json<Stats> {
    Json(Stats {
        books: state.book_count(),
        chapters: state.chapter_count(),
        genres: state.genres(),
    })
}
