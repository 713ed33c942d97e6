use crate::config::Config;
use crate::content::{
    DEFAULT_PARAGRAPH_COUNT, FixedClock, PARAGRAPH_POOL, SeededRng, chapter_seed, daily_content,
    hash_title,
};
use crate::library::{Book, BookFilter, BookStatus, Catalog, Chapter, Price, SortBy};
use crate::search::{
    MAX_RESULTS_PER_CHAPTER, MAX_TOTAL_RESULTS, chapter_text, highlight, search_book,
};
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn test_book(title: &str, chapter_count: u32) -> Book {
    Book {
        id: "book-1".to_string(),
        title: title.to_string(),
        author: "Test Author".to_string(),
        author_bio: None,
        genre: "Fiction".to_string(),
        price: Price::Free,
        rating: 4.0,
        description: None,
        full_description: None,
        published_date: None,
        page_count: None,
        language: "English".to_string(),
        status: BookStatus::Approved,
        chapters: (1..=chapter_count)
            .map(|n| Chapter {
                number: n,
                title: format!("Chapter {}", n),
                reading_time: None,
            })
            .collect(),
    }
}

// ============================================================================
// SEEDED RNG
// ============================================================================

#[test]
fn rng_repeatable_stream() {
    let first: Vec<u64> = {
        let mut rng = SeededRng::new(123456);
        (0..50).map(|_| rng.next_f64().to_bits()).collect()
    };
    let second: Vec<u64> = {
        let mut rng = SeededRng::new(123456);
        (0..50).map(|_| rng.next_f64().to_bits()).collect()
    };
    assert_eq!(first, second);
}

// ============================================================================
// TITLE HASH AND SEED
// ============================================================================

#[test]
fn hash_title_known_values() {
    // h = h * 31 + code unit, signed 32-bit wrap, absolute value.
    assert_eq!(hash_title(""), 0);
    assert_eq!(hash_title("a"), 97);
    assert_eq!(hash_title("ab"), 97 * 31 + 98);
}

#[test]
fn hash_title_distinguishes_titles() {
    assert_ne!(hash_title("The Silent Garden"), hash_title("Beyond the Horizon"));
}

#[test]
fn seed_formula() {
    // 2025-03-15 is day 74 of a non-leap year.
    let d = date("2025-03-15");
    let expected = 74 + 2025 * 365 + 2 * 137 + i64::from(hash_title("ab"));
    assert_eq!(chapter_seed(d, "ab", 2), expected);
}

#[test]
fn seed_changes_with_day_book_and_chapter() {
    let d1 = date("2025-03-15");
    let d2 = date("2025-03-16");
    assert_ne!(chapter_seed(d1, "A Book", 1), chapter_seed(d2, "A Book", 1));
    assert_ne!(chapter_seed(d1, "A Book", 1), chapter_seed(d1, "A Book", 2));
    assert_ne!(chapter_seed(d1, "A Book", 1), chapter_seed(d1, "B Book", 1));
}

// ============================================================================
// DAILY CONTENT SELECTOR
// ============================================================================

#[test]
fn daily_content_deterministic() {
    let clock = FixedClock(date("2025-06-01"));
    let a = daily_content("The Silent Garden", 3, 10, &clock);
    let b = daily_content("The Silent Garden", 3, 10, &clock);
    assert_eq!(a, b);
}

#[test]
fn daily_content_from_pool_no_duplicates() {
    let clock = FixedClock(date("2025-06-01"));
    let paragraphs = daily_content("Beyond the Horizon", 5, DEFAULT_PARAGRAPH_COUNT, &clock);

    assert_eq!(paragraphs.len(), DEFAULT_PARAGRAPH_COUNT);
    for p in &paragraphs {
        assert!(PARAGRAPH_POOL.contains(p));
    }

    let mut seen = paragraphs.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), paragraphs.len());
}

#[test]
fn daily_content_clamps_count() {
    let clock = FixedClock(date("2025-06-01"));

    let all = daily_content("A Book", 1, 1000, &clock);
    assert_eq!(all.len(), PARAGRAPH_POOL.len());

    let none = daily_content("A Book", 1, 0, &clock);
    assert!(none.is_empty());
}

#[test]
fn daily_content_rotates_with_the_day() {
    let today = daily_content("The Last Monsoon", 2, 10, &FixedClock(date("2025-06-01")));
    let tomorrow = daily_content("The Last Monsoon", 2, 10, &FixedClock(date("2025-06-02")));
    assert_ne!(today, tomorrow);
}

#[test]
fn daily_content_differs_across_chapters_and_books() {
    let clock = FixedClock(date("2025-06-01"));
    let ch1 = daily_content("The Last Monsoon", 1, 10, &clock);
    let ch2 = daily_content("The Last Monsoon", 2, 10, &clock);
    assert_ne!(ch1, ch2);

    let other = daily_content("Letters to Myself", 1, 10, &clock);
    assert_ne!(ch1, other);
}

#[test]
fn full_count_is_a_permutation() {
    let clock = FixedClock(date("2025-02-28"));
    let mut all = daily_content("A Book", 4, PARAGRAPH_POOL.len(), &clock);
    all.sort();
    let mut pool: Vec<&str> = PARAGRAPH_POOL.to_vec();
    pool.sort();
    assert_eq!(all, pool);
}

// ============================================================================
// SEARCH ENGINE
// ============================================================================

#[test]
fn chapter_text_joins_with_single_spaces() {
    let clock = FixedClock(date("2025-06-01"));
    let paragraphs = daily_content("A Book", 1, 10, &clock);
    assert_eq!(chapter_text("A Book", 1, 10, &clock), paragraphs.join(" "));
}

#[test]
fn search_finds_known_substring_case_insensitively() {
    let clock = FixedClock(date("2025-06-01"));
    let book = test_book("The Silent Garden", 3);

    // Take a phrase straight out of chapter 1's generated text and flip case.
    let content = chapter_text(&book.title, 1, 10, &clock);
    let phrase = &content[0..12];
    let query = phrase.to_uppercase();

    let results = search_book(&book, &query, 10, &clock);
    assert!(!results.is_empty());

    let first = &results[0];
    assert_eq!(first.chapter_number, 1);
    // Match at position 0: no leading ellipsis, offset zero.
    assert_eq!(first.match_start, 0);
    assert!(!first.excerpt.starts_with("..."));
    assert!(
        first.excerpt[first.match_start..first.match_start + query.len()]
            .eq_ignore_ascii_case(&query)
    );
}

#[test]
fn search_match_start_points_at_query_in_every_excerpt() {
    let clock = FixedClock(date("2025-06-01"));
    let book = test_book("Beyond the Horizon", 8);

    let results = search_book(&book, "the", 10, &clock);
    assert!(!results.is_empty());

    for r in &results {
        let slice = &r.excerpt[r.match_start..r.match_start + 3];
        assert!(slice.eq_ignore_ascii_case("the"), "bad offset in {:?}", r);
    }
}

#[test]
fn search_mid_content_excerpt_is_ellipsis_marked() {
    let clock = FixedClock(date("2025-06-01"));
    let book = test_book("The Last Monsoon", 5);

    let results = search_book(&book, "the", 10, &clock);
    // A 100-byte window cannot cover a full chapter, so interior matches
    // must be trimmed on both sides.
    let interior = results
        .iter()
        .find(|r| r.excerpt.starts_with("...") && r.excerpt.ends_with("..."))
        .expect("expected at least one interior match");
    assert!(interior.match_start >= 3);
}

#[test]
fn search_caps_results_per_chapter() {
    let clock = FixedClock(date("2025-06-01"));
    let book = test_book("The Silent Garden", 2);

    // "the" occurs far more than three times per generated chapter.
    let results = search_book(&book, "the", 10, &clock);

    for n in 1..=2 {
        let per_chapter = results.iter().filter(|r| r.chapter_number == n).count();
        assert!(per_chapter <= MAX_RESULTS_PER_CHAPTER);
    }
    assert_eq!(
        results
            .iter()
            .filter(|r| r.chapter_number == 1)
            .count(),
        MAX_RESULTS_PER_CHAPTER
    );
}

#[test]
fn search_caps_total_results_in_chapter_order() {
    let clock = FixedClock(date("2025-06-01"));
    let book = test_book("Beyond the Horizon", 12);

    let results = search_book(&book, "the", 10, &clock);
    assert_eq!(results.len(), MAX_TOTAL_RESULTS);

    // Chapter-then-position order, truncated from the end.
    let numbers: Vec<u32> = results.iter().map(|r| r.chapter_number).collect();
    let mut sorted = numbers.clone();
    sorted.sort();
    assert_eq!(numbers, sorted);
    assert_eq!(numbers[0], 1);
}

#[test]
fn search_short_query_returns_nothing() {
    let clock = FixedClock(date("2025-06-01"));
    let book = test_book("The Silent Garden", 3);

    assert!(search_book(&book, "a", 10, &clock).is_empty());
    assert!(search_book(&book, "", 10, &clock).is_empty());
}

#[test]
fn search_summary_counts_distinct_chapters() {
    use crate::search::SearchSummary;

    let clock = FixedClock(date("2025-06-01"));
    let book = test_book("The Last Monsoon", 4);

    let results = search_book(&book, "the", 10, &clock);
    let summary = SearchSummary::of(&results);

    assert_eq!(summary.total, results.len());
    let mut chapters: Vec<u32> = results.iter().map(|r| r.chapter_number).collect();
    chapters.sort();
    chapters.dedup();
    assert_eq!(summary.chapters, chapters.len());
}

// ============================================================================
// HIGHLIGHT RENDERER
// ============================================================================

#[test]
fn highlight_marks_match_preserving_case() {
    let segments = highlight("The Morning Light", "morning");

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].text, "The ");
    assert!(!segments[0].matched);
    assert_eq!(segments[1].text, "Morning");
    assert!(segments[1].matched);
    assert_eq!(segments[2].text, " Light");
    assert!(!segments[2].matched);
}

#[test]
fn highlight_concat_is_lossless() {
    let cases = [
        ("The Morning Light", "morning"),
        ("aaaa", "aa"),
        ("no match here", "xyz"),
        ("", "query"),
        ("ends with match", "match"),
        ("match at start", "match"),
    ];

    for (text, query) in cases {
        let joined: String = highlight(text, query).iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text, "lossy split for ({:?}, {:?})", text, query);
    }
}

#[test]
fn highlight_empty_query_is_one_plain_segment() {
    let segments = highlight("Some text", "");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "Some text");
    assert!(!segments[0].matched);
}

#[test]
fn highlight_metacharacters_match_literally() {
    let query = r".*+?^${}()|[]\";

    // Must not panic, and must not behave as a pattern.
    let segments = highlight("anything at all", query);
    assert!(segments.iter().all(|s| !s.matched));

    let text = format!("before {} after", query);
    let segments = highlight(&text, query);
    let matched: Vec<_> = segments.iter().filter(|s| s.matched).collect();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].text, query);
}

#[test]
fn highlight_adjacent_matches() {
    let segments = highlight("aaaa", "aa");
    assert!(segments.iter().all(|s| s.matched));
    assert_eq!(segments.len(), 2);
}

// ============================================================================
// CATALOG
// ============================================================================

#[test]
fn catalog_serves_only_approved_books() {
    let mut pending = test_book("Unreviewed Draft", 2);
    pending.id = "pending-1".to_string();
    pending.status = BookStatus::Pending;

    let mut rejected = test_book("Rejected Draft", 2);
    rejected.id = "rejected-1".to_string();
    rejected.status = BookStatus::Rejected;

    let approved = test_book("Published Work", 2);

    let catalog = Catalog::new(vec![pending, rejected, approved]);

    assert_eq!(catalog.book_count(), 1);
    assert!(catalog.get("book-1").is_some());
    assert!(catalog.get("pending-1").is_none());
    assert!(catalog.get("rejected-1").is_none());
    assert_eq!(catalog.all_books().len(), 3);
}

#[test]
fn catalog_browse_filters() {
    let catalog = Catalog::sample();

    let poetry = catalog.browse(
        &BookFilter {
            genre: Some("Poetry".to_string()),
            ..Default::default()
        },
        SortBy::Relevance,
    );
    assert!(!poetry.is_empty());
    assert!(poetry.iter().all(|b| b.genre == "Poetry"));

    let premium = catalog.browse(
        &BookFilter {
            price: Some(Price::Premium),
            ..Default::default()
        },
        SortBy::Relevance,
    );
    assert!(premium.iter().all(|b| b.price == Price::Premium));

    let by_query = catalog.browse(
        &BookFilter {
            query: Some("horizon".to_string()),
            ..Default::default()
        },
        SortBy::Relevance,
    );
    assert_eq!(by_query.len(), 1);
    assert_eq!(by_query[0].title, "Beyond the Horizon");
}

#[test]
fn catalog_browse_sorting() {
    let catalog = Catalog::sample();
    let filter = BookFilter::default();

    let by_title = catalog.browse(&filter, SortBy::TitleAsc);
    let titles: Vec<&str> = by_title.iter().map(|b| b.title.as_str()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);

    let by_rating = catalog.browse(&filter, SortBy::Rating);
    assert!(by_rating.windows(2).all(|w| w[0].rating >= w[1].rating));

    let newest = catalog.browse(&filter, SortBy::Newest);
    assert!(
        newest
            .windows(2)
            .all(|w| w[0].published_date >= w[1].published_date)
    );
}

#[test]
fn catalog_load_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let books = vec![test_book("From Disk", 3)];
    std::fs::write(&path, serde_json::to_string(&books).unwrap()).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.book_count(), 1);
    assert_eq!(catalog.get("book-1").unwrap().title, "From Disk");
}

#[test]
fn catalog_assigns_missing_ids() {
    let mut book = test_book("No Id", 1);
    book.id = String::new();

    let catalog = Catalog::new(vec![book]);
    assert!(!catalog.all_books()[0].id.is_empty());
}

// ============================================================================
// CONFIG
// ============================================================================

#[test]
fn config_parse_toml() {
    let toml = r#"
[server]
bind = "127.0.0.1:9090"
title = "Test Shelf"

[catalog]
path = "/tmp/catalog.json"

[content]
paragraphs_per_chapter = 6
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.server.bind.port(), 9090);
    assert_eq!(config.server.title, "Test Shelf");
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(std::path::Path::new("/tmp/catalog.json"))
    );
    assert_eq!(config.content.paragraphs_per_chapter, 6);
}

#[test]
fn config_default_values() {
    let config = Config::default();
    assert_eq!(config.server.bind.port(), 8080);
    assert!(config.catalog.path.is_none());
    assert_eq!(
        config.content.paragraphs_per_chapter,
        DEFAULT_PARAGRAPH_COUNT
    );
}
