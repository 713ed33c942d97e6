//! Daily content selection.

use super::pool::PARAGRAPH_POOL;
use super::rng::SeededRng;
use chrono::{Datelike, Local, NaiveDate};

/// Paragraphs shown per chapter when no count is given.
pub const DEFAULT_PARAGRAPH_COUNT: usize = 10;

/// Multiplier separating chapters of the same book in seed space.
const CHAPTER_STRIDE: i64 = 137;

/// Source of the current local calendar date.
///
/// The selector rotates content at local midnight, so "today" must be
/// injectable: the server uses [`SystemClock`], tests and date previews use
/// [`FixedClock`].
pub trait Clock: Send + Sync {
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date from the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A pinned date, for tests and for previewing another day's content.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(
    /// The date reported as today.
    pub NaiveDate,
);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Rolling hash over a title's UTF-16 code units.
///
/// Accumulates `h = h * 31 + unit` with signed 32-bit wraparound, then takes
/// the absolute value. Stable across platforms; collisions are acceptable
/// since this only spreads books apart in seed space.
pub fn hash_title(title: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in title.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Seed for a (date, book, chapter) triple.
///
/// `day_of_year + year * 365 + chapter_number * 137 + hash(book_title)`.
/// Content is keyed by book title and chapter number only; the chapter's own
/// title does not contribute. Two chapters sharing a number would share text,
/// which cannot happen within one well-formed book.
pub fn chapter_seed(date: NaiveDate, book_title: &str, chapter_number: u32) -> i64 {
    let day_seed = i64::from(date.ordinal()) + i64::from(date.year()) * 365;
    day_seed + i64::from(chapter_number) * CHAPTER_STRIDE + i64::from(hash_title(book_title))
}

/// Select today's paragraphs for a chapter.
///
/// Returns an ordered subset of [`PARAGRAPH_POOL`], identical for identical
/// `(calendar day, book_title, chapter_number, paragraph_count)` and free of
/// duplicates. `paragraph_count` clamps silently to the pool size.
pub fn daily_content(
    book_title: &str,
    chapter_number: u32,
    paragraph_count: usize,
    clock: &dyn Clock,
) -> Vec<&'static str> {
    let seed = chapter_seed(clock.today(), book_title, chapter_number);
    let mut rng = SeededRng::new(seed);

    // Fisher-Yates over pool indices, one sequential stream.
    let mut indices: Vec<usize> = (0..PARAGRAPH_POOL.len()).collect();
    for i in (1..indices.len()).rev() {
        let j = rng.next_index(i + 1);
        indices.swap(i, j);
    }

    let count = paragraph_count.min(PARAGRAPH_POOL.len());
    indices[..count].iter().map(|&i| PARAGRAPH_POOL[i]).collect()
}
