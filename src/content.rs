//! Deterministic daily chapter content.
//!
//! Chapter text is never stored. It is synthesized on demand from a fixed
//! paragraph pool, keyed by the calendar day, the book title and the chapter
//! number, so the same chapter shows the same text all day and fresh text
//! tomorrow.

mod daily;
mod pool;
mod rng;

pub use daily::{
    Clock, DEFAULT_PARAGRAPH_COUNT, FixedClock, SystemClock, chapter_seed, daily_content,
    hash_title,
};
pub use pool::PARAGRAPH_POOL;
pub use rng::SeededRng;
