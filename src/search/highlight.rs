//! Match highlighting for search excerpts.

use regex::RegexBuilder;
use serde::Serialize;

/// A run of text, either part of a match or plain context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The slice of the original text, case preserved.
    pub text: String,
    /// Whether this run matched the query.
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split `text` into alternating plain/matched segments for a literal query.
///
/// Matching is case-insensitive; the query is escaped before the pattern is
/// built, so metacharacters match themselves and attacker-controlled input can
/// never produce a pattern error. Concatenating the returned segments' text in
/// order reproduces `text` exactly. An empty query returns the whole text as a
/// single plain segment.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        // Unreachable for escaped input; degrade to no emphasis.
        return vec![Segment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut last = 0usize;

    for m in pattern.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::plain(&text[last..m.start()]));
        }
        segments.push(Segment::matched(m.as_str()));
        last = m.end();
    }

    if last < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}
