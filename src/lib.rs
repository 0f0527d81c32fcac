#![allow(clippy::needless_doctest_main)]
//! # strptime-guess: Guess the Format of a Date
//!
//! Given one example date/time string, find a strftime template that parses
//! it, e.g. `"2030-01-24 05:45"` gives `"%Y-%m-%d %H:%M"`.
//!
//! ## Usage
//!
//! Put this in your `Cargo.toml`:
//!
//! ```toml
//! strptime-guess = "0.2"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use strptime_guess::detect;
//! use chrono::NaiveDateTime;
//!
//! fn main() {
//!     let example = "Thu, 24 Jan 2030 05:45:30";
//!     let template = detect(example).unwrap();
//!     assert_eq!(template, "%a, %d %b %Y %H:%M:%S");
//!
//!     let date = NaiveDateTime::parse_from_str(example, &template).unwrap();
//!     println!("{:?}", date);
//! }
//! ```
//!
//! ## Search
//!
//! Templates are tried in a fixed order and the first one that chrono can
//! parse the input with wins:
//!
//! 1. a handful of complete templates, tried on the whole input:
//!    `%m/%d/%Y %I:%M %p`, `%m/%d/%Y`, `%m/%d/%y`, `%m-%d-%Y`,
//!    `%Y-%m-%d %H:%M:%S.%f`, `%Y-%m-%dT%H:%M:%S%z`, `%Y-%m-%d %H:%M:%S%z`
//! 2. the input is split into content (`2030`, `Jan`, `30+01:00`) and
//!    separators (`-`, `, `). Every field pattern with one field per content
//!    segment is turned into a template by putting its fields where the
//!    content was:
//!
//! ```text
//! "24/01/2030 05:45"  ->  24 / 01 / 2030 ␣ 05 : 45
//! [%d %m %Y %H %M]    ->  %d / %m / %Y ␣ %H : %M  ->  "%d/%m/%Y %H:%M"
//! ```
//!
//! Fields are parsed with chrono, read the way strptime reads them: `%Y` is
//! four digits, `%y` two, `%A` and `%B` are full names, `%z` takes `Z` and
//! a date that does not exist, such as `02/30/2030`, parses with nothing.

mod candidate;
mod lexer;
mod templates;

use log::{debug, trace};

pub use candidate::{can_parse, reconstruct};
pub use lexer::{classify, content_count, Segment, SegmentKind};
pub use templates::{generic_templates, FieldPattern, EXACT_TEMPLATES};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("No valid format found.")]
    /// Neither a complete template nor any field pattern parses the input
    NotFound,
}

// returned by `detect` and kept in `Detection::result`
pub type Output = Result<String, Error>;

/// Templates built from the field patterns for a lexed line, in priority
/// order
fn generic_candidates(segments: &[Segment]) -> impl Iterator<Item = String> + '_ {
    generic_templates(content_count(segments))
        .iter()
        .filter_map(move |pattern| reconstruct(pattern, segments))
}

/// Guess the strftime template for an example date/time string
pub fn detect(input: impl Into<String>) -> Output {
    let text = input.into();

    if let Some(template) = EXACT_TEMPLATES.iter().find(|t| can_parse(t, &text)) {
        debug!("{text:?} parsed by complete template {template:?}");
        return Ok(template.to_string());
    }

    let segments = Segment::lex_line(&text);
    debug!(
        "{text:?} has {} content segments",
        content_count(&segments)
    );

    let template = generic_candidates(&segments)
        .find(|candidate| {
            let ok = can_parse(candidate, &text);
            if !ok {
                trace!("{text:?} rejected {candidate:?}");
            }
            ok
        })
        .ok_or(Error::NotFound)?;

    debug!("{text:?} parsed by {template:?}");
    Ok(template)
}

/// Every template that parses the example, in the order `detect` prefers
/// them. A template reached through both tables is listed once.
pub fn detect_all(input: impl Into<String>) -> Vec<String> {
    let text = input.into();
    let segments = Segment::lex_line(&text);

    let mut found: Vec<String> = Vec::new();
    let candidates = EXACT_TEMPLATES
        .iter()
        .map(|t| t.to_string())
        .chain(generic_candidates(&segments));

    for candidate in candidates {
        if can_parse(&candidate, &text) && !found.contains(&candidate) {
            found.push(candidate);
        }
    }

    found
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// All stages of a single detection, for debugging
pub struct Detection {
    /// The lexed input
    pub segments: Vec<Segment>,
    /// Number of content segments, selects the field patterns
    pub content_count: usize,
    /// Number of templates tried, including the one that parsed
    pub tried: usize,
    pub result: Output,
}

/// Guess the strftime template for an example date/time string, returning
/// all stages of the search for debugging
pub fn debug_detect(input: impl Into<String>) -> Detection {
    let text = input.into();
    let segments = Segment::lex_line(&text);
    let count = content_count(&segments);

    let mut tried = 0;
    let result = EXACT_TEMPLATES
        .iter()
        .map(|t| t.to_string())
        .chain(generic_candidates(&segments))
        .find(|candidate| {
            tried += 1;
            can_parse(candidate, &text)
        })
        .ok_or(Error::NotFound);

    Detection {
        segments,
        content_count: count,
        tried,
        result,
    }
}

#[test]
fn test_detect() {
    let template = detect("2030-01-24 05:45").unwrap();
    assert_eq!(template, "%Y-%m-%d %H:%M");
}

#[test]
fn test_malformed() {
    let result = detect("invalid-date-format");
    assert_eq!(result, Err(Error::NotFound));
    assert_eq!(result.unwrap_err().to_string(), "No valid format found.");
}

#[test]
fn test_empty() {
    assert_eq!(detect(""), Err(Error::NotFound));
    assert!(detect_all("").is_empty());
}
