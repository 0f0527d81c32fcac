use lazy_static::lazy_static;
use std::collections::HashMap;

/// Complete templates tried against the whole input before it is lexed,
/// in priority order
pub const EXACT_TEMPLATES: &[&str] = &[
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%m-%d-%Y",
    "%Y-%m-%d %H:%M:%S.%f",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%z",
];

// Order within each list is the tie break between templates that parse the
// same input, keep it as is. Some entries never parse (`%M%-z`, a dangling
// `%`) and some lists overlap.

const ONE: &[[&str; 1]] = &[
    ["%Y%m%dT%H%M%SZ"],
    ["%c"],
    ["%A"],
    ["%a"],
    ["%b"],
    ["%B"],
    ["%d"],
    ["%Y"],
];

const TWO: &[[&str; 2]] = &[
    ["%Y", "%j"],
    ["%H", "%M%z"],
    ["%H", "%M%-z"],
    ["%H", "%M%"],
    ["%b", "%d"],
    ["%d", "%b"],
    ["%b", "%Y"],
    ["%a", "%b"],
    ["%a", "%B"],
    ["%A", "%b"],
    ["%A", "%B"],
    ["%H", "%M"],
    ["%I", "%M%p"],
];

const THREE: &[[&str; 3]] = &[
    ["%Y", "%m", "%d"],
    ["%B", "%d", "%Y"],
    ["%d", "%b", "%Y"],
    ["%b", "%d", "%Y"],
    ["%d", "%m", "%Y"],
    ["%H", "%M", "%S"],
    ["%a", "%b", "%d"],
    ["%A", "%b", "%d"],
    ["%A", "%B", "%d"],
    ["%a", "%B", "%d"],
    ["%H", "%M", "%Z"],
    ["%H", "%M", "%S%z"],
    ["%I", "%M", "%p"],
];

const FOUR: &[[&str; 4]] = &[
    ["%a", "%b", "%d", "%Y"],
    ["%A", "%b", "%d", "%Y"],
    ["%A", "%B", "%d", "%Y"],
    ["%H", "%M", "%S", "%Z"],
    ["%a", "%d", "%b", "%Y"],
    ["%I", "%M", "%S", "%p"],
];

const FIVE: &[[&str; 5]] = &[
    ["%Y", "%m", "%dT%H", "%M", "%S%z"],
    ["%Y", "%m", "%dT%H", "%M", "%S"],
    ["%d", "%b", "%Y", "%H", "%M"],
    ["%b", "%d", "%Y", "%H", "%M"],
    ["%Y", "%m", "%d", "%H", "%M"],
    ["%d", "%m", "%Y", "%H", "%M"],
    ["%b", "%d", "%Y", "%I", "%M%p"],
    ["%Y", "%m", "%d", "%H", "%M%p"],
];

const SIX: &[[&str; 6]] = &[
    ["%b", "%d", "%Y", "%H", "%M", "%S"],
    ["%Y", "%m", "%d", "%H", "%M", "%S"],
    ["%d", "%m", "%Y", "%H", "%M", "%S"],
    ["%Y", "%m", "%d", "%H", "%M", "%S%z"],
    ["%Y", "%m", "%d", "%H", "%M", "%SZ"],
    ["%a", "%d", "%b", "%Y", "%H", "%M"],
    ["%m", "%d", "%Y", "%I", "%M", "%p"],
    ["%d", "%b", "%Y", "%H", "%M", "%S"],
    ["%Y", "%m", "%dT%H", "%M", "%S", "%fZ"],
    ["%Y", "%m", "%dT%H", "%M", "%S", "%f"],
    ["%b", "%d", "%Y", "%I", "%M", "%p"],
];

const SEVEN: &[[&str; 7]] = &[
    ["%a", "%d", "%b", "%Y", "%H", "%M", "%S"],
    ["%a", "%b", "%d", "%Y", "%H", "%M", "%S"],
    ["%m", "%d", "%Y", "%I", "%M", "%S", "%p"],
    ["%b", "%d", "%Y", "%H", "%M", "%S", "%Z"],
    ["%d", "%b", "%Y", "%H", "%M", "%S", "%Z"],
    ["%Y", "%m", "%d", "%H", "%M", "%S", "%f"],
];

const EIGHT: &[[&str; 8]] = &[
    ["%a", "%d", "%b", "%Y", "%H", "%M", "%S", "%Z"],
    ["%a", "%b", "%d", "%Y", "%H", "%M", "%S", "%Z"],
    ["%a", "%b", "%e", "%H", "%M", "%S", "%Z", "%Y"],
];

/// One hypothesis for the field each content segment holds
pub type FieldPattern = &'static [&'static str];

/// Key a list of fixed size patterns by their size, so every pattern stored
/// under `N` has exactly `N` fields
fn keyed<const N: usize>(
    patterns: &'static [[&'static str; N]],
) -> (usize, Vec<FieldPattern>) {
    (N, patterns.iter().map(|p| p.as_slice()).collect())
}

lazy_static! {
    /// Candidate field patterns by number of content segments
    static ref GENERIC_TEMPLATES: HashMap<usize, Vec<FieldPattern>> = HashMap::from([
        keyed(ONE),
        keyed(TWO),
        keyed(THREE),
        keyed(FOUR),
        keyed(FIVE),
        keyed(SIX),
        keyed(SEVEN),
        keyed(EIGHT),
    ]);
}

/// Candidate field patterns for an input with `count` content segments, in
/// priority order. Empty when no pattern has that many fields.
pub fn generic_templates(count: usize) -> &'static [FieldPattern] {
    GENERIC_TEMPLATES
        .get(&count)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[test]
fn test_pattern_length_matches_key() {
    for count in 0..=10 {
        for pattern in generic_templates(count) {
            assert_eq!(pattern.len(), count);
        }
    }
}

#[test]
fn test_counts_without_patterns() {
    assert!(generic_templates(0).is_empty());
    assert!(generic_templates(9).is_empty());
}

#[test]
fn test_priority_order_is_kept() {
    assert_eq!(generic_templates(3)[0], ["%Y", "%m", "%d"]);
    assert_eq!(generic_templates(3)[4], ["%d", "%m", "%Y"]);
    assert_eq!(generic_templates(1).len(), 8);
    assert_eq!(generic_templates(6).len(), 11);
    assert_eq!(EXACT_TEMPLATES[0], "%m/%d/%Y %I:%M %p");
}
