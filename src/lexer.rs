use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Whether a run of the input is replaced by a field specifier or copied
/// into the template as is
pub enum SegmentKind {
    /// Field data, e.g. `2030`, `Jan`, `AM` or `30+01:00`
    Content,
    /// Literal punctuation or whitespace, e.g. `-`, `, ` or `:`
    Separator,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Content => f.pad("content"),
            SegmentKind::Separator => f.pad("separator"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
/// A maximal run of the input string together with its classification
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn new(text: &str, kind: SegmentKind) -> Self {
        Segment {
            text: text.to_string(),
            kind,
        }
    }

    pub fn is_content(&self) -> bool {
        self.kind == SegmentKind::Content
    }

    /// Split a string into alternating content and separator segments.
    ///
    /// Nothing is dropped: concatenating the text of every segment gives
    /// back the input.
    pub fn lex_line(s: &str) -> Vec<Segment> {
        let bytes = s.as_bytes();
        let mut segments = Vec::new();
        let mut start = 0;

        while start < bytes.len() {
            let end = if bytes[start].is_ascii_alphanumeric() {
                start + content_len(&s[start..])
            } else {
                // Alphanumeric bytes are ASCII, so the run always ends on a
                // char boundary
                bytes[start..]
                    .iter()
                    .position(u8::is_ascii_alphanumeric)
                    .map_or(bytes.len(), |p| start + p)
            };

            let text = &s[start..end];
            segments.push(Segment::new(text, classify(text)));
            start = end;
        }

        segments
    }
}

/// Number of content segments in a lexed line, the key into the generic
/// template table
pub fn content_count(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| s.is_content()).count()
}

/// Classify a single run of characters
pub fn classify(run: &str) -> SegmentKind {
    if !run.is_empty() && run.bytes().all(|b| b.is_ascii_alphanumeric()) {
        SegmentKind::Content
    } else if is_offset_run(run) {
        SegmentKind::Content
    } else {
        SegmentKind::Separator
    }
}

/// Length of the content run at the start of `s`, which must begin with an
/// alphanumeric character.
///
/// A run of digits directly followed by an offset (`13-0700`) is taken as a
/// whole, otherwise the run stops at the first non alphanumeric character.
fn content_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();

    if digits > 0 {
        if let Some(offset) = offset_len(&s[digits..]) {
            return digits + offset;
        }
    }

    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count()
}

/// Length of a `+hhmm` or `+hh:mm` offset at the start of `s`
fn offset_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    if !matches!(bytes.first(), Some(b'+' | b'-')) || !digit(1) || !digit(2) {
        return None;
    }

    if bytes.get(3) == Some(&b':') && digit(4) && digit(5) {
        Some(6)
    } else if digit(3) && digit(4) {
        Some(5)
    } else {
        None
    }
}

/// Whether the whole run is digits followed by an offset, e.g. `30+01:00`
fn is_offset_run(run: &str) -> bool {
    let digits = run.bytes().take_while(u8::is_ascii_digit).count();

    digits > 0 && offset_len(&run[digits..]) == Some(run.len() - digits)
}
