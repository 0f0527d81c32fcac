use std::iter;

use chrono::format::{self, Fixed, Item, Numeric, ParseErrorKind, Parsed, StrftimeItems};
use chrono::Weekday;

use crate::lexer::Segment;

/// Build a template by putting the fields of `pattern` in place of the
/// content segments of a lexed line, keeping every separator as it is.
///
/// Returns `None` if the pattern does not have one field per content
/// segment.
pub fn reconstruct(pattern: &[&str], segments: &[Segment]) -> Option<String> {
    let mut fields = pattern.iter();
    let mut template = String::with_capacity(segments.iter().map(|s| s.text.len() + 2).sum());

    for segment in segments {
        if segment.is_content() {
            template.push_str(fields.next()?);
        } else {
            template.push_str(&segment.text);
        }
    }

    // Leftover fields mean the pattern was meant for a longer line
    if fields.next().is_some() {
        return None;
    }

    Some(template)
}

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

const MONTHS: [(&str, i64); 12] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// Whether `text` parses with `template` the way strptime reads it.
///
/// chrono parses each item, with strptime's stricter rules on top:
/// `%Y` takes exactly four digits and `%y` exactly two, `%A` and `%B` take
/// full names only, `%z` also takes `Z`, `%Z` takes a word of letters and a
/// space in the template needs at least one space in the input. Once a year,
/// month and day are known they must make a real date; the weekday is not
/// checked against it. A template chrono cannot read, such as one with a
/// dangling `%`, never parses.
pub fn can_parse(template: &str, text: &str) -> bool {
    let mut parsed = Parsed::new();
    // only the year, month and day fields, so the weekday never takes part
    // in the date check
    let mut date = Parsed::new();
    let mut rest = text;

    for item in StrftimeItems::new(template) {
        let Some(remainder) = parse_item(&mut parsed, rest, &item) else {
            return false;
        };

        if is_date_field(&item) && parse_item(&mut date, rest, &item).is_none() {
            return false;
        }

        rest = remainder;
    }

    if !rest.is_empty() {
        return false;
    }

    match date.to_naive_date() {
        Ok(_) => true,
        Err(e) => e.kind() == ParseErrorKind::NotEnough,
    }
}

/// Parse one item at the start of `s`, returning what is left
fn parse_item<'b>(parsed: &mut Parsed, s: &'b str, item: &Item<'_>) -> Option<&'b str> {
    match item {
        Item::Error => None,
        Item::Space(_) => s.starts_with(char::is_whitespace).then(|| s.trim_start()),
        Item::Numeric(Numeric::Year, _) => {
            let (year, rest) = fixed_digits(s, 4)?;
            parsed.set_year(year).ok()?;
            Some(rest)
        }
        Item::Numeric(Numeric::YearMod100, _) => {
            let (year, rest) = fixed_digits(s, 2)?;
            parsed.set_year_mod_100(year).ok()?;
            Some(rest)
        }
        Item::Fixed(Fixed::TimezoneOffset | Fixed::TimezoneOffsetColon)
            if s.starts_with('Z') =>
        {
            parsed.set_offset(0).ok()?;
            Some(&s[1..])
        }
        Item::Fixed(Fixed::TimezoneName) => {
            let len = s.bytes().take_while(u8::is_ascii_alphabetic).count();
            (len > 0).then(|| &s[len..])
        }
        Item::Fixed(Fixed::LongWeekdayName) => {
            let (weekday, rest) = full_name(s, &WEEKDAYS)?;
            parsed.set_weekday(weekday).ok()?;
            Some(rest)
        }
        Item::Fixed(Fixed::LongMonthName) => {
            let (month, rest) = full_name(s, &MONTHS)?;
            parsed.set_month(month).ok()?;
            Some(rest)
        }
        _ => format::parse_and_remainder(parsed, s, iter::once(item)).ok(),
    }
}

fn is_date_field(item: &Item<'_>) -> bool {
    matches!(
        item,
        Item::Numeric(
            Numeric::Year | Numeric::YearMod100 | Numeric::Month | Numeric::Day,
            _
        ) | Item::Fixed(Fixed::ShortMonthName | Fixed::LongMonthName)
    )
}

/// Exactly `n` ASCII digits at the start of `s`
fn fixed_digits(s: &str, n: usize) -> Option<(i64, &str)> {
    let head = s.as_bytes().get(..n)?;

    if !head.iter().all(u8::is_ascii_digit) {
        return None;
    }

    Some((s[..n].parse().ok()?, &s[n..]))
}

/// The full name at the start of `s`, ignoring case
fn full_name<'b, T: Copy>(s: &'b str, names: &[(&str, T)]) -> Option<(T, &'b str)> {
    names.iter().find_map(|&(name, value)| {
        let head = s.as_bytes().get(..name.len())?;
        head.eq_ignore_ascii_case(name.as_bytes())
            .then(|| (value, &s[name.len()..]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_reconstruct_keeps_separators() {
        let segments = Segment::lex_line("Thu, 24 Jan 2030");
        let template = reconstruct(&["%a", "%d", "%b", "%Y"], &segments);

        assert_eq!(template.as_deref(), Some("%a, %d %b %Y"));
    }

    #[test]
    fn test_reconstruct_leading_and_trailing_separators() {
        let segments = Segment::lex_line("[05:45]");
        let template = reconstruct(&["%H", "%M"], &segments);

        assert_eq!(template.as_deref(), Some("[%H:%M]"));
    }

    #[test]
    fn test_reconstruct_composite_fields() {
        let segments = Segment::lex_line("2030-01-24T05:45:30");
        let template = reconstruct(&["%Y", "%m", "%dT%H", "%M", "%S"], &segments);

        assert_eq!(template.as_deref(), Some("%Y-%m-%dT%H:%M:%S"));
    }

    #[test]
    fn test_reconstruct_rejects_length_mismatch() {
        let segments = Segment::lex_line("2030-01-24");

        assert_eq!(reconstruct(&["%Y", "%m"], &segments), None);
        assert_eq!(reconstruct(&["%Y", "%m", "%d", "%H"], &segments), None);
    }

    #[test]
    fn test_reconstruct_empty() {
        assert_eq!(reconstruct(&[], &[]).as_deref(), Some(""));
    }

    #[test_case("%Y-%m-%d %H:%M", "2030-01-24 05:45" ; "iso minutes")]
    #[test_case("%a, %d %b %Y %H:%M:%S", "Thu, 24 Jan 2030 05:45:30" ; "rfc 2822")]
    #[test_case("%Y-%m-%dT%H:%M:%S%z", "2030-01-24T05:45:30+0000" ; "offset")]
    #[test_case("%Y-%m-%d %H:%M:%S%z", "2030-01-24 05:45:30+01:00" ; "offset with colon")]
    #[test_case("%m/%d/%Y %I:%M %p", "01/24/2030 05:45 AM" ; "twelve hour clock")]
    #[test_case("%Y-%j", "2030-024" ; "ordinal")]
    #[test_case("%B %d, %Y", "January 24, 2030" ; "long month")]
    #[test_case("%b %Y", "Jan 2030" ; "no day")]
    #[test_case("%m/%d/%y", "01/24/30" ; "two digit year")]
    #[test_case("%Y-%m-%d %H:%M:%S%z", "2030-01-24 05:45:30Z" ; "zulu offset")]
    #[test_case("%m/%d/%Y", "02/29/2028" ; "leap day")]
    #[test_case("%A", "Thursday" ; "full weekday")]
    #[test_case("%a, %d %b %Y", "Mon, 24 Jan 2030" ; "weekday not checked against date")]
    #[test_case("%a %b %e %H:%M:%S %Z %Y", "Thu Jan 24 05:45:30 UTC 2030" ; "zone name")]
    #[test_case("%H:%M   %p", "05:45 AM" ; "space matches any whitespace run")]
    fn test_can_parse(template: &str, text: &str) {
        assert!(can_parse(template, text));
    }

    #[test_case("%Y-%m-%d", "2030-01-24 05:45" ; "trailing input")]
    #[test_case("%Y-%m-%d %H:%M", "2030-01-24" ; "missing input")]
    #[test_case("%m/%d/%Y", "13/24/2030" ; "month out of range")]
    #[test_case("%b %d", "Foo 24" ; "unknown month name")]
    #[test_case("%H:%M%", "05:45" ; "dangling percent")]
    #[test_case("%H:%M%-z", "05:45+0100" ; "padding on offset")]
    #[test_case("%Y", "" ; "empty input")]
    #[test_case("%Y:%j", "05:45" ; "two digit four digit year")]
    #[test_case("%m/%d/%Y", "01/24/30" ; "short four digit year")]
    #[test_case("%m/%d/%y", "01/24/2030" ; "long two digit year")]
    #[test_case("%m/%d/%Y", "02/30/2030" ; "no such day")]
    #[test_case("%m/%d/%Y", "02/29/2030" ; "not a leap year")]
    #[test_case("%A", "Thu" ; "abbreviated full weekday")]
    #[test_case("%B", "Jan" ; "abbreviated full month")]
    #[test_case("%H/%M/%Z", "02/30/2030" ; "digits as zone name")]
    #[test_case("%H:%M %p", "05:45AM" ; "missing space")]
    #[test_case("%H:%M%z", "05:45z" ; "lowercase zulu")]
    fn test_cannot_parse(template: &str, text: &str) {
        assert!(!can_parse(template, text));
    }
}
