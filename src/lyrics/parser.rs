//! Timestamped lyrics parser
//!
//! Parses synchronized lyrics text where each line starts with one or more
//! timestamp tags:
//!
//! [0:12.34]Hello world
//! [0:15.00][1:02.50]A repeated line

use super::timeline::{LyricLine, Timeline};

/// Parse timestamped lyrics text into a timeline.
///
/// Each input line is evaluated on its own: a line emits one entry per
/// leading timestamp tag, all sharing the trailing text. Lines with no
/// recognized tag, or with nothing left after the tags, are dropped.
/// Malformed input never fails the parse as a whole.
pub fn parse(text: &str) -> Timeline {
    let mut lines = Vec::new();

    for raw in text.lines() {
        let (times, rest) = leading_tags(raw);
        let text = rest.trim();
        if times.is_empty() || text.is_empty() {
            continue;
        }
        for time in times {
            lines.push(LyricLine::new(time, text.to_string()));
        }
    }

    Timeline::from_unsorted(lines)
}

/// Collect every timestamp tag at the start of `line`.
///
/// Returns the parsed times in tag order and the remainder after the last
/// recognized tag. Scanning stops at the first thing that is not a valid
/// tag, so a malformed bracket stays in the remainder. Pure function: no
/// scanner state survives between calls.
fn leading_tags(line: &str) -> (Vec<f64>, &str) {
    let mut times = Vec::new();
    let mut rest = line;

    while rest.starts_with('[') {
        let Some(end) = rest.find(']') else { break };
        let Some(time) = parse_timestamp(&rest[1..end]) else {
            break;
        };
        times.push(time);
        rest = &rest[end + 1..];
    }

    (times, rest)
}

/// Parse a tag body like "0:12", "0:12.5" or "0:12.50" into seconds.
///
/// Minutes may have any number of digits; seconds are exactly two. The
/// fractional part (one or two digits) is read as hundredths, so "0:12.5"
/// is 12.05s, not 12.5s.
fn parse_timestamp(s: &str) -> Option<f64> {
    let (minutes, rest) = s.split_once(':')?;
    let (seconds, fraction) = match rest.split_once('.') {
        Some((sec, frac)) => (sec, Some(frac)),
        None => (rest, None),
    };

    if minutes.is_empty() || !is_digits(minutes) {
        return None;
    }
    if seconds.len() != 2 || !is_digits(seconds) {
        return None;
    }

    let mut secs =
        minutes.parse::<u64>().ok()? as f64 * 60.0 + seconds.parse::<u64>().ok()? as f64;
    if let Some(frac) = fraction {
        if frac.is_empty() || frac.len() > 2 || !is_digits(frac) {
            return None;
        }
        secs += frac.parse::<u64>().ok()? as f64 / 100.0;
    }

    Some(secs)
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("0:12"), Some(12.0));
        assert_eq!(parse_timestamp("1:30"), Some(90.0));
        assert_eq!(parse_timestamp("10:00"), Some(600.0));
        assert_eq!(parse_timestamp("0:12.50"), Some(12.5));
        // One fractional digit is hundredths, not tenths.
        assert_eq!(parse_timestamp("0:12.5"), Some(12.05));
    }

    #[test]
    fn test_parse_timestamp_rejects_malformed() {
        assert_eq!(parse_timestamp("aa:bb"), None);
        assert_eq!(parse_timestamp("12"), None);
        assert_eq!(parse_timestamp("0:5"), None);
        assert_eq!(parse_timestamp("0:123"), None);
        assert_eq!(parse_timestamp("0:12."), None);
        assert_eq!(parse_timestamp("0:12.345"), None);
        assert_eq!(parse_timestamp("-1:00"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_parse_sorts_by_time() {
        let timeline = parse("[1:00.00]second\n[0:10.00]first");
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.lines()[0].text, "first");
        assert_eq!(timeline.lines()[1].text, "second");
    }

    #[test]
    fn test_multiple_tags_share_text() {
        let timeline = parse("[0:10.00][1:00.00]chorus");
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.lines()[0].time, 10.0);
        assert_eq!(timeline.lines()[1].time, 60.0);
        assert!(timeline.lines().iter().all(|l| l.text == "chorus"));
    }

    #[test]
    fn test_same_time_keeps_input_order() {
        let timeline = parse("[00:12.50]Hello\n[00:12.50]World");
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.lines()[0].time, 12.5);
        assert_eq!(timeline.lines()[1].time, 12.5);
        assert_eq!(timeline.lines()[0].text, "Hello");
        assert_eq!(timeline.lines()[1].text, "World");
    }

    #[test]
    fn test_drops_lines_without_tags() {
        assert!(parse("just some words").is_empty());
        assert!(parse("[aa:bb]Hello").is_empty());
        assert!(parse("[00:10 no closing bracket").is_empty());
    }

    #[test]
    fn test_drops_tags_without_text() {
        assert!(parse("[0:10.00]").is_empty());
        assert!(parse("[0:10.00]   ").is_empty());
    }

    #[test]
    fn test_malformed_tag_stays_in_text() {
        let timeline = parse("[0:10.00][oops]late");
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.lines()[0].time, 10.0);
        assert_eq!(timeline.lines()[0].text, "[oops]late");
    }

    #[test]
    fn test_mixed_input_keeps_only_tagged_lines() {
        let text = "header line\n[0:05.00]one\n\n[0:10.00]\n[0:15.00]two";
        let timeline = parse(text);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.lines()[0].text, "one");
        assert_eq!(timeline.lines()[1].text, "two");
    }
}
