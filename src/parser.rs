/// Line parser for `FINGERPRINT SPACE+ NAME` records.
///
/// Each input line is validated on its own and either becomes a `Record`
/// or a `ParseError` describing why it was refused. Only U+0020 counts as
/// a separator; tabs and carriage returns are ordinary characters.

use crate::model::{ParseError, Record, DEFAULT_MAX_FINGERPRINT_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParser {
    max_fingerprint_len: usize,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FINGERPRINT_LEN)
    }
}

impl LineParser {
    pub fn new(max_fingerprint_len: usize) -> Self {
        Self { max_fingerprint_len }
    }

    /// Parses a line read as raw bytes. Lines that are not valid UTF-8 are
    /// refused rather than decoded, so distinct byte sequences never collapse
    /// into the same fingerprint or name.
    pub fn parse_bytes(&self, line: &[u8]) -> Result<Record, ParseError> {
        let text = std::str::from_utf8(line).map_err(|_| ParseError::InvalidUtf8)?;
        self.parse(text)
    }

    /// Splits one raw line into a `Record`.
    ///
    /// The line may or may not carry its trailing `\n`. Checks run in order:
    ///   1. leading space
    ///   2. fingerprint scan (too long, or no separator before end of line)
    ///   3. empty name after the run of separating spaces
    pub fn parse(&self, line: &str) -> Result<Record, ParseError> {
        let body = line.strip_suffix('\n').unwrap_or(line);

        if body.starts_with(' ') {
            return Err(ParseError::LeadingSpace);
        }

        let end = body.find([' ', '\n']).unwrap_or(body.len());
        let fingerprint = &body[..end];

        // An over-long fingerprint is reported even when no separator follows.
        let len = fingerprint.chars().count();
        if len > self.max_fingerprint_len {
            return Err(ParseError::FingerprintTooLong {
                len,
                max: self.max_fingerprint_len,
            });
        }

        if !body[end..].starts_with(' ') {
            return Err(ParseError::MissingName);
        }

        let name = body[end..].trim_start_matches(' ');
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }

        Ok(Record {
            fingerprint: fingerprint.to_string(),
            name: name.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fingerprint: &str, name: &str) -> Record {
        Record {
            fingerprint: fingerprint.to_string(),
            name: name.to_string(),
        }
    }

    // --- Accepted -----------------------------------------------------------

    #[test]
    fn test_simple_line_splits_into_fingerprint_and_name() {
        let parser = LineParser::default();
        assert_eq!(parser.parse("fp name\n"), Ok(record("fp", "name")));
    }

    #[test]
    fn test_line_without_trailing_newline_is_accepted() {
        // Last line of a file often has no terminator.
        let parser = LineParser::default();
        assert_eq!(parser.parse("abc Alice"), Ok(record("abc", "Alice")));
    }

    #[test]
    fn test_run_of_spaces_is_one_separator() {
        let parser = LineParser::default();
        assert_eq!(parser.parse("abc     Alice\n"), Ok(record("abc", "Alice")));
    }

    #[test]
    fn test_name_keeps_inner_and_trailing_spaces() {
        let parser = LineParser::default();
        assert_eq!(
            parser.parse("abc Mary Ann Smith  \n"),
            Ok(record("abc", "Mary Ann Smith  "))
        );
    }

    #[test]
    fn test_tab_is_part_of_the_fingerprint() {
        let parser = LineParser::default();
        assert_eq!(parser.parse("a\tb name\n"), Ok(record("a\tb", "name")));
    }

    #[test]
    fn test_carriage_return_stays_in_name() {
        let parser = LineParser::default();
        assert_eq!(parser.parse("abc Alice\r\n"), Ok(record("abc", "Alice\r")));
    }

    #[test]
    fn test_fingerprint_exactly_at_limit_is_accepted() {
        let parser = LineParser::new(8);
        let line = format!("{} name\n", "x".repeat(8));
        assert_eq!(parser.parse(&line), Ok(record(&"x".repeat(8), "name")));
    }

    #[test]
    fn test_fingerprint_length_counts_characters_not_bytes() {
        let parser = LineParser::new(3);
        assert_eq!(parser.parse("äöü name\n"), Ok(record("äöü", "name")));
    }

    // --- Rejected -----------------------------------------------------------

    #[test]
    fn test_leading_space_is_rejected() {
        let parser = LineParser::default();
        assert_eq!(parser.parse(" fp name\n"), Err(ParseError::LeadingSpace));
        assert_eq!(parser.parse(" \n"), Err(ParseError::LeadingSpace));
        assert_eq!(parser.parse("  "), Err(ParseError::LeadingSpace));
    }

    #[test]
    fn test_line_without_separator_is_rejected() {
        let parser = LineParser::default();
        assert_eq!(parser.parse("onlyfingerprint\n"), Err(ParseError::MissingName));
        assert_eq!(parser.parse("onlyfingerprint"), Err(ParseError::MissingName));
    }

    #[test]
    fn test_blank_line_is_rejected() {
        let parser = LineParser::default();
        assert_eq!(parser.parse("\n"), Err(ParseError::MissingName));
        assert_eq!(parser.parse(""), Err(ParseError::MissingName));
    }

    #[test]
    fn test_spaces_only_after_fingerprint_is_rejected() {
        let parser = LineParser::default();
        assert_eq!(parser.parse("fp \n"), Err(ParseError::EmptyName));
        assert_eq!(parser.parse("fp  \n"), Err(ParseError::EmptyName));
        assert_eq!(parser.parse("fp   "), Err(ParseError::EmptyName));
    }

    #[test]
    fn test_fingerprint_one_past_limit_is_rejected() {
        let parser = LineParser::default();
        let line = format!("{} name\n", "x".repeat(513));
        assert_eq!(
            parser.parse(&line),
            Err(ParseError::FingerprintTooLong { len: 513, max: 512 })
        );
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let parser = LineParser::default();
        assert_eq!(parser.parse_bytes(b"k\xff one\n"), Err(ParseError::InvalidUtf8));
        assert_eq!(parser.parse_bytes(b"abc na\xc3\n"), Err(ParseError::InvalidUtf8));
    }

    #[test]
    fn test_valid_utf8_bytes_parse_like_text() {
        let parser = LineParser::default();
        assert_eq!(
            parser.parse_bytes("Zoë Müller\n".as_bytes()),
            Ok(record("Zoë", "Müller"))
        );
    }

    #[test]
    fn test_too_long_wins_over_missing_name() {
        let parser = LineParser::new(4);
        assert_eq!(
            parser.parse("abcdefg\n"),
            Err(ParseError::FingerprintTooLong { len: 7, max: 4 })
        );
    }
}
