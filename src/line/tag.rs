//! Metadata tag grammar.
//!
//! A tag line has the shape
//!
//! ```text
//! -- tag=<key>: <value>
//! ```
//!
//! with optional blanks around every separator, a case-insensitive `tag`
//! keyword and a key drawn from `[A-Za-z0-9_-]`. The value runs to the end of
//! the line and is only trimmed on its leading side.

use alloc::string::String;

use super::LINE_COMMENT;

/// A metadata tag extracted from a comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag<'a> {
    /// Lower-cased tag key.
    pub(crate) key: String,
    /// Raw value, leading blanks removed.
    pub(crate) value: &'a str,
}

/// Cursor over the bytes of a candidate tag line.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_blanks(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Consume `expected` (ASCII case-insensitive) or fail without moving.
    fn eat(&mut self, expected: &[u8]) -> Option<()> {
        let end = self.pos + expected.len();
        let head = self.input.as_bytes().get(self.pos..end)?;
        if !head.eq_ignore_ascii_case(expected) {
            return None;
        }
        self.pos = end;
        Some(())
    }

    /// Consume a non-empty run of key characters.
    fn key(&mut self) -> Option<&'a str> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        while self.pos < bytes.len() && is_key_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        (self.pos > start).then(|| &self.input[start..self.pos])
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }
}

fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Match `line` against the tag grammar.
///
/// Returns `None` when the line is not a tag line; such lines are then
/// treated as plain comments or SQL by the caller.
pub(crate) fn parse_tag(line: &str) -> Option<Tag<'_>> {
    let mut scanner = Scanner::new(line);
    scanner.skip_blanks();
    scanner.eat(LINE_COMMENT.as_bytes())?;
    scanner.skip_blanks();
    scanner.eat(b"tag")?;
    scanner.skip_blanks();
    scanner.eat(b"=")?;
    scanner.skip_blanks();
    let key = scanner.key()?;
    scanner.skip_blanks();
    scanner.eat(b":")?;
    scanner.skip_blanks();

    Some(Tag {
        key: key.to_ascii_lowercase(),
        value: scanner.rest(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(line: &str) -> Option<(String, &str)> {
        parse_tag(line).map(|t| (t.key, t.value))
    }

    #[test]
    fn test_canonical_form() {
        assert_eq!(tag("-- tag=name: Select1"), Some(("name".into(), "Select1")));
        assert_eq!(
            tag("--tag = FileName : peoples.psv"),
            Some(("filename".into(), "peoples.psv"))
        );
        assert_eq!(
            tag("-- TAG=FileName_2-KK:peoples.unl"),
            Some(("filename_2-kk".into(), "peoples.unl"))
        );
    }

    #[test]
    fn test_value_keeps_inner_and_trailing_content() {
        assert_eq!(
            tag("-- tag=name:   Quantity of peoples  "),
            Some(("name".into(), "Quantity of peoples  "))
        );
        assert_eq!(
            tag("-- tag=repo: /shared/test: a=b"),
            Some(("repo".into(), "/shared/test: a=b"))
        );
        assert_eq!(tag("-- tag=empty:"), Some(("empty".into(), "")));
    }

    #[test]
    fn test_not_a_tag() {
        assert_eq!(tag("-- tag=: unknown 1"), None);
        assert_eq!(tag("-- tag=name Select1"), None);
        assert_eq!(tag("-- kk= unknown 3"), None);
        assert_eq!(tag("-- tags=name: x"), None);
        assert_eq!(tag("select 1 -- tag=name: x"), None);
        assert_eq!(tag("-- tag=na me: x"), None);
    }

    #[test]
    fn test_reversed_separators_are_rejected() {
        assert_eq!(tag("-- tag:name= Quantity of peoples"), None);
        assert_eq!(tag("--tag : NAME= Quantity of pets"), None);
    }

    #[test]
    fn test_non_ascii_value() {
        assert_eq!(tag("-- tag=ciudad: Córdoba"), Some(("ciudad".into(), "Córdoba")));
    }
}
