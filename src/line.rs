//! Line classification.
//!
//! Every input line is classified on its own, without looking at its
//! neighbours. The [`Parser`](crate::Parser) then drives its
//! outside/inside-a-statement state machine from the resulting [`Line`].

mod tag;
mod terminator;

use alloc::string::String;

pub use terminator::is_terminated;

/// Single-line comment marker.
pub const LINE_COMMENT: &str = "--";
/// Block comment opening marker.
pub const BLOCK_OPEN: &str = "/*";
/// Block comment closing marker.
pub const BLOCK_CLOSE: &str = "*/";
/// Statement terminator.
pub const TERMINATOR: &str = ";";
/// Reserved tag key that starts a new statement.
pub const NAME_TAG: &str = "name";

/// Transaction control keywords whose lines are never part of a statement.
const CONTROL_KEYWORDS: [&[u8]; 2] = [b"COMMIT", b"ROLLBACK"];

/// The classification of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// `COMMIT` or `ROLLBACK` control statement.
    Control,
    /// Comment line that is not a tag.
    Comment,
    /// `-- tag=name: <value>`, starting a new statement.
    Name(&'a str),
    /// Any other tag, attached to the statement being assembled.
    Tag {
        /// Lower-cased tag key.
        key: String,
        /// Raw tag value.
        value: &'a str,
    },
    /// SQL text that does not end the statement.
    Fragment(&'a str),
    /// SQL text ending the statement; the terminator and anything after it
    /// are excluded.
    Terminated(&'a str),
}

impl Line<'_> {
    /// Whether this line never affects the parser state.
    #[must_use]
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Self::Blank | Self::Control | Self::Comment)
    }
}

/// Classify a single line of an annotated SQL script.
///
/// # Examples
///
/// ```
/// use sql_tagmap::{Line, classify_line};
///
/// assert_eq!(classify_line("  commit;"), Line::Control);
/// assert_eq!(classify_line("-- tag=name: Select1"), Line::Name("Select1"));
/// assert_eq!(
///     classify_line("select * from t; -- all rows"),
///     Line::Terminated("select * from t")
/// );
/// ```
#[must_use]
pub fn classify_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if is_control(line) {
        return Line::Control;
    }

    if let Some(tag) = tag::parse_tag(line) {
        if tag.key == NAME_TAG {
            return Line::Name(tag.value);
        }
        return Line::Tag {
            key: tag.key,
            value: tag.value,
        };
    }

    if line.starts_with(LINE_COMMENT) {
        return Line::Comment;
    }

    let masks = terminator::Masks::scan(line);
    let code = masks.strip_line_comment(line);
    match masks.terminator(code) {
        Some(pos) => Line::Terminated(code[..pos].trim_end()),
        None => Line::Fragment(code),
    }
}

/// Whether the line begins with a control keyword, ASCII case-insensitive.
///
/// Only the prefix is compared, so `committed_rows = 1;` is a control line
/// as well.
fn is_control(line: &str) -> bool {
    let bytes = line.as_bytes();
    CONTROL_KEYWORDS.iter().any(|kw| {
        bytes
            .get(..kw.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(kw))
    })
}
