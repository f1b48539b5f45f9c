//! Statement termination detection on a single line.
//!
//! At most one `/* ... */` pair is considered per line: the first `/*` and the
//! first `*/` after it. Everything between them (or up to the end of the line
//! when the pair is not closed) is masked. A `--` outside that region masks the
//! rest of the line.

use core::ops::Range;

use super::{BLOCK_CLOSE, BLOCK_OPEN, LINE_COMMENT, TERMINATOR};

/// Comment regions of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Masks {
    /// Byte range covered by the block comment, if any.
    block: Option<Range<usize>>,
    /// Byte offset where an unmasked `--` comment starts, if any.
    line_comment: Option<usize>,
}

impl Masks {
    pub(crate) fn scan(line: &str) -> Self {
        let block = line.find(BLOCK_OPEN).map(|open| {
            let body = open + BLOCK_OPEN.len();
            let end = line[body..]
                .find(BLOCK_CLOSE)
                .map_or(line.len(), |close| body + close + BLOCK_CLOSE.len());
            open..end
        });

        let line_comment = line
            .match_indices(LINE_COMMENT)
            .map(|(pos, _)| pos)
            .find(|pos| !block.as_ref().is_some_and(|b| b.contains(pos)));

        Self {
            block,
            line_comment,
        }
    }

    fn is_masked(&self, pos: usize) -> bool {
        self.block.as_ref().is_some_and(|b| b.contains(&pos))
            || self.line_comment.is_some_and(|start| pos >= start)
    }

    /// The line with any trailing `--` comment removed.
    pub(crate) fn strip_line_comment<'a>(&self, line: &'a str) -> &'a str {
        match self.line_comment {
            Some(start) => line[..start].trim_end(),
            None => line,
        }
    }

    /// Offset of the first terminator that no comment shadows.
    pub(crate) fn terminator(&self, line: &str) -> Option<usize> {
        line.match_indices(TERMINATOR)
            .map(|(pos, _)| pos)
            .find(|&pos| !self.is_masked(pos))
    }
}

/// Whether `line` ends the statement being assembled.
///
/// True iff the line holds a `;` that is neither inside the line's block
/// comment nor after an unmasked `--`.
///
/// # Examples
///
/// ```
/// use sql_tagmap::line::is_terminated;
///
/// assert!(is_terminated("select 1 from dual; -- done"));
/// assert!(!is_terminated("select 1 from dual -- done;"));
/// assert!(!is_terminated("select 1 from dual /* done; */"));
/// ```
#[must_use]
pub fn is_terminated(line: &str) -> bool {
    Masks::scan(line).terminator(line).is_some()
}
