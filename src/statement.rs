//! A finalized, named SQL statement.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::kind::Kind;
use crate::line::NAME_TAG;

/// One finalized statement of a script, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statement {
    text: String,
    kind: Kind,
    tags: HashMap<String, String>,
    ordinal: usize,
}

impl Statement {
    pub(crate) fn new(
        text: String,
        kind: Kind,
        tags: HashMap<String, String>,
        ordinal: usize,
    ) -> Self {
        Self {
            text,
            kind,
            tags,
            ordinal,
        }
    }

    /// The assembled SQL, without terminator, lines joined by single spaces.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The kind derived from the leading keyword.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Zero-based position in completion order.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The statement name as spelled in its `name` tag.
    #[must_use]
    pub fn name(&self) -> &str {
        self.tags.get(NAME_TAG).map_or("", String::as_str)
    }

    /// The value of a tag, looked up case-insensitively.
    #[must_use]
    pub fn tag_value(&self, tag: &str) -> Option<&str> {
        self.tags
            .get(tag.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }

    /// All tags, keyed by lower-cased tag name.
    #[must_use]
    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statement: {}", self.text)?;
        writeln!(f, "Kind: {}", self.kind)?;
        let mut tags: Vec<_> = self.tags.iter().collect();
        tags.sort_unstable();
        for (tag, value) in tags {
            writeln!(f, "Tag: {tag} - Value: {value}")?;
        }
        Ok(())
    }
}
