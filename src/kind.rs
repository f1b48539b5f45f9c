//! Leading-keyword classification of finished statements.
//!
//! This is a syntactic heuristic over the first few characters of the
//! statement text, not a SQL grammar: nothing past the leading keyword is
//! inspected or validated.

use core::fmt;

/// Statements shorter than this many bytes are always [`Kind::Unknown`].
const MIN_CLASSIFIABLE_LEN: usize = 10;

/// Width of the window holding the single leading keyword.
const KEYWORD_WINDOW: usize = 6;

/// Keywords matched against the 6-byte leading window.
const DML_KEYWORDS: [&[u8]; 4] = [b"INSERT", b"UPDATE", b"DELETE", b"MERGE"];

/// Two-word DDL prefixes matched against the 10-byte leading window.
const DROP_PREFIXES: [&[u8]; 2] = [b"DROP TABLE", b"DROP INDEX"];

/// The kind of a SQL statement, derived from its leading keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Unclassified statement.
    #[default]
    Unknown,
    /// Data manipulation (`INSERT`, `UPDATE`, `DELETE`, `MERGE`).
    Dml,
    /// Data query (`SELECT`).
    Dql,
    /// Data definition (`CREATE`, `DROP TABLE`, `DROP INDEX`).
    Ddl,
}

impl Kind {
    /// Classify a finished statement by its leading keyword.
    ///
    /// The text is expected to be trimmed already.
    ///
    /// # Examples
    ///
    /// ```
    /// use sql_tagmap::Kind;
    ///
    /// assert_eq!(Kind::of("select * from dual"), Kind::Dql);
    /// assert_eq!(Kind::of("drop index kkx1"), Kind::Ddl);
    /// assert_eq!(Kind::of("select 1"), Kind::Unknown);
    /// ```
    #[must_use]
    pub fn of(text: &str) -> Self {
        let bytes = text.as_bytes();
        if bytes.len() < MIN_CLASSIFIABLE_LEN {
            return Self::Unknown;
        }

        let window = &bytes[..KEYWORD_WINDOW];
        if DML_KEYWORDS.iter().any(|kw| starts_with_keyword(window, kw)) {
            return Self::Dml;
        }
        if window.eq_ignore_ascii_case(b"SELECT") {
            return Self::Dql;
        }
        if window.eq_ignore_ascii_case(b"CREATE") {
            return Self::Ddl;
        }

        let window = &bytes[..MIN_CLASSIFIABLE_LEN];
        if DROP_PREFIXES.iter().any(|p| window.eq_ignore_ascii_case(p)) {
            return Self::Ddl;
        }
        Self::Unknown
    }

    /// Whether statements of this kind only read data.
    #[must_use]
    pub fn is_query(self) -> bool {
        self == Self::Dql
    }
}

/// Case-insensitive check that `window` begins with `keyword`.
fn starts_with_keyword(window: &[u8], keyword: &[u8]) -> bool {
    window
        .get(..keyword.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(keyword))
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "UNKNOWN",
            Self::Dml => "DML",
            Self::Dql => "DQL",
            Self::Ddl => "DDL",
        })
    }
}
