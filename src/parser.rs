//! Statement assembler for tag-annotated SQL scripts.
//!
//! # Script format
//!
//! ```text
//! -- tag=name: Select1          starts a statement named "select1"
//! -- tag=FileName: peoples.psv  attaches a tag to the open statement
//! select *
//!   from peoples;               the terminator finalizes the statement
//! commit;                       control lines are ignored
//! ```
//!
//! The parser is a two-state machine (outside/inside a statement) driven by
//! [`classify_line`]. Finalizing a statement classifies its [`Kind`], escapes
//! literal colons of non-DDL text and assigns the next dense ordinal.

use alloc::string::{String, ToString};

use hashbrown::HashMap;

use crate::errors::Error;
use crate::escape::escape_bind_colons;
use crate::kind::Kind;
use crate::line::{Line, NAME_TAG, classify_line};
use crate::statement::Statement;
use crate::statements::{IndexMap, Statements};

/// The statement currently being assembled.
#[derive(Debug)]
struct Pending {
    name: String,
    tags: HashMap<String, String>,
    text: String,
}

impl Pending {
    fn new(name: String, value: &str) -> Self {
        let mut tags = HashMap::new();
        tags.insert(NAME_TAG.to_string(), value.to_string());
        Self {
            name,
            tags,
            text: String::new(),
        }
    }

    fn push_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(fragment);
    }
}

/// Incremental statement assembler.
///
/// Feed lines with [`Parser::feed_line`] and collect the result with
/// [`Parser::finish`]. Most callers use [`parse`] or `parse_file` instead.
///
/// # Examples
///
/// ```
/// use sql_tagmap::Parser;
///
/// let mut parser = Parser::new();
/// for line in ["-- tag=name: Count", "select count(*)", "from peoples;"] {
///     parser.feed_line(line)?;
/// }
/// let statements = parser.finish();
/// assert_eq!(statements.text("count"), Some("select count(*) from peoples"));
/// # Ok::<(), sql_tagmap::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    statements: IndexMap<String, Statement>,
    pending: Option<Pending>,
}

impl Parser {
    /// Create a parser outside any statement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line of the script.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] when a `name` tag repeats the name of
    /// a statement already in the script.
    pub fn feed_line(&mut self, line: &str) -> Result<(), Error> {
        let line = classify_line(line);
        log::trace!("classified line: {line:?}");

        match line {
            Line::Blank | Line::Control | Line::Comment => {}
            Line::Name(value) => self.open(value)?,
            Line::Tag { key, value } => match self.pending.as_mut() {
                Some(pending) => {
                    pending.tags.insert(key, value.to_string());
                }
                None => log::warn!("ignoring tag {key:?} outside of a named statement"),
            },
            Line::Fragment(fragment) => {
                if let Some(pending) = self.pending.as_mut() {
                    pending.push_fragment(fragment);
                }
            }
            Line::Terminated(fragment) => {
                if let Some(mut pending) = self.pending.take() {
                    pending.push_fragment(fragment);
                    self.finalize(pending);
                }
            }
        }
        Ok(())
    }

    fn open(&mut self, value: &str) -> Result<(), Error> {
        let name = value.to_lowercase();
        if self.statements.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }
        if let Some(abandoned) = self.pending.replace(Pending::new(name, value)) {
            log::warn!(
                "statement {:?} abandoned before its terminator",
                abandoned.name
            );
        }
        Ok(())
    }

    fn finalize(&mut self, pending: Pending) {
        let Pending { name, tags, text } = pending;
        let kind = Kind::of(&text);
        let text = if kind == Kind::Ddl {
            text
        } else {
            escape_bind_colons(&text).into_owned()
        };
        let ordinal = self.statements.len();

        log::debug!("statement {name:?} #{ordinal} finalized as {kind}");
        self.statements
            .insert(name, Statement::new(text, kind, tags, ordinal));
    }

    /// Freeze the statements completed so far.
    ///
    /// An unterminated trailing statement is dropped.
    #[must_use]
    pub fn finish(self) -> Statements {
        if let Some(pending) = self.pending {
            log::warn!(
                "dropping unterminated statement {:?} at end of input",
                pending.name
            );
        }
        Statements::freeze(self.statements)
    }
}

/// Parse a whole script held in memory.
///
/// # Errors
///
/// Returns [`Error::DuplicateName`] when two statements share a name.
///
/// # Examples
///
/// ```
/// use sql_tagmap::{Kind, parse};
///
/// let statements = parse(
///     "-- tag=name: Select1\n\
///      select * from peoples;\n\
///      -- tag=name: Update1\n\
///      update peoples set Name = 'Leo' where ID = 1;\n",
/// )?;
/// assert_eq!(statements.kind("select1"), Kind::Dql);
/// assert_eq!(statements.kind("update1"), Kind::Dml);
/// # Ok::<(), sql_tagmap::Error>(())
/// ```
pub fn parse(script: &str) -> Result<Statements, Error> {
    parse_lines(script.lines())
}

/// Parse a script supplied as a sequence of lines.
///
/// # Errors
///
/// Returns [`Error::DuplicateName`] when two statements share a name.
pub fn parse_lines<I>(lines: I) -> Result<Statements, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parser = Parser::new();
    for line in lines {
        parser.feed_line(line.as_ref())?;
    }
    Ok(parser.finish())
}

/// Parse a script from a buffered reader.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails (including invalid UTF-8) and
/// [`Error::DuplicateName`] when two statements share a name.
#[cfg(feature = "std")]
pub fn parse_reader<R: std::io::BufRead>(reader: R) -> Result<Statements, Error> {
    let mut parser = Parser::new();
    for line in reader.lines() {
        parser.feed_line(&line?)?;
    }
    Ok(parser.finish())
}

/// Open and parse the script at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, in which case
/// parsing is never attempted, and [`Error::DuplicateName`] when two
/// statements share a name.
#[cfg(feature = "std")]
pub fn parse_file<P: AsRef<std::path::Path>>(path: P) -> Result<Statements, Error> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}
