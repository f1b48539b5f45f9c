//! The frozen collection of parsed statements.

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use indexmap::IndexMap as IndexMapRaw;

use crate::cursor::Cursor;
use crate::errors::Error;
use crate::kind::Kind;
use crate::statement::Statement;

/// `IndexMap` alias using hashbrown's default hasher for `no_std` compatibility.
pub(crate) type IndexMap<K, V> = IndexMapRaw<K, V, hashbrown::DefaultHashBuilder>;

/// Statements of one script, keyed by lower-cased name.
///
/// Insertion order is completion order, so the position of an entry in the
/// map is its ordinal. The three traversal orders are computed once when the
/// collection is frozen by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    by_name: IndexMap<String, Statement>,
    sequential: Vec<usize>,
    concurrent: Vec<usize>,
}

impl Statements {
    pub(crate) fn freeze(by_name: IndexMap<String, Statement>) -> Self {
        let mut sequential = Vec::new();
        let mut concurrent = Vec::new();
        for (ordinal, statement) in by_name.values().enumerate() {
            debug_assert_eq!(statement.ordinal(), ordinal);
            match statement.kind() {
                Kind::Dql => concurrent.push(ordinal),
                Kind::Dml | Kind::Ddl => sequential.push(ordinal),
                Kind::Unknown => {}
            }
        }

        log::debug!(
            "froze {} statements: {} sequential, {} concurrent-eligible",
            by_name.len(),
            sequential.len(),
            concurrent.len()
        );

        Self {
            by_name,
            sequential,
            concurrent,
        }
    }

    /// Look up a statement by name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Statement> {
        self.by_name.get(name.to_lowercase().as_str())
    }

    /// The SQL text of the named statement.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).map(Statement::text)
    }

    /// The kind of the named statement, [`Kind::Unknown`] when absent.
    #[must_use]
    pub fn kind(&self, name: &str) -> Kind {
        self.get(name).map_or(Kind::Unknown, Statement::kind)
    }

    /// The value of `tag` on the named statement.
    #[must_use]
    pub fn tag_value(&self, name: &str, tag: &str) -> Option<&str> {
        self.get(name)?.tag_value(tag)
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the script held no complete statement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Lower-cased statement names in file order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Statements in file order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Statement> {
        self.by_name.values()
    }

    /// A cursor over every statement in file order.
    #[must_use]
    pub fn file_order(&self) -> Cursor<'_> {
        Cursor::new(self, Order::File)
    }

    /// Cursors over the sequential and the concurrent-eligible statements.
    ///
    /// The first cursor visits DML and DDL statements, the second DQL
    /// statements, both in file order. Statements of [`Kind::Unknown`] are in
    /// neither. Running the concurrent-eligible ones in parallel is left to
    /// the caller.
    #[must_use]
    pub fn concurrent_cursors(&self) -> (Cursor<'_>, Cursor<'_>) {
        (
            Cursor::new(self, Order::Sequential),
            Cursor::new(self, Order::Concurrent),
        )
    }

    pub(crate) fn by_ordinal(&self, ordinal: usize) -> Option<(&str, &Statement)> {
        self.by_name
            .get_index(ordinal)
            .map(|(name, statement)| (name.as_str(), statement))
    }

    pub(crate) fn ordinals(&self, order: Order) -> Option<&[usize]> {
        match order {
            Order::File => None,
            Order::Sequential => Some(&self.sequential),
            Order::Concurrent => Some(&self.concurrent),
        }
    }
}

/// The traversal orders a [`Cursor`] can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Order {
    File,
    Sequential,
    Concurrent,
}

impl FromStr for Statements {
    type Err = Error;

    fn from_str(script: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(script)
    }
}

impl<'a> IntoIterator for &'a Statements {
    type Item = &'a Statement;
    type IntoIter = indexmap::map::Values<'a, String, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_name.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "
-- tag=name: Select1
-- tag=FileName: peoples.psv
select * from peoples;
-- tag=name: Update1
update peoples set Name = 'Leo' where ID = 1;
-- tag=name: Odd
grant all;
-- tag=name: CreateTable
create table countries (ID number, Name varchar2(50));
";

    #[test]
    fn test_lookup_is_case_insensitive() {
        let statements: Statements = SCRIPT.parse().unwrap();
        assert_eq!(statements.len(), 4);
        assert_eq!(statements.text("SELECT1"), Some("select * from peoples"));
        assert_eq!(statements.kind("update1"), Kind::Dml);
        assert_eq!(statements.tag_value("Select1", "FILENAME"), Some("peoples.psv"));
        assert_eq!(statements.get("select1").map(Statement::ordinal), Some(0));
    }

    #[test]
    fn test_unknown_names_and_tags() {
        let statements: Statements = SCRIPT.parse().unwrap();
        assert!(statements.get("nope").is_none());
        assert_eq!(statements.text("nope"), None);
        assert_eq!(statements.kind("nope"), Kind::Unknown);
        assert_eq!(statements.tag_value("nope", "name"), None);
        assert_eq!(statements.tag_value("select1", "nope"), None);
    }

    #[test]
    fn test_partitions() {
        let statements: Statements = SCRIPT.parse().unwrap();
        assert_eq!(statements.ordinals(Order::Sequential), Some(&[1, 3][..]));
        assert_eq!(statements.ordinals(Order::Concurrent), Some(&[0][..]));
        assert_eq!(
            statements.names().collect::<Vec<_>>(),
            ["select1", "update1", "odd", "createtable"]
        );
        assert_eq!(statements.kind("odd"), Kind::Unknown);
    }

    #[test]
    fn test_by_ordinal() {
        let statements: Statements = SCRIPT.parse().unwrap();
        let (name, statement) = statements.by_ordinal(1).unwrap();
        assert_eq!(name, "update1");
        assert_eq!(statement.name(), "Update1");
        assert!(statements.by_ordinal(4).is_none());
        assert_eq!((&statements).into_iter().count(), 4);
    }
}
