//! Stateful cursors over the traversal orders of a [`Statements`] collection.
//!
//! A cursor starts before its first statement. Each [`Cursor::advance`] moves
//! it one statement forward and binds that statement as the current one;
//! moving past the end leaves no current statement. Cursors borrow the
//! collection immutably, so any number of them can walk one collection
//! independently.

use crate::kind::Kind;
use crate::statement::Statement;
use crate::statements::{Order, Statements};

/// A cursor following one traversal order of a [`Statements`] collection.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    statements: &'a Statements,
    order: Order,
    /// Index of the next position in the order to visit.
    next: usize,
    current: Option<(&'a str, &'a Statement)>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(statements: &'a Statements, order: Order) -> Self {
        Self {
            statements,
            order,
            next: 0,
            current: None,
        }
    }

    fn ordinal_at(&self, position: usize) -> Option<usize> {
        match self.statements.ordinals(self.order) {
            Some(ordinals) => ordinals.get(position).copied(),
            None => (position < self.statements.len()).then_some(position),
        }
    }

    /// Move to the next statement.
    ///
    /// Returns `false`, leaving no current statement, once the order is
    /// exhausted.
    pub fn advance(&mut self) -> bool {
        let statements = self.statements;
        self.current = self
            .ordinal_at(self.next)
            .and_then(|ordinal| statements.by_ordinal(ordinal));
        if self.current.is_some() {
            self.next += 1;
        } else {
            self.next = self.len();
        }
        self.current.is_some()
    }

    /// Rewind to before the first statement.
    pub fn reset(&mut self) {
        self.next = 0;
        self.current = None;
    }

    /// The statement bound by the last [`advance`](Self::advance).
    #[must_use]
    pub fn current(&self) -> Option<&'a Statement> {
        self.current.map(|(_, statement)| statement)
    }

    /// Lower-cased name of the current statement.
    #[must_use]
    pub fn current_name(&self) -> Option<&'a str> {
        self.current.map(|(name, _)| name)
    }

    /// SQL text of the current statement.
    #[must_use]
    pub fn current_text(&self) -> Option<&'a str> {
        self.current().map(Statement::text)
    }

    /// Kind of the current statement, [`Kind::Unknown`] when there is none.
    #[must_use]
    pub fn current_kind(&self) -> Kind {
        self.current().map_or(Kind::Unknown, Statement::kind)
    }

    /// Value of `tag` on the current statement.
    #[must_use]
    pub fn current_tag_value(&self, tag: &str) -> Option<&'a str> {
        self.current()?.tag_value(tag)
    }

    /// Total number of statements in this order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements
            .ordinals(self.order)
            .map_or(self.statements.len(), <[usize]>::len)
    }

    /// Whether this order has no statement at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a Statement;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance();
        self.current()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len() - self.next;
        (remaining, Some(remaining))
    }
}
