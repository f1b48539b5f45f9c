//! Invariant checks shared by the fuzz harnesses and the regression tests.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`FuzzScript`]: an `arbitrary`-driven generator of annotated scripts that
//!   mixes well-formed statements with orphan tags, control lines, comments,
//!   repeated names and unterminated statements
//! - [`check_script_invariants`]: parse a script and assert every structural
//!   property of the result
//! - [`check_escape_idempotent`]: assert the colon rewrite is stable

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use arbitrary::Arbitrary;

use crate::{Error, Kind, Statement, Statements, escape_bind_colons, parse};

/// Pool of statement names; small so that duplicates are frequent.
const NAMES: [&str; 6] = ["Select1", "select1", "Update1", "CreateTable", "Odd", "Drop-2"];

/// Leading keywords covering every [`Kind`].
const HEADS: [&str; 9] = [
    "select * from",
    "insert into",
    "update",
    "delete from",
    "merge into",
    "create table",
    "drop table",
    "drop index",
    "grant",
];

/// One generated line of a [`FuzzScript`].
#[derive(Debug, Clone, Arbitrary)]
pub enum FuzzLine {
    /// `-- tag=name: <pooled name>`.
    Name(u8),
    /// `-- tag=<key>: <value>` with an arbitrary value.
    Tag(u8, String),
    /// A statement head drawn from the keyword pool followed by free text.
    Head(u8, String),
    /// Free text, optionally terminated.
    Body(String, bool),
    /// `COMMIT` or `ROLLBACK`.
    Control(bool),
    /// A bare comment.
    Comment(String),
    /// An empty line.
    Blank,
    /// Anything at all.
    Raw(String),
}

/// A generated annotated script.
#[derive(Debug, Clone, Arbitrary)]
pub struct FuzzScript {
    /// The lines of the script.
    pub lines: Vec<FuzzLine>,
}

impl FuzzScript {
    /// Render the script as text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut script = String::new();
        for line in &self.lines {
            let written = match line {
                FuzzLine::Name(i) => {
                    writeln!(script, "-- tag=name: {}", NAMES[usize::from(*i) % NAMES.len()])
                }
                FuzzLine::Tag(i, value) => writeln!(script, "-- tag=key{}: {}", i % 4, one_line(value)),
                FuzzLine::Head(i, rest) => writeln!(
                    script,
                    "{} {}",
                    HEADS[usize::from(*i) % HEADS.len()],
                    one_line(rest)
                ),
                FuzzLine::Body(text, true) => writeln!(script, "{};", one_line(text)),
                FuzzLine::Body(text, false) => writeln!(script, "{}", one_line(text)),
                FuzzLine::Control(true) => writeln!(script, "commit;"),
                FuzzLine::Control(false) => writeln!(script, "rollback; -- undo"),
                FuzzLine::Comment(text) => writeln!(script, "-- {}", one_line(text)),
                FuzzLine::Blank => writeln!(script),
                FuzzLine::Raw(text) => writeln!(script, "{text}"),
            };
            written.expect("writing to a String cannot fail");
        }
        script
    }
}

fn one_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

/// Parse `script` and assert the structural invariants of the result.
///
/// Returns the parsed statements, or `None` when the script holds a
/// duplicate name (which is checked to fail deterministically).
///
/// # Panics
///
/// Panics if any invariant is violated.
pub fn check_script_invariants(script: &str) -> Option<Statements> {
    let first = parse(script);
    let second = parse(script);

    let statements = match (first, second) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b, "parsing is not deterministic");
            a
        }
        (Err(Error::DuplicateName(a)), Err(Error::DuplicateName(b))) => {
            assert_eq!(a, b, "duplicate detection is not deterministic");
            return None;
        }
        (a, b) => panic!("inconsistent results: {a:?} vs {b:?}"),
    };

    for (ordinal, (name, statement)) in statements.names().zip(statements.iter()).enumerate() {
        assert_eq!(statement.ordinal(), ordinal, "ordinals are not dense");
        assert_eq!(name, statement.name().to_lowercase(), "key differs from name tag");
        if statement.kind() != Kind::Ddl {
            check_escape_idempotent(statement.text());
        }
    }

    let file: Vec<usize> = statements.file_order().map(Statement::ordinal).collect();
    let (sequential, concurrent) = statements.concurrent_cursors();
    let sequential: Vec<_> = sequential.collect();
    let concurrent: Vec<_> = concurrent.collect();

    assert_eq!(file, (0..statements.len()).collect::<Vec<_>>());
    assert!(sequential.iter().all(|s| matches!(s.kind(), Kind::Dml | Kind::Ddl)));
    assert!(concurrent.iter().all(|s| s.kind() == Kind::Dql));
    assert!(sequential.is_sorted_by_key(|s| s.ordinal()));
    assert!(concurrent.is_sorted_by_key(|s| s.ordinal()));

    let unknown = statements.iter().filter(|s| s.kind() == Kind::Unknown).count();
    assert_eq!(
        sequential.len() + concurrent.len() + unknown,
        statements.len(),
        "orderings do not partition the known statements"
    );

    Some(statements)
}

/// Assert that escaping `text` twice gives the same result as once.
///
/// # Panics
///
/// Panics if the rewrite is not idempotent, or rewrites text without a
/// colon or without an equals sign.
pub fn check_escape_idempotent(text: &str) {
    let once = escape_bind_colons(text);
    let twice = escape_bind_colons(&once);
    assert_eq!(once, twice, "escape is not idempotent for {text:?}");
    if !text.contains(':') || !text.contains('=') {
        assert_eq!(once, text, "text without bind context was rewritten");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbitrary::Unstructured;

    #[test]
    fn test_rendered_scripts_hold_invariants() {
        for seed in 0u8..64 {
            let bytes: Vec<u8> = (0..=u8::MAX)
                .cycle()
                .take(512)
                .map(|b| seed.wrapping_mul(31).wrapping_add(b))
                .collect();
            let mut u = Unstructured::new(&bytes);
            if let Ok(script) = FuzzScript::arbitrary(&mut u) {
                check_script_invariants(&script.render());
            }
        }
    }

    #[test]
    fn test_render_shapes() {
        let script = FuzzScript {
            lines: alloc::vec![
                FuzzLine::Name(0),
                FuzzLine::Tag(1, "a\nb".into()),
                FuzzLine::Head(0, "t".into()),
                FuzzLine::Body("where x = 1".into(), true),
                FuzzLine::Control(true),
            ],
        };
        assert_eq!(
            script.render(),
            "-- tag=name: Select1\n-- tag=key1: a b\nselect * from t\nwhere x = 1;\ncommit;\n"
        );
        let statements = check_script_invariants(&script.render()).unwrap();
        assert_eq!(statements.text("select1"), Some("select * from t where x = 1"));
    }

    #[test]
    fn test_render_ignorable_lines() {
        let script = FuzzScript {
            lines: alloc::vec![
                FuzzLine::Blank,
                FuzzLine::Comment("note\r".into()),
                FuzzLine::Control(false),
                FuzzLine::Raw("raw text".into()),
            ],
        };
        assert_eq!(script.render(), "\n-- note \nrollback; -- undo\nraw text\n");
    }
}
