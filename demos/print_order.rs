//! Parse a tag-annotated SQL script and print its three traversal orders.
//!
//! Usage: `cargo run --example print_order -- [path]` (defaults to
//! `demos/queries.sql`).

use sql_tagmap::{Cursor, Error, parse_file};

fn print_cursor(title: &str, cursor: Cursor<'_>) {
    println!("{title}");
    for statement in cursor {
        println!("  [{}] {}: {}", statement.kind(), statement.name(), statement.text());
    }
    println!();
}

fn main() -> Result<(), Error> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/queries.sql".to_string());
    let statements = parse_file(&path)?;

    print_cursor(
        "all the statements, in the same order as in the script:",
        statements.file_order(),
    );

    let (sequential, concurrent) = statements.concurrent_cursors();
    print_cursor(
        "statements to run sequentially, preserving script order:",
        sequential,
    );
    print_cursor("statements that may run concurrently:", concurrent);

    Ok(())
}
