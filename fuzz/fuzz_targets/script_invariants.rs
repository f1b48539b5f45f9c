//! Structured script fuzzer.
//!
//! Generates annotated scripts mixing well-formed statements with orphan
//! tags, control lines, comments, repeated names and unterminated statements,
//! then checks every structural invariant of the parsed collection.

use honggfuzz::fuzz;
use sql_tagmap::testing::{FuzzScript, check_script_invariants};

fn main() {
    loop {
        fuzz!(|script: FuzzScript| {
            check_script_invariants(&script.render());
        });
    }
}
