//! Colon escaping fuzzer: the rewrite must be stable under re-application.

use honggfuzz::fuzz;
use sql_tagmap::testing::check_escape_idempotent;

fn main() {
    loop {
        fuzz!(|text: String| {
            check_escape_idempotent(&text);
        });
    }
}
