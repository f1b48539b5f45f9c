//! Raw text fuzzer: arbitrary input must never panic the parser.

use honggfuzz::fuzz;
use sql_tagmap::testing::check_script_invariants;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(script) = std::str::from_utf8(data) {
                check_script_invariants(script);
            }
        });
    }
}
