#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod cursor;
pub mod errors;
pub mod escape;
pub mod kind;
pub mod line;
pub mod parser;
pub mod statement;
pub mod statements;
#[cfg(feature = "testing")]
pub mod testing;

pub use cursor::Cursor;
pub use errors::Error;
pub use escape::escape_bind_colons;
pub use kind::Kind;
pub use line::{Line, classify_line};
#[cfg(feature = "std")]
pub use parser::{parse_file, parse_reader};
pub use parser::{Parser, parse, parse_lines};
pub use statement::Statement;
pub use statements::Statements;
