//! Submodule defining the errors used across the crate.

use alloc::string::String;

/// Errors that can occur while parsing an annotated SQL script.
///
/// Only structural failures are errors. Malformed but recoverable input
/// (unterminated trailing statements, orphan tags, unknown leading keywords)
/// is handled permissively by the parser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `name` tag repeats a statement name already present in the script.
    ///
    /// The payload is the lower-cased name.
    #[error("Duplicated statement name: {0:?}")]
    DuplicateName(String),

    /// The script could not be opened or read.
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the duplicated name, if this is a [`Error::DuplicateName`].
    #[must_use]
    pub fn duplicate_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateName(name) => Some(name),
            #[cfg(feature = "std")]
            Self::Io(_) => None,
        }
    }
}
