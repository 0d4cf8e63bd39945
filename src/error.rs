//! Errors raised while driving a tree through the interactive menu. The tree itself has no
//! failure modes: missing and duplicate keys are ordinary outcomes.

use std::io;

use thiserror::Error;

/// Errors the [`Menu`][crate::Menu] can run into.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Reading input or writing output failed. This ends the session.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line that should hold a number did not parse as one.
    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    /// A number was entered that no menu entry uses.
    #[error("Invalid option {0}!")]
    UnknownOption(i64),
}

impl MenuError {
    /// Whether the session can carry on after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MenuError::Io(_))
    }
}
