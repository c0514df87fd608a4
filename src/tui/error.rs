//! Error types for the interactive session.

use thiserror::Error;

/// A single answer that could not be accepted. The session re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a value.")]
    Empty,

    #[error("'{0}' is not a number.")]
    NotANumber(String),

    #[error("{value} is out of range, enter a number from {min} to {max}.")]
    OutOfRange { value: usize, min: usize, max: usize },

    #[error("'{input}' is not recognized, expected {expected}.")]
    UnrecognizedChoice {
        input: String,
        expected: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed before a password was accepted")]
    InputClosed,

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
