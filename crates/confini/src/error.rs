use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decode input that cannot be read as text.
    #[error("expecting string but got {found}")]
    InvalidInputType { found: String },

    /// Both `\r` and `\n` occur but never as an adjacent pair.
    #[error("found multiple line endings")]
    AmbiguousLineEnding,

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = core::result::Result<T, Error>;
