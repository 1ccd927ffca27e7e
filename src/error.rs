// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Error {
    /// Source image missing, unreadable, corrupt or in an unsupported format.
    Decode(String),
    /// Destination not writable, or the container could not be encoded.
    Write(String),
}

impl Error {
    /// Builds a decode error that names the file it came from.
    pub fn decode_at(path: &Path, cause: impl fmt::Display) -> Self {
        Error::Decode(format!("{}: {}", path.display(), cause))
    }

    /// Builds a write error that names the file it was aimed at.
    pub fn write_at(path: &Path, cause: impl fmt::Display) -> Self {
        Error::Write(format!("{}: {}", path.display(), cause))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Write(e) => write!(f, "Write Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
