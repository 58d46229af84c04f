use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::obj::TokenCountError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid coordinate '{token}'")]
    InvalidCoordinate {
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error(transparent)]
    TokenCount(#[from] TokenCountError),
    #[error("line {line}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("{}", .path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn invalid_coordinate(token: impl Into<String>, source: ParseFloatError) -> Self {
        Self::InvalidCoordinate {
            token: token.into(),
            source,
        }
    }
    /// Attaches the 1-based line number the error was raised on.
    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }
    /// Attaches the model file the error was raised for.
    pub fn at_path(self, path: impl AsRef<Path>) -> Self {
        Self::Model {
            path: path.as_ref().to_path_buf(),
            source: Box::new(self),
        }
    }
    /// Line number of the offending input line, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Line { line, .. } => Some(*line),
            Error::Model { source, .. } => source.line(),
            _ => None,
        }
    }
}
