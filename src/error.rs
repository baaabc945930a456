use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

/// Which of the two input files an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Input {
    Catalogue,
    Sales,
}

impl Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Catalogue => write!(f, "Catalogue"),
            Input::Sales => write!(f, "Sales"),
        }
    }
}

/// Errors that stop a run before any report is produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read file: {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid JSON format in file: {}", .path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0} file must contain a list")]
    NotAList(Input),
}

pub type Result<T> = std::result::Result<T, Error>;
