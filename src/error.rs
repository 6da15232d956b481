//! Crate-level error types.

use std::fmt;

use crate::molecule::MoleculeId;

/// Errors produced by the photocat crate.
#[derive(Debug)]
pub enum DashboardError {
    /// The feature dataset could not be read or is malformed. Fatal at
    /// startup.
    DataLoad(String),
    /// No structure artifact exists for the identifier.
    StructureNotFound(MoleculeId),
    /// A structure artifact exists but could not be decoded.
    StructureParse {
        /// Identifier of the offending artifact.
        id: MoleculeId,
        /// Decoder message.
        message: String,
    },
    /// A chart request named a column (or grouping) the dataset lacks.
    UnknownColumn(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// HTTP server failure.
    Server(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataLoad(msg) => write!(f, "dataset load error: {msg}"),
            Self::StructureNotFound(id) => {
                write!(f, "no structure artifact for molecule {id}")
            }
            Self::StructureParse { id, message } => {
                write!(f, "structure {id} is malformed: {message}")
            }
            Self::UnknownColumn(name) => write!(f, "unknown column: {name}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Server(msg) => write!(f, "server error: {msg}"),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for DashboardError {
    fn from(e: csv::Error) -> Self {
        Self::DataLoad(e.to_string())
    }
}
