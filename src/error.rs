use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure is fatal. The generator runs at development time, so a bad
/// schema should stop the build with the offending text quoted, not produce
/// a file with holes in it.
#[derive(Debug, Error)]
pub enum Error {
    /// A field declaration needs at least a type token and an identifier
    /// token.
    #[error("malformed field declaration `{0}`: expected `<type> <identifier>`")]
    MalformedField(String),

    #[error("duplicate field `{identifier}` in node `{node}`")]
    DuplicateField { node: String, identifier: String },

    #[error("duplicate node `{node}` in family `{family}`")]
    DuplicateNode { family: String, node: String },

    #[error("duplicate family `{0}`")]
    DuplicateFamily(String),

    /// Structural problem in schema text, with the offending part quoted.
    #[error("{0}")]
    Schema(String),

    #[error("failed to read schema `{path}`: {source}")]
    ReadSchema { path: PathBuf, source: io::Error },

    #[error("failed to create output directory `{path}`: {source}")]
    CreateOutDir { path: PathBuf, source: io::Error },

    #[error("failed to write `{path}`: {source}")]
    WriteUnit { path: PathBuf, source: io::Error },
}
