//! Error types for loading a problem instance and running the planner.

use std::path::PathBuf;

/// A malformed line in the input file.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("`{record}` record expects {expected} fields, found {found}")]
    FieldCount {
        record: char,
        expected: &'static str,
        found: usize,
    },

    #[error("{field} `{value}` is not an HHMM time")]
    InvalidTime { field: &'static str, value: String },

    #[error("profit `{value}` for model {model} is not a number")]
    InvalidProfit { model: String, value: String },

    #[error("model `{0}` has no profit value")]
    DanglingModel(String),
}

/// Cross-record inconsistencies found while building the registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("airport {0} is declared more than once")]
    DuplicateAirport(String),

    #[error("rotation time for model {0} is declared more than once")]
    DuplicateModel(String),

    #[error("aircraft {tail} uses model {model} which has no rotation time")]
    UnknownModel { tail: String, model: String },

    #[error("leg {leg} references unknown airport {airport}")]
    UnknownAirport { leg: usize, airport: String },

    #[error("leg {leg} lists model {model} more than once")]
    DuplicateProfit { leg: usize, model: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
