use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Which part of the conversion an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Names,
    Nodes,
    Output,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Names => f.write_str("names file"),
            Stage::Nodes => f.write_str("nodes file"),
            Stage::Output => f.write_str("output"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TaxdumpError {
    #[error("{stage}: cannot open {}", .path.display())]
    Open {
        stage: Stage,
        path: PathBuf,
        source: io::Error,
    },
    #[error("{stage}, line {line}: read failed")]
    Read {
        stage: Stage,
        line: usize,
        source: io::Error,
    },
    #[error("{stage}, line {line}: expected at least {expected} '|'-separated fields, found {found}")]
    MissingFields {
        stage: Stage,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{stage}, line {line}: {field} '{value}' is not a valid integer")]
    InvalidInteger {
        stage: Stage,
        line: usize,
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("cannot write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("taxonomy JSON error in {}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl TaxdumpError {
    pub fn stage(&self) -> Stage {
        match self {
            TaxdumpError::Open { stage, .. }
            | TaxdumpError::Read { stage, .. }
            | TaxdumpError::MissingFields { stage, .. }
            | TaxdumpError::InvalidInteger { stage, .. } => *stage,
            TaxdumpError::Write { .. } | TaxdumpError::Json { .. } => Stage::Output,
        }
    }

    /// 1-based input line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            TaxdumpError::Read { line, .. }
            | TaxdumpError::MissingFields { line, .. }
            | TaxdumpError::InvalidInteger { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaxdumpError>;
