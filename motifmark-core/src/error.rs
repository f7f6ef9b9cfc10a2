//! Error types for the annotation and layout pipeline.

use thiserror::Error;

/// Errors raised while building models, laying out or rendering a diagram.
///
/// Every variant is fatal to a run. `index` fields hold the 0-based record
/// index when the error was raised by a collection builder; a bare
/// constructor call leaves them as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkError {
    #[error("motif '{motif}' contains invalid character {character:?} at offset {offset}")]
    InvalidMotifCharacter {
        motif: String,
        character: char,
        offset: usize,
    },

    #[error("empty motif{}", describe_index(.index))]
    EmptyMotif { index: Option<usize> },

    #[error("sequence record has an empty name{}", describe_index(.index))]
    EmptyName { index: Option<usize> },

    #[error("sequence '{name}' has no bases")]
    EmptySequence { name: String },

    #[error("{count} motifs supplied but the palette only holds {capacity} colors")]
    TooManyMotifs { count: usize, capacity: usize },

    #[error("no sequences to draw")]
    NoSequences,

    #[error("layout has {rows} rows but {sequences} annotated sequences were supplied")]
    RowMismatch { rows: usize, sequences: usize },

    #[error("motif '{motif}' has no color in the layout")]
    UncoloredMotif { motif: String },
}

impl MarkError {
    /// Attach a record index to errors that carry one.
    pub fn at_index(self, record: usize) -> Self {
        match self {
            Self::EmptyMotif { .. } => Self::EmptyMotif { index: Some(record) },
            Self::EmptyName { .. } => Self::EmptyName { index: Some(record) },
            other => other,
        }
    }
}

fn describe_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" (record #{})", i + 1),
        None => String::new(),
    }
}

/// Result type for core operations
pub type MarkResult<T> = Result<T, MarkError>;
