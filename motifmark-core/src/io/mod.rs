//! Input loaders
//!
//! Turn the two input files of a run into models: a FASTA file of
//! transcripts and a plain-text motif list.

pub mod fasta;
pub mod motifs;

pub use fasta::{parse_sequences, read_sequences};
pub use motifs::{parse_motifs, read_motifs};

use thiserror::Error;

use crate::error::MarkError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Empty file or no sequences found")]
    EmptyFile,

    #[error(transparent)]
    Record(#[from] MarkError),
}

/// Result type for loader operations
pub type InputResult<T> = Result<T, InputError>;
