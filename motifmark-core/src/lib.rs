//! motifmark core library
//!
//! Motif and transcript models, IUPAC resolution, overlapping motif search,
//! diagram layout and rendering to an abstract drawing surface.

pub mod error;
pub mod ambiguity;
pub mod motif;
pub mod sequence;
pub mod search;
pub mod palette;
pub mod layout;
pub mod render;
#[cfg(feature = "io-fasta")] pub mod io;

// Re-export commonly used types and functions
pub use error::{MarkError, MarkResult};
pub use ambiguity::{BaseClass, MatchPattern};
pub use motif::{Motif, MotifSet};
pub use sequence::Sequence;
pub use search::{annotate, annotate_all, find_occurrences, AnnotatedSequence, MotifHits, PositionIndex};
pub use palette::{ColorMap, Rgb, PALETTE};
pub use layout::{compute_layout, Geometry};
pub use render::{render, render_to, DrawCommand, DrawingSurface, Scene};

/// Version information for the motifmark core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
