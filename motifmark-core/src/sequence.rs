//! Sequence model
//!
//! Case carries the gene structure: upper-case letters are exonic, lower-case
//! letters intronic.

use serde::{Deserialize, Serialize};

use crate::error::{MarkError, MarkResult};

/// A named transcript with its exon positions derived from case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    name: String,
    bases: String,
    exon_positions: Vec<usize>,
}

impl Sequence {
    pub fn new(name: impl Into<String>, bases: impl Into<String>) -> MarkResult<Self> {
        let name = name.into();
        let bases = bases.into();
        if name.is_empty() {
            return Err(MarkError::EmptyName { index: None });
        }
        if bases.is_empty() {
            return Err(MarkError::EmptySequence { name });
        }
        let exon_positions = bases
            .bytes()
            .enumerate()
            .filter(|(_, b)| b.is_ascii_uppercase())
            .map(|(i, _)| i + 1)
            .collect();
        Ok(Self {
            name,
            bases,
            exon_positions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bases as supplied, case preserved.
    pub fn bases(&self) -> &str {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// 1-based positions of upper-case (exonic) bases, strictly increasing.
    pub fn exon_positions(&self) -> &[usize] {
        &self.exon_positions
    }

    /// Contiguous exonic runs as inclusive 1-based `(start, end)` pairs.
    pub fn exon_spans(&self) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        for &pos in &self.exon_positions {
            match spans.last_mut() {
                Some((_, end)) if *end + 1 == pos => *end = pos,
                _ => spans.push((pos, pos)),
            }
        }
        spans
    }

    /// Upper-cased copy of the bases, the form motifs are matched against.
    pub fn folded(&self) -> Vec<u8> {
        self.bases.bytes().map(|b| b.to_ascii_uppercase()).collect()
    }
}
