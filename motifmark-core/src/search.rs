//! Motif search engine
//!
//! Finds every (overlapping) occurrence of each motif in a sequence and folds
//! them into a dense position → motifs index.

use rayon::prelude::*;
use serde::Serialize;

use crate::motif::{Motif, MotifSet};
use crate::sequence::Sequence;

/// Start positions (1-based) of every occurrence of `motif` in `sequence`.
///
/// Each start is tested independently, so overlapping hits are all reported:
/// `AA` in `AAAA` starts at 1, 2 and 3.
pub fn find_occurrences(sequence: &Sequence, motif: &Motif) -> Vec<usize> {
    scan(&sequence.folded(), motif)
}

fn scan(folded: &[u8], motif: &Motif) -> Vec<usize> {
    let width = motif.len();
    if width == 0 || width > folded.len() {
        return Vec::new();
    }
    folded
        .windows(width)
        .enumerate()
        .filter(|(_, window)| motif.pattern().matches_at(window))
        .map(|(i, _)| i + 1)
        .collect()
}

/// Occurrences of one motif in one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotifHits {
    pub motif: String,
    pub starts: Vec<usize>,
}

impl MotifHits {
    /// 1-based positions covered by at least one occurrence, ascending.
    pub fn covered_positions(&self, motif_len: usize) -> Vec<usize> {
        let mut covered: Vec<usize> = self
            .starts
            .iter()
            .flat_map(|&s| s..s + motif_len)
            .collect();
        covered.sort_unstable();
        covered.dedup();
        covered
    }
}

/// Dense index from every 1-based position to the motifs covering it.
///
/// Keys run over `1..=len` without gaps. Labels at a position follow motif
/// input order and never repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionIndex {
    slots: Vec<Vec<String>>,
}

impl PositionIndex {
    fn empty(len: usize) -> Self {
        Self {
            slots: vec![Vec::new(); len],
        }
    }

    fn mark(&mut self, start: usize, end: usize, motif: &str) {
        for slot in &mut self.slots[start - 1..end] {
            if !slot.iter().any(|m| m == motif) {
                slot.push(motif.to_string());
            }
        }
    }

    /// Number of positions (equals the sequence length).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Motifs at a 1-based position; `None` outside `1..=len`.
    pub fn get(&self, position: usize) -> Option<&[String]> {
        position
            .checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .map(Vec::as_slice)
    }

    /// All `(position, motifs)` pairs in position order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (i + 1, slot.as_slice()))
    }

    /// Positions carrying at least one motif.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.iter().filter(|(_, motifs)| !motifs.is_empty())
    }
}

/// A sequence together with its motif annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedSequence {
    pub sequence: Sequence,
    pub hits: Vec<MotifHits>,
    pub index: PositionIndex,
}

/// Annotate one sequence with every motif, in motif order.
pub fn annotate(sequence: &Sequence, motifs: &MotifSet) -> AnnotatedSequence {
    let folded = sequence.folded();
    let mut index = PositionIndex::empty(sequence.len());
    let mut hits = Vec::with_capacity(motifs.len());

    for motif in motifs {
        let starts = scan(&folded, motif);
        for &start in &starts {
            index.mark(start, start + motif.len() - 1, motif.raw());
        }
        hits.push(MotifHits {
            motif: motif.raw().to_string(),
            starts,
        });
    }

    log::debug!(
        "{}: {} bases, {} exon run(s), {} motif hit(s)",
        sequence.name(),
        sequence.len(),
        sequence.exon_spans().len(),
        hits.iter().map(|h| h.starts.len()).sum::<usize>()
    );

    AnnotatedSequence {
        sequence: sequence.clone(),
        hits,
        index,
    }
}

/// Annotate every sequence independently; output order matches input order.
pub fn annotate_all(sequences: &[Sequence], motifs: &MotifSet) -> Vec<AnnotatedSequence> {
    sequences
        .par_iter()
        .map(|sequence| annotate(sequence, motifs))
        .collect()
}
