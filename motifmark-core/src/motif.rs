//! Motif model
//!
//! A motif is identified by its case-folded text. Two motifs spelled the
//! same way are the same motif for indexing, coloring and the legend.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ambiguity::MatchPattern;
use crate::error::{MarkError, MarkResult};

/// A binding motif with its resolved match pattern.
#[derive(Debug, Clone, Serialize)]
pub struct Motif {
    raw: String,
    pattern: MatchPattern,
}

impl Motif {
    /// Build a motif from user text (IUPAC codes allowed, any case).
    ///
    /// Whitespace is not stripped: only an all-blank input is rejected as
    /// empty, any embedded whitespace is an invalid character.
    pub fn new(raw: &str) -> MarkResult<Self> {
        if raw.trim().is_empty() {
            return Err(MarkError::EmptyMotif { index: None });
        }
        let pattern = MatchPattern::resolve(raw)?;
        Ok(Self {
            raw: raw.to_ascii_uppercase(),
            pattern,
        })
    }

    /// Upper-cased motif text, used as the motif's identity.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn pattern(&self) -> &MatchPattern {
        &self.pattern
    }

    /// Number of bases a single occurrence covers.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

impl PartialEq for Motif {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Motif {}

impl Hash for Motif {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Ordered, duplicate-free collection of motifs.
///
/// Input order is preserved; it decides label order at a position, palette
/// slots and legend rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MotifSet {
    motifs: Vec<Motif>,
}

impl MotifSet {
    /// Build motifs in order. Errors carry the 0-based input index.
    /// Repeated motifs (after case folding) keep their first position.
    pub fn new<I, S>(raws: I) -> MarkResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut motifs = Vec::new();
        for (index, raw) in raws.into_iter().enumerate() {
            let motif = Motif::new(raw.as_ref()).map_err(|e| e.at_index(index))?;
            if seen.insert(motif.raw.clone()) {
                motifs.push(motif);
            } else {
                log::warn!("Motif {} listed more than once; keeping the first entry", motif);
            }
        }
        Ok(Self { motifs })
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Motif> {
        self.motifs.iter()
    }

    pub fn as_slice(&self) -> &[Motif] {
        &self.motifs
    }
}

impl<'a> IntoIterator for &'a MotifSet {
    type Item = &'a Motif;
    type IntoIter = std::slice::Iter<'a, Motif>;

    fn into_iter(self) -> Self::IntoIter {
        self.motifs.iter()
    }
}
