//! IUPAC ambiguity resolution
//!
//! Maps each motif symbol to the set of sequence letters it may stand for.
//! Every class also lists the code letter itself, so a literal `N` in a
//! sequence is matched by a motif `N`. `T` and `U` are interchangeable.

use serde::Serialize;
use std::fmt;

use crate::error::{MarkError, MarkResult};

/// Ambiguity code → accepted upper-case sequence letters.
const AMBIGUITY_TABLE: &[(u8, &[u8])] = &[
    (b'N', b"NAGCTU"),
    (b'R', b"RAG"),
    (b'Y', b"YTCU"),
    (b'K', b"KGTU"),
    (b'M', b"MAC"),
    (b'S', b"SGC"),
    (b'W', b"WATU"),
    (b'B', b"BCGTU"),
    (b'D', b"DAGTU"),
    (b'H', b"HACG"),
    (b'V', b"VACG"),
    (b'U', b"TU"),
    (b'T', b"TU"),
];

/// Letters that match only themselves.
const LITERALS: &[u8] = b"ACG";

/// One resolved motif unit. Always consumes exactly one base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BaseClass {
    /// Matches a single upper-case letter
    Literal(u8),
    /// Matches any of the listed upper-case letters
    OneOf(&'static [u8]),
}

impl BaseClass {
    /// Does this unit accept the given upper-cased sequence letter?
    #[inline]
    pub fn matches(&self, base: u8) -> bool {
        match self {
            BaseClass::Literal(b) => *b == base,
            BaseClass::OneOf(set) => set.contains(&base),
        }
    }
}

impl fmt::Display for BaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseClass::Literal(b) => write!(f, "{}", *b as char),
            BaseClass::OneOf(set) => {
                f.write_str("[")?;
                for b in set.iter() {
                    write!(f, "{}", *b as char)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Resolve an upper-case symbol to its class, or `None` if it is not a
/// recognised nucleotide symbol.
pub fn lookup(code: u8) -> Option<BaseClass> {
    if let Some((_, set)) = AMBIGUITY_TABLE.iter().find(|(c, _)| *c == code) {
        return Some(BaseClass::OneOf(*set));
    }
    LITERALS.contains(&code).then_some(BaseClass::Literal(code))
}

/// The resolved form of a motif: one class per motif character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchPattern {
    units: Vec<BaseClass>,
}

impl MatchPattern {
    /// Resolve every character of `raw` (case-folded) in order.
    ///
    /// Fails on the first character outside the recognised alphabet, naming
    /// the motif and the offending offset.
    pub fn resolve(raw: &str) -> MarkResult<Self> {
        let upper = raw.to_ascii_uppercase();
        let units = upper
            .chars()
            .enumerate()
            .map(|(offset, c)| {
                u8::try_from(c)
                    .ok()
                    .and_then(lookup)
                    .ok_or_else(|| MarkError::InvalidMotifCharacter {
                        motif: upper.clone(),
                        character: c,
                        offset,
                    })
            })
            .collect::<MarkResult<Vec<_>>>()?;
        Ok(Self { units })
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[BaseClass] {
        &self.units
    }

    /// Does the pattern match `window` (upper-cased, same length) exactly?
    #[inline]
    pub fn matches_at(&self, window: &[u8]) -> bool {
        window.len() == self.units.len()
            && self.units.iter().zip(window).all(|(unit, &b)| unit.matches(b))
    }
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}
