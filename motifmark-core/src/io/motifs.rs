//! Motif list loader: one motif per line, blank lines ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{InputError, InputResult};
use crate::motif::MotifSet;

/// Read a motif list file.
pub fn read_motifs<P: AsRef<Path>>(path: P) -> InputResult<MotifSet> {
    let path = path.as_ref();
    log::debug!("Reading motifs from {}", path.display());
    let file = File::open(path)?;
    parse_motifs(BufReader::new(file))
}

/// Parse a motif list from any buffered source.
///
/// Surrounding whitespace is trimmed from each line. Record numbers in
/// errors count non-blank lines only.
pub fn parse_motifs<R: BufRead>(reader: R) -> InputResult<MotifSet> {
    let mut raws = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            raws.push(trimmed.to_string());
        }
    }

    if raws.is_empty() {
        return Err(InputError::EmptyFile);
    }
    let motifs = MotifSet::new(&raws)?;
    log::debug!("Loaded {} motifs", motifs.len());
    Ok(motifs)
}
