//! FASTA transcript loader
//!
//! Parsing is delegated to needletail. Case is preserved since it encodes the
//! exon/intron structure; multi-line bodies are joined by the parser.

use std::path::Path;

use needletail::{parse_fastx_file, parse_fastx_reader, FastxReader};

use super::{InputError, InputResult};
use crate::sequence::Sequence;

/// Read every record of a FASTA file.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> InputResult<Vec<Sequence>> {
    let path = path.as_ref();
    log::debug!("Reading sequences from {}", path.display());
    let reader = parse_fastx_file(path).map_err(|e| InputError::Parse(e.to_string()))?;
    collect_records(reader)
}

/// Read every record from any FASTA source.
pub fn parse_sequences<R: std::io::Read + std::marker::Send>(reader: R) -> InputResult<Vec<Sequence>> {
    let reader = parse_fastx_reader(reader).map_err(|e| InputError::Parse(e.to_string()))?;
    collect_records(reader)
}

fn collect_records(mut reader: Box<dyn FastxReader + '_>) -> InputResult<Vec<Sequence>> {
    let mut sequences = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| InputError::Parse(e.to_string()))?;
        let header = String::from_utf8_lossy(record.id());
        // Only the first token of the header names the record
        let name = header.split_whitespace().next().unwrap_or_default().to_string();
        let bases = String::from_utf8_lossy(&record.seq()).into_owned();
        let sequence = Sequence::new(name, bases).map_err(|e| e.at_index(sequences.len()))?;
        sequences.push(sequence);
    }

    if sequences.is_empty() {
        Err(InputError::EmptyFile)
    } else {
        Ok(sequences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_keeps_case_and_first_header_token() {
        let fasta_data = ">INSR chr19:7150261-7150808 (reverse complement)\n\
                          atgtccacatgtagtcacgtttgacatcccagggccacctcagcaggccgtctctggggagaattttctctgatttcttccccttcccttgctggacccagcacccactctgtcctgtgcattgcctgtgcctgCTGTCTCCTCCGCCATGGGCTGCAGAGGACC\n\
                          >MBNL chr3:152446461-152447003\n\
                          gcactcagaTGCTtgc\n";

        let sequences = parse_sequences(Cursor::new(fasta_data)).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].name(), "INSR");
        assert!(sequences[0].bases().ends_with("gcctgCTGTCTCCTCCGCCATGGGCTGCAGAGGACC"));
        assert_eq!(sequences[1].name(), "MBNL");
        assert_eq!(sequences[1].bases(), "gcactcagaTGCTtgc");
        assert_eq!(sequences[1].exon_positions(), &[10, 11, 12, 13]);
    }

    #[test]
    fn test_multiline_records_are_joined() {
        let fasta_data = ">tx\n\
                          aaaa\n\
                          CCCC\n\
                          gggg\n";
        let sequences = parse_sequences(Cursor::new(fasta_data)).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].bases(), "aaaaCCCCgggg");
        assert_eq!(sequences[0].exon_positions(), &[5, 6, 7, 8]);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(parse_sequences(Cursor::new("")).is_err());
    }

    #[test]
    fn test_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">tx1 first").unwrap();
        writeln!(file, "acgtACGT").unwrap();
        writeln!(file, ">tx2").unwrap();
        writeln!(file, "TTTT").unwrap();

        let sequences = read_sequences(file.path()).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].exon_positions(), &[5, 6, 7, 8]);
        assert_eq!(sequences[1].name(), "tx2");
    }
}
