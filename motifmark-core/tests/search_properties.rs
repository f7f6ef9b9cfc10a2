use motifmark_core::{annotate, find_occurrences, Motif, MotifSet, Sequence};
use proptest::prelude::*;

fn dna_seq(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('A'),
            Just('C'),
            Just('G'),
            Just('T'),
            Just('a'),
            Just('c'),
            Just('g'),
            Just('t'),
        ],
        1..=max_len,
    )
    .prop_map(|bases| bases.into_iter().collect())
}

fn literal_motif(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], 1..=max_len)
        .prop_map(|bases| bases.into_iter().collect())
}

/// Every start where the literal occurs, case-insensitively.
fn naive_starts(bases: &str, motif: &str) -> Vec<usize> {
    let haystack = bases.to_ascii_uppercase();
    let haystack = haystack.as_bytes();
    let needle = motif.as_bytes();
    if needle.len() > haystack.len() {
        return Vec::new();
    }
    (0..=haystack.len() - needle.len())
        .filter(|&i| &haystack[i..i + needle.len()] == needle)
        .map(|i| i + 1)
        .collect()
}

#[test]
fn overlapping_occurrences_in_homopolymer() {
    let sequence = Sequence::new("aa", "AAAA").unwrap();
    let motif = Motif::new("AA").unwrap();
    assert_eq!(find_occurrences(&sequence, &motif), vec![1, 2, 3]);
}

proptest! {
    #[test]
    fn literal_motifs_match_naive_search(bases in dna_seq(120), raw in literal_motif(6)) {
        let sequence = Sequence::new("p", bases.clone()).unwrap();
        let motif = Motif::new(&raw).unwrap();
        prop_assert_eq!(find_occurrences(&sequence, &motif), naive_starts(&bases, &raw));
    }

    #[test]
    fn position_index_is_dense(bases in dna_seq(120)) {
        let sequence = Sequence::new("p", bases.clone()).unwrap();
        let motifs = MotifSet::new(["YGCY", "N", "CATAG"]).unwrap();
        let annotated = annotate(&sequence, &motifs);

        prop_assert_eq!(annotated.index.len(), bases.len());
        let keys: Vec<usize> = annotated.index.iter().map(|(pos, _)| pos).collect();
        prop_assert_eq!(keys, (1..=bases.len()).collect::<Vec<_>>());
        // N covers every base
        for (_, labels) in annotated.index.iter() {
            prop_assert!(labels.iter().any(|m| m == "N"));
        }
    }

    #[test]
    fn labels_are_unique_and_in_motif_order(bases in dna_seq(120)) {
        let sequence = Sequence::new("p", bases).unwrap();
        let motifs = MotifSet::new(["YY", "TT", "Y"]).unwrap();
        let order: Vec<&str> = motifs.iter().map(|m| m.raw()).collect();
        let annotated = annotate(&sequence, &motifs);

        for (_, labels) in annotated.index.iter() {
            let ranks: Vec<usize> = labels
                .iter()
                .map(|l| order.iter().position(|o| o == l).unwrap())
                .collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn annotation_is_idempotent(bases in dna_seq(120)) {
        let sequence = Sequence::new("p", bases).unwrap();
        let motifs = MotifSet::new(["YGCY", "GCAUG"]).unwrap();
        prop_assert_eq!(annotate(&sequence, &motifs), annotate(&sequence, &motifs));
    }

    #[test]
    fn covered_positions_match_index(bases in dna_seq(120), raw in literal_motif(4)) {
        let sequence = Sequence::new("p", bases).unwrap();
        let motifs = MotifSet::new([raw.as_str()]).unwrap();
        let annotated = annotate(&sequence, &motifs);

        let from_index: Vec<usize> = annotated.index.occupied().map(|(pos, _)| pos).collect();
        prop_assert_eq!(annotated.hits[0].covered_positions(raw.len()), from_index);
    }
}
