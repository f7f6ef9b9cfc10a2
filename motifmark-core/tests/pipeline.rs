use motifmark_core::{
    annotate, annotate_all, compute_layout, render, DrawCommand, MarkError, MotifSet, Sequence,
    PALETTE,
};

fn scenario() -> (Sequence, MotifSet) {
    let sequence = Sequence::new("s1", "aaTAGaactt").unwrap();
    let motifs = MotifSet::new(["TAG", "YYY"]).unwrap();
    (sequence, motifs)
}

#[test]
fn small_transcript_end_to_end() {
    let (sequence, motifs) = scenario();
    assert_eq!(sequence.exon_positions(), &[3, 4, 5]);

    let annotated = annotate(&sequence, &motifs);
    assert_eq!(annotated.hits[0].starts, vec![3]);
    assert_eq!(annotated.hits[1].starts, vec![8]);

    let occupied: Vec<(usize, Vec<String>)> = annotated
        .index
        .occupied()
        .map(|(pos, labels)| (pos, labels.to_vec()))
        .collect();
    let tag = vec!["TAG".to_string()];
    let yyy = vec!["YYY".to_string()];
    assert_eq!(
        occupied,
        vec![
            (3, tag.clone()),
            (4, tag.clone()),
            (5, tag),
            (8, yyy.clone()),
            (9, yyy.clone()),
            (10, yyy),
        ]
    );
    assert_eq!(annotated.index.len(), 10);
    assert_eq!(annotated.index.get(1), Some(&[][..]));

    let geometry = compute_layout(std::slice::from_ref(&sequence), &motifs).unwrap();
    assert_eq!(geometry.width, 120.0);
    assert_eq!(geometry.height, 385.0);
    let labels: Vec<&str> = geometry.axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "2", "5", "8", "10"]);
}

#[test]
fn rendering_is_deterministic() {
    let (sequence, motifs) = scenario();
    let sequences = vec![sequence];
    let geometry = compute_layout(&sequences, &motifs).unwrap();

    let first = render(&geometry, &annotate_all(&sequences, &motifs), "s1").unwrap();
    let second = render(&geometry, &annotate_all(&sequences, &motifs), "s1").unwrap();
    assert_eq!(first, second);
}

#[test]
fn motif_bars_use_palette_in_input_order() {
    let (sequence, motifs) = scenario();
    let sequences = vec![sequence];
    let geometry = compute_layout(&sequences, &motifs).unwrap();
    let scene = render(&geometry, &annotate_all(&sequences, &motifs), "s1").unwrap();

    let bar_colors: Vec<_> = scene
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { color, line_width, .. }
                if *line_width == 2.0 && *color != motifmark_core::Rgb::BLACK =>
            {
                Some(*color)
            }
            _ => None,
        })
        .collect();
    assert_eq!(bar_colors.len(), 6);
    assert!(bar_colors[..3].iter().all(|c| *c == PALETTE[0]));
    assert!(bar_colors[3..].iter().all(|c| *c == PALETTE[1]));
}

#[test]
fn eleventh_motif_is_rejected_by_layout() {
    let sequence = Sequence::new("s1", "ACGT").unwrap();
    let raws: Vec<String> = (1..=11).map(|n| "C".repeat(n)).collect();
    let motifs = MotifSet::new(&raws).unwrap();

    let err = compute_layout(&[sequence], &motifs).unwrap_err();
    assert_eq!(err, MarkError::TooManyMotifs { count: 11, capacity: 10 });
}

#[test]
fn empty_sequence_list_cannot_be_laid_out() {
    let motifs = MotifSet::new(["ACG"]).unwrap();
    assert_eq!(compute_layout(&[], &motifs).unwrap_err(), MarkError::NoSequences);
}
