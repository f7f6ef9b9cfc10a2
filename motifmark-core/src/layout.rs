//! Layout engine
//!
//! Turns sequence lengths and the motif count into pixel geometry. All
//! quantities are fixed formulas of the input sizes:
//!
//! - width grows with the longest sequence at [`SCALE`] pixels per base
//! - height grows by [`ROW_SPACING`] per sequence plus a header that grows
//!   with the motif count, so rows and the legend never overlap
//! - the axis always carries five ticks at 0, ¼, ½, ¾ and the full length

use serde::Serialize;

use crate::error::{MarkError, MarkResult};
use crate::motif::MotifSet;
use crate::palette::ColorMap;
use crate::sequence::Sequence;

/// Pixels per base
pub const SCALE: f64 = 2.0;
pub const MARGIN: f64 = 50.0;
pub const ROW_SPACING: f64 = 200.0;
pub const FOOTER_HEIGHT: f64 = 120.0;
/// Header height before any motif rows are reserved
pub const HEADER_BASE: f64 = 25.0;
pub const HEADER_PER_MOTIF: f64 = 20.0;

/// Baseline and label offsets from the top of a row
const BASELINE_OFFSET: f64 = 150.0;
const LABEL_OFFSET: f64 = 110.0;
/// Exon marks rise above the baseline, motif bands hang below it
pub const EXON_MARK_HEIGHT: f64 = 20.0;
pub const MOTIF_BAND_HEIGHT: f64 = 30.0;

const AXIS_FROM_BOTTOM: f64 = 75.0;
const TICK_HEIGHT: f64 = 25.0;
const TICK_LABEL_FROM_BOTTOM: f64 = 50.0;
/// Left shift of each tick label so wider numbers stay centred
const TICK_LABEL_SHIFT: [f64; 5] = [0.0, 12.0, 12.0, 12.0, 15.0];
const AXIS_OVERHANG: f64 = 2.0;

const LEGEND_FROM_RIGHT: f64 = 450.0;
const LEGEND_TOP: f64 = 10.0;
const LEGEND_WIDTH: f64 = 435.0;
const LEGEND_ROW: f64 = 25.0;
const LEGEND_PADDING: f64 = 15.0;

/// Geometry of one sequence row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowGeometry {
    pub baseline_y: f64,
    pub label_y: f64,
    pub x_start: f64,
    pub x_end: f64,
}

impl RowGeometry {
    /// Vertical extent `(top, bottom)` of an exon mark.
    pub fn exon_mark(&self) -> (f64, f64) {
        (self.baseline_y - EXON_MARK_HEIGHT, self.baseline_y)
    }

    /// Vertical extent `(top, bottom)` of sub-bar `slot` when `count` motifs
    /// share a position. The band below the baseline is split evenly.
    pub fn motif_band(&self, slot: usize, count: usize) -> (f64, f64) {
        let share = MOTIF_BAND_HEIGHT / count as f64;
        (
            self.baseline_y + share * slot as f64,
            self.baseline_y + share * (slot + 1) as f64,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub x: f64,
    pub label: String,
    /// Left edge of the label text
    pub label_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisGeometry {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
    /// Top end of the tick marks
    pub tick_top: f64,
    pub tick_spacing: f64,
    pub label_y: f64,
    pub ticks: Vec<Tick>,
    pub title_x: f64,
    pub title_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LegendBox {
    /// Filled swatch `(x, y, w, h)` of the exon key
    pub fn exon_swatch(&self) -> (f64, f64, f64, f64) {
        (self.x + 20.0, 20.0, 40.0, 20.0)
    }

    /// Horizontal key line `(x0, x1, y)` for exons (`row` 0) and introns (`row` 1)
    pub fn key_line(&self, row: usize) -> (f64, f64, f64) {
        let y = if row == 0 { 40.0 } else { 70.0 };
        (self.x + 10.0, self.x + 70.0, y)
    }

    /// Text anchor of the key labels
    pub fn key_label(&self, row: usize) -> (f64, f64) {
        let y = if row == 0 { 42.0 } else { 80.0 };
        (self.x + 90.0, y)
    }

    /// Swatch `(x, y, w, h)` for the motif in legend row `i`
    pub fn motif_swatch(&self, i: usize) -> (f64, f64, f64, f64) {
        (self.x + 210.0, 20.0 + LEGEND_ROW * i as f64, 45.0, 20.0)
    }

    /// Text anchor for the motif in legend row `i`
    pub fn motif_label(&self, i: usize) -> (f64, f64) {
        (self.x + 270.0, 40.0 + LEGEND_ROW * i as f64)
    }
}

/// Everything the renderer needs to place elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub margin: f64,
    pub header_height: f64,
    pub footer_height: f64,
    pub row_spacing: f64,
    /// Length of the longest sequence, in bases
    pub longest: usize,
    pub rows: Vec<RowGeometry>,
    pub axis: AxisGeometry,
    pub legend: LegendBox,
    pub title_anchor: (f64, f64),
    pub colors: ColorMap,
}

impl Geometry {
    /// Horizontal pixel for a 1-based base position.
    pub fn x_for(&self, position: usize) -> f64 {
        self.margin + self.scale * position as f64
    }
}

/// Round half to even, the way the tick labels have always been rounded.
fn round_label(value: f64) -> String {
    format!("{}", value.round_ties_even() as u64)
}

/// Compute the diagram geometry for the given sequences and motifs.
pub fn compute_layout(sequences: &[Sequence], motifs: &MotifSet) -> MarkResult<Geometry> {
    let longest = sequences
        .iter()
        .map(Sequence::len)
        .max()
        .ok_or(MarkError::NoSequences)?;
    let colors = ColorMap::assign(motifs)?;

    let header_height = HEADER_BASE + HEADER_PER_MOTIF * motifs.len() as f64;
    let width = 2.0 * MARGIN + SCALE * longest as f64;
    let height = sequences.len() as f64 * ROW_SPACING + header_height + FOOTER_HEIGHT;

    let rows = sequences
        .iter()
        .enumerate()
        .map(|(i, seq)| {
            let row_top = header_height + ROW_SPACING * i as f64;
            RowGeometry {
                baseline_y: row_top + BASELINE_OFFSET,
                label_y: row_top + LABEL_OFFSET,
                x_start: MARGIN,
                x_end: MARGIN + SCALE * seq.len() as f64,
            }
        })
        .collect();

    let tick_spacing = ((longest * SCALE as usize) / 4) as f64;
    let len = longest as f64;
    let labels = [
        "0".to_string(),
        round_label(len / 4.0),
        round_label(len / 2.0),
        round_label(len * 3.0 / 4.0),
        longest.to_string(),
    ];
    let ticks = labels
        .into_iter()
        .zip(TICK_LABEL_SHIFT)
        .enumerate()
        .map(|(i, (label, shift))| {
            let x = MARGIN + i as f64 * tick_spacing;
            Tick {
                x,
                label,
                label_x: x - 5.0 - shift,
            }
        })
        .collect();

    let axis_y = height - AXIS_FROM_BOTTOM;
    let axis = AxisGeometry {
        y: axis_y,
        x_start: MARGIN - AXIS_OVERHANG,
        x_end: width - MARGIN + AXIS_OVERHANG,
        tick_top: axis_y - TICK_HEIGHT,
        tick_spacing,
        label_y: height - TICK_LABEL_FROM_BOTTOM,
        ticks,
        title_x: width / 2.0 - 110.0,
        title_y: height - 20.0,
    };

    // Anchored to the right edge; sequences under 175 bases push it past x = 0
    let legend = LegendBox {
        x: width - LEGEND_FROM_RIGHT,
        y: LEGEND_TOP,
        width: LEGEND_WIDTH,
        height: LEGEND_ROW * motifs.len() as f64 + LEGEND_PADDING,
    };

    log::debug!(
        "Layout: {}x{} px, {} row(s), longest sequence {} bases",
        width,
        height,
        sequences.len(),
        longest
    );

    Ok(Geometry {
        width,
        height,
        scale: SCALE,
        margin: MARGIN,
        header_height,
        footer_height: FOOTER_HEIGHT,
        row_spacing: ROW_SPACING,
        longest,
        rows,
        axis,
        legend,
        title_anchor: (25.0, 120.0),
        colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE;

    fn sequences(lengths: &[usize]) -> Vec<Sequence> {
        lengths
            .iter()
            .enumerate()
            .map(|(i, &n)| Sequence::new(format!("s{}", i), "a".repeat(n)).unwrap())
            .collect()
    }

    #[test]
    fn test_canvas_size_formulas() {
        let motifs = MotifSet::new(["YGCY", "GCAUG", "CATAG", "YYYYYYYYYY"]).unwrap();
        let geometry = compute_layout(&sequences(&[300, 850, 120]), &motifs).unwrap();
        assert_eq!(geometry.width, 2.0 * 50.0 + 2.0 * 850.0);
        assert_eq!(geometry.header_height, 25.0 + 20.0 * 4.0);
        assert_eq!(geometry.height, 3.0 * 200.0 + 105.0 + 120.0);
        assert_eq!(geometry.longest, 850);
    }

    #[test]
    fn test_rows_share_left_margin_and_never_overlap() {
        let geometry = compute_layout(&sequences(&[10, 40, 25]), &MotifSet::default()).unwrap();
        for row in &geometry.rows {
            assert_eq!(row.x_start, MARGIN);
        }
        assert_eq!(geometry.rows[1].x_end, 50.0 + 80.0);
        assert_eq!(geometry.rows[0].baseline_y, 25.0 + 150.0);
        assert_eq!(geometry.rows[0].label_y, 25.0 + 110.0);
        for pair in geometry.rows.windows(2) {
            let (_, lower) = pair[0].motif_band(0, 1);
            let (upper, _) = pair[1].exon_mark();
            assert!(lower < pair[1].label_y && lower < upper);
        }
        let last = geometry.rows.last().unwrap();
        assert!(last.baseline_y + MOTIF_BAND_HEIGHT < geometry.axis.tick_top);
    }

    #[test]
    fn test_five_ticks_with_rounded_labels() {
        let geometry = compute_layout(&sequences(&[10]), &MotifSet::default()).unwrap();
        let labels: Vec<&str> = geometry.axis.ticks.iter().map(|t| t.label.as_str()).collect();
        // 2.5 and 7.5 round half to even
        assert_eq!(labels, vec!["0", "2", "5", "8", "10"]);
        assert_eq!(geometry.axis.tick_spacing, 5.0);
        let xs: Vec<f64> = geometry.axis.ticks.iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![50.0, 55.0, 60.0, 65.0, 70.0]);
        assert_eq!(geometry.axis.ticks[0].label_x, 45.0);
        assert_eq!(geometry.axis.ticks[4].label_x, 70.0 - 5.0 - 15.0);
    }

    #[test]
    fn test_tick_spacing_floors() {
        let geometry = compute_layout(&sequences(&[7]), &MotifSet::default()).unwrap();
        assert_eq!(geometry.axis.tick_spacing, 3.0);
        assert_eq!(geometry.axis.ticks[4].label, "7");
    }

    #[test]
    fn test_axis_and_legend_positions() {
        let motifs = MotifSet::new(["GC", "AT"]).unwrap();
        let geometry = compute_layout(&sequences(&[500]), &motifs).unwrap();
        let (w, h) = (geometry.width, geometry.height);
        assert_eq!(geometry.axis.y, h - 75.0);
        assert_eq!(geometry.axis.tick_top, h - 100.0);
        assert_eq!(geometry.axis.x_start, 48.0);
        assert_eq!(geometry.axis.x_end, w - 48.0);
        assert_eq!(
            geometry.legend,
            LegendBox { x: w - 450.0, y: 10.0, width: 435.0, height: 65.0 }
        );
        assert_eq!(geometry.legend.motif_swatch(1), (w - 240.0, 45.0, 45.0, 20.0));
        assert_eq!(geometry.legend.motif_label(1), (w - 180.0, 65.0));
    }

    #[test]
    fn test_legend_stays_right_anchored_for_short_sequences() {
        let motifs = MotifSet::new(["TAG"]).unwrap();

        let geometry = compute_layout(&sequences(&[10]), &motifs).unwrap();
        assert_eq!(geometry.width, 120.0);
        assert_eq!(geometry.legend.x, -330.0);

        let geometry = compute_layout(&sequences(&[175]), &motifs).unwrap();
        assert_eq!(geometry.legend.x, 0.0);

        let geometry = compute_layout(&sequences(&[176]), &motifs).unwrap();
        assert!(geometry.legend.x > 0.0);
    }

    #[test]
    fn test_motif_band_splits_evenly() {
        let row = RowGeometry { baseline_y: 100.0, label_y: 60.0, x_start: 50.0, x_end: 90.0 };
        assert_eq!(row.motif_band(0, 1), (100.0, 130.0));
        assert_eq!(row.motif_band(0, 3), (100.0, 110.0));
        assert_eq!(row.motif_band(2, 3), (120.0, 130.0));
    }

    #[test]
    fn test_colors_and_errors() {
        let motifs = MotifSet::new(["GC", "AT"]).unwrap();
        let geometry = compute_layout(&sequences(&[5]), &motifs).unwrap();
        assert_eq!(geometry.colors.get("AT"), Some(PALETTE[1]));
        assert_eq!(geometry.x_for(3), 56.0);

        assert_eq!(compute_layout(&[], &motifs), Err(MarkError::NoSequences));
        let eleven: Vec<String> = (1..=11).map(|n| "C".repeat(n)).collect();
        let err = compute_layout(&sequences(&[5]), &MotifSet::new(&eleven).unwrap()).unwrap_err();
        assert!(matches!(err, MarkError::TooManyMotifs { count: 11, .. }));
    }
}
