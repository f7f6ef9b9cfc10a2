//! Scene rendering
//!
//! The renderer never paints anything itself. It turns geometry and
//! annotations into an ordered list of [`DrawCommand`]s, which a
//! [`DrawingSurface`] adapter replays. Group order is fixed so identical input
//! always yields an identical command list.

use serde::Serialize;

use crate::error::{MarkError, MarkResult};
use crate::layout::Geometry;
use crate::palette::Rgb;
use crate::search::AnnotatedSequence;

pub const BASELINE_WIDTH: f64 = 5.0;
pub const EXON_MARK_WIDTH: f64 = 2.0;
pub const MOTIF_BAR_WIDTH: f64 = 2.0;
pub const AXIS_WIDTH: f64 = 3.0;
pub const LEGEND_BORDER_WIDTH: f64 = 5.0;

pub const TITLE_SIZE: f64 = 100.0;
pub const ROW_LABEL_SIZE: f64 = 30.0;
pub const TICK_LABEL_SIZE: f64 = 20.0;
pub const LEGEND_KEY_SIZE: f64 = 30.0;
pub const LEGEND_MOTIF_SIZE: f64 = 25.0;
pub const AXIS_TITLE_SIZE: f64 = 25.0;

pub const AXIS_TITLE: &str = "Number of Bases";

/// Drawing primitives a backend must provide. Paths accumulate through
/// `move_to`/`line_to`/`rectangle` and are consumed by `fill` or `stroke`.
pub trait DrawingSurface {
    fn set_source(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    /// Draw text with its baseline starting at the current point.
    fn show_text(&mut self, text: &str, size: f64);
}

/// One self-contained drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
    },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
        line_width: f64,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: Rgb,
        line_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        color: Rgb,
    },
}

impl DrawCommand {
    /// Issue this command as primitive calls.
    pub fn apply<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            DrawCommand::FillRect { x, y, width, height, color } => {
                surface.set_source(*color);
                surface.rectangle(*x, *y, *width, *height);
                surface.fill();
            }
            DrawCommand::StrokeRect { x, y, width, height, color, line_width } => {
                surface.set_source(*color);
                surface.set_line_width(*line_width);
                surface.rectangle(*x, *y, *width, *height);
                surface.stroke();
            }
            DrawCommand::Line { x0, y0, x1, y1, color, line_width } => {
                surface.set_source(*color);
                surface.set_line_width(*line_width);
                surface.move_to(*x0, *y0);
                surface.line_to(*x1, *y1);
                surface.stroke();
            }
            DrawCommand::Text { x, y, text, size, color } => {
                surface.set_source(*color);
                surface.move_to(*x, *y);
                surface.show_text(text, *size);
            }
        }
    }
}

/// A rendered diagram: canvas size plus the ordered command list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Replay every command, in order, onto `surface`.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            command.apply(surface);
        }
    }
}

fn line(x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb, line_width: f64) -> DrawCommand {
    DrawCommand::Line { x0, y0, x1, y1, color, line_width }
}

fn text(x: f64, y: f64, text: impl Into<String>, size: f64) -> DrawCommand {
    DrawCommand::Text {
        x,
        y,
        text: text.into(),
        size,
        color: Rgb::BLACK,
    }
}

/// Build the scene for annotated sequences laid out by `geometry`.
///
/// `annotated` must be in the same order as the sequences the geometry was
/// computed from; rows are matched by position. Bars and legend entries take
/// their colors from `geometry.colors`, so every motif in the annotation must
/// have been laid out with it.
pub fn render(geometry: &Geometry, annotated: &[AnnotatedSequence], title: &str) -> MarkResult<Scene> {
    if geometry.rows.len() != annotated.len() {
        return Err(MarkError::RowMismatch {
            rows: geometry.rows.len(),
            sequences: annotated.len(),
        });
    }
    let mut commands = Vec::new();
    let rows = || geometry.rows.iter().zip(annotated);

    commands.push(DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width: geometry.width,
        height: geometry.height,
        color: Rgb::WHITE,
    });

    for (row, _) in rows() {
        commands.push(line(
            row.x_start,
            row.baseline_y,
            row.x_end,
            row.baseline_y,
            Rgb::BLACK,
            BASELINE_WIDTH,
        ));
    }

    for (row, entry) in rows() {
        let seq = &entry.sequence;
        commands.push(text(
            row.x_start,
            row.label_y,
            format!("{} ({} bases)", seq.name(), seq.len()),
            ROW_LABEL_SIZE,
        ));
    }

    for (row, entry) in rows() {
        let (top, bottom) = row.exon_mark();
        for &pos in entry.sequence.exon_positions() {
            let x = geometry.x_for(pos);
            commands.push(line(x, top, x, bottom, Rgb::BLACK, EXON_MARK_WIDTH));
        }
    }

    for (row, entry) in rows() {
        for (pos, labels) in entry.index.occupied() {
            let x = geometry.x_for(pos);
            for (slot, motif) in labels.iter().enumerate() {
                let color = geometry
                    .colors
                    .get(motif)
                    .ok_or_else(|| MarkError::UncoloredMotif { motif: motif.clone() })?;
                let (top, bottom) = row.motif_band(slot, labels.len());
                commands.push(line(x, top, x, bottom, color, MOTIF_BAR_WIDTH));
            }
        }
    }

    let axis = &geometry.axis;
    commands.push(line(axis.x_start, axis.y, axis.x_end, axis.y, Rgb::BLACK, AXIS_WIDTH));
    for tick in &axis.ticks {
        commands.push(line(tick.x, axis.y, tick.x, axis.tick_top, Rgb::BLACK, AXIS_WIDTH));
    }
    for tick in &axis.ticks {
        commands.push(text(tick.label_x, axis.label_y, tick.label.clone(), TICK_LABEL_SIZE));
    }

    push_legend(&mut commands, geometry);

    let (title_x, title_y) = geometry.title_anchor;
    commands.push(text(title_x, title_y, title, TITLE_SIZE));
    commands.push(text(axis.title_x, axis.title_y, AXIS_TITLE, AXIS_TITLE_SIZE));

    Ok(Scene {
        width: geometry.width,
        height: geometry.height,
        commands,
    })
}

fn push_legend(commands: &mut Vec<DrawCommand>, geometry: &Geometry) {
    let legend = &geometry.legend;
    commands.push(DrawCommand::FillRect {
        x: legend.x,
        y: legend.y,
        width: legend.width,
        height: legend.height,
        color: Rgb::LEGEND_GRAY,
    });
    commands.push(DrawCommand::StrokeRect {
        x: legend.x,
        y: legend.y,
        width: legend.width,
        height: legend.height,
        color: Rgb::BLACK,
        line_width: LEGEND_BORDER_WIDTH,
    });

    let (sx, sy, sw, sh) = legend.exon_swatch();
    commands.push(DrawCommand::FillRect { x: sx, y: sy, width: sw, height: sh, color: Rgb::BLACK });
    for (row, label) in ["Exons", "Introns"].into_iter().enumerate() {
        let (x0, x1, y) = legend.key_line(row);
        commands.push(line(x0, y, x1, y, Rgb::BLACK, BASELINE_WIDTH));
        let (lx, ly) = legend.key_label(row);
        commands.push(text(lx, ly, label, LEGEND_KEY_SIZE));
    }

    for (i, (motif, color)) in geometry.colors.iter().enumerate() {
        let (lx, ly) = legend.motif_label(i);
        commands.push(text(lx, ly, motif, LEGEND_MOTIF_SIZE));
        let (x, y, width, height) = legend.motif_swatch(i);
        commands.push(DrawCommand::FillRect { x, y, width, height, color });
    }
}

/// Render and replay directly onto a surface, returning the scene.
pub fn render_to<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    geometry: &Geometry,
    annotated: &[AnnotatedSequence],
    title: &str,
) -> MarkResult<Scene> {
    let scene = render(geometry, annotated, title)?;
    scene.replay(surface);
    Ok(scene)
}
