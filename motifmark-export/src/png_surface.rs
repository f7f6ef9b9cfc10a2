//! Raster drawing surface
//!
//! Headless CPU rasteriser on top of `image`. Fills and axis-aligned strokes
//! are exact pixel rectangles, which covers everything the renderer draws.
//! Diagonal strokes fall back to a one-pixel Bresenham line. Text is not
//! rasterised.

use std::mem;
use std::path::Path;

use anyhow::Result;
use image::{ImageFormat, Rgba, RgbaImage};
use motifmark_core::palette::Rgb;
use motifmark_core::render::DrawingSurface;

#[derive(Debug, Clone, Copy)]
enum Segment {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(f64, f64, f64, f64),
}

pub struct PngSurface {
    image: RgbaImage,
    source: Rgba<u8>,
    line_width: f64,
    path: Vec<Segment>,
    skipped_text: usize,
}

fn to_rgba(color: Rgb) -> Rgba<u8> {
    let [r, g, b] = color.to_rgb8();
    Rgba([r, g, b, 255])
}

impl PngSurface {
    /// A transparent canvas of the given size, rounded up to whole pixels.
    pub fn new(width: f64, height: f64) -> Self {
        let width = width.max(1.0).ceil() as u32;
        let height = height.max(1.0).ceil() as u32;
        Self {
            image: RgbaImage::new(width, height),
            source: to_rgba(Rgb::BLACK),
            line_width: 1.0,
            path: Vec::new(),
            skipped_text: 0,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Number of `show_text` calls that produced no pixels.
    pub fn skipped_text(&self) -> usize {
        self.skipped_text
    }

    /// Write the canvas as PNG whatever the extension of `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if self.skipped_text > 0 {
            log::warn!(
                "PNG output has no text: {} label(s) omitted, use SVG for a labelled figure",
                self.skipped_text
            );
        }
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Paint pixels whose centres fall inside `[x0, x1) x [y0, y1)`.
    fn fill_box(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        let clamp_x = |v: f64| (v.round().max(0.0) as u32).min(self.image.width());
        let clamp_y = |v: f64| (v.round().max(0.0) as u32).min(self.image.height());
        let (px0, px1) = (clamp_x(x0), clamp_x(x1));
        let (py0, py1) = (clamp_y(y0), clamp_y(y1));

        for y in py0..py1 {
            for x in px0..px1 {
                self.image.put_pixel(x, y, self.source);
            }
        }
    }

    fn stroke_segment(&mut self, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) {
        let half = self.line_width / 2.0;
        if y0 == y1 {
            self.fill_box(x0.min(x1) - half, y0 - half, x0.max(x1) + half, y0 + half);
        } else if x0 == x1 {
            self.fill_box(x0 - half, y0.min(y1) - half, x0 + half, y0.max(y1) + half);
        } else {
            draw_line(
                &mut self.image,
                x0.round() as i32,
                y0.round() as i32,
                x1.round() as i32,
                y1.round() as i32,
                self.source,
            );
        }
    }
}

impl DrawingSurface for PngSurface {
    fn set_source(&mut self, color: Rgb) {
        self.source = to_rgba(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(Segment::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(Segment::LineTo(x, y));
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.path.push(Segment::Rect(x, y, width, height));
    }

    fn fill(&mut self) {
        // Only rectangles enclose an area worth filling here
        for segment in mem::take(&mut self.path) {
            if let Segment::Rect(x, y, width, height) = segment {
                self.fill_box(x, y, x + width, y + height);
            }
        }
    }

    fn stroke(&mut self) {
        let mut current: Option<(f64, f64)> = None;
        for segment in mem::take(&mut self.path) {
            match segment {
                Segment::MoveTo(x, y) => current = Some((x, y)),
                Segment::LineTo(x, y) => {
                    if let Some(from) = current {
                        self.stroke_segment(from, (x, y));
                    }
                    current = Some((x, y));
                }
                Segment::Rect(x, y, width, height) => {
                    let corners = [
                        (x, y),
                        (x + width, y),
                        (x + width, y + height),
                        (x, y + height),
                        (x, y),
                    ];
                    for edge in corners.windows(2) {
                        self.stroke_segment(edge[0], edge[1]);
                    }
                    current = Some((x, y));
                }
            }
        }
    }

    fn show_text(&mut self, _text: &str, _size: f64) {
        self.skipped_text += 1;
    }
}

fn draw_line(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    // Bresenham line drawing
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if x0 >= 0 && y0 >= 0 && (x0 as u32) < img.width() && (y0 as u32) < img.height() {
            img.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
