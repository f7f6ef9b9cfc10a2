//! SVG drawing surface
//!
//! Keeps a cairo-style current path. `move_to`, `line_to` and `rectangle`
//! extend it; `fill` and `stroke` turn it into SVG elements and clear it.

use std::mem;

use motifmark_core::palette::Rgb;
use motifmark_core::render::DrawingSurface;
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle, Text};
use svg::Document;

#[derive(Debug, Clone, Copy)]
enum Segment {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(f64, f64, f64, f64),
}

pub struct SvgSurface {
    document: Document,
    font_family: String,
    source: Rgb,
    line_width: f64,
    path: Vec<Segment>,
    current_point: Option<(f64, f64)>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64, font_family: impl Into<String>) -> Self {
        let document = Document::new()
            .set("viewBox", (0, 0, width, height))
            .set("width", width)
            .set("height", height);
        Self {
            document,
            font_family: font_family.into(),
            source: Rgb::BLACK,
            line_width: 1.0,
            path: Vec::new(),
            current_point: None,
        }
    }

    fn push<N: Into<Box<dyn svg::Node>>>(&mut self, node: N) {
        let document = mem::replace(&mut self.document, Document::new());
        self.document = document.add(node);
    }

    /// Emit the current path, then clear it.
    fn flush_path(&mut self, paint: Paint) {
        let segments = mem::take(&mut self.path);
        let color = self.source.to_hex();
        let mut data: Option<Data> = None;

        for segment in segments {
            match segment {
                Segment::Rect(x, y, width, height) => {
                    let rect = Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", width)
                        .set("height", height);
                    let rect = match paint {
                        Paint::Fill => rect.set("fill", color.as_str()),
                        Paint::Stroke => rect
                            .set("fill", "none")
                            .set("stroke", color.as_str())
                            .set("stroke-width", self.line_width),
                    };
                    self.push(rect);
                }
                Segment::MoveTo(x, y) => {
                    data = Some(data.unwrap_or_else(Data::new).move_to((x as f32, y as f32)));
                }
                Segment::LineTo(x, y) => {
                    data = Some(data.unwrap_or_else(Data::new).line_to((x as f32, y as f32)));
                }
            }
        }

        if let Some(data) = data {
            let path = Path::new().set("d", data);
            let path = match paint {
                Paint::Fill => path.set("fill", color.as_str()),
                Paint::Stroke => path
                    .set("fill", "none")
                    .set("stroke", color.as_str())
                    .set("stroke-width", self.line_width),
            };
            self.push(path);
        }
    }

    /// The finished document as text.
    pub fn into_string(self) -> String {
        self.document.to_string()
    }
}

#[derive(Debug, Clone, Copy)]
enum Paint {
    Fill,
    Stroke,
}

impl DrawingSurface for SvgSurface {
    fn set_source(&mut self, color: Rgb) {
        self.source = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(Segment::MoveTo(x, y));
        self.current_point = Some((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        // A line with no current point starts a new subpath there
        if self.current_point.is_none() {
            self.path.push(Segment::MoveTo(x, y));
        } else {
            self.path.push(Segment::LineTo(x, y));
        }
        self.current_point = Some((x, y));
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.path.push(Segment::Rect(x, y, width, height));
        self.current_point = Some((x, y));
    }

    fn fill(&mut self) {
        self.flush_path(Paint::Fill);
        self.current_point = None;
    }

    fn stroke(&mut self) {
        self.flush_path(Paint::Stroke);
        self.current_point = None;
    }

    fn show_text(&mut self, text: &str, size: f64) {
        let Some((x, y)) = self.current_point else {
            log::warn!("Text {:?} drawn without a current point; skipped", text);
            return;
        };
        let node = Text::new(text)
            .set("x", x)
            .set("y", y)
            .set("font-family", self.font_family.as_str())
            .set("font-size", size)
            .set("fill", self.source.to_hex());
        self.push(node);
    }
}
