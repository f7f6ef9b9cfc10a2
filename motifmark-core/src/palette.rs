//! Colors and motif color assignment

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MarkError, MarkResult};
use crate::motif::MotifSet;

/// RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const LEGEND_GRAY: Rgb = Rgb::new(0.8, 0.8, 0.8);

    /// 8-bit channels, rounded and clamped.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Fixed motif palette, assigned in motif input order.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(0.0, 0.5, 0.0),  // green
    Rgb::new(1.0, 0.0, 0.0),  // red
    Rgb::new(0.0, 0.0, 1.0),  // blue
    Rgb::new(0.5, 0.0, 0.5),  // purple
    Rgb::new(0.0, 0.75, 1.0), // teal
    Rgb::new(1.0, 0.0, 1.0),  // pink
    Rgb::new(0.6, 0.2, 0.4),  // maroon
    Rgb::new(1.0, 0.4, 0.0),  // orange
    Rgb::new(1.0, 1.0, 0.0),  // yellow
    Rgb::new(1.0, 0.0, 0.5),  // salmon
];

/// Motif text → color, in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMap {
    entries: Vec<(String, Rgb)>,
}

impl ColorMap {
    /// Give each motif the next palette entry. More motifs than palette
    /// entries is an error; colors are never reused.
    pub fn assign(motifs: &MotifSet) -> MarkResult<Self> {
        if motifs.len() > PALETTE.len() {
            return Err(MarkError::TooManyMotifs {
                count: motifs.len(),
                capacity: PALETTE.len(),
            });
        }
        let entries = motifs
            .iter()
            .zip(PALETTE.iter())
            .map(|(motif, color)| (motif.raw().to_string(), *color))
            .collect();
        Ok(Self { entries })
    }

    pub fn get(&self, motif: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(raw, _)| raw == motif)
            .map(|(_, color)| *color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> + '_ {
        self.entries.iter().map(|(raw, color)| (raw.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
