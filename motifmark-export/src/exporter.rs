//! Scene export
//!
//! Replays a [`Scene`] onto the surface matching the requested format and
//! writes the result.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use motifmark_core::render::Scene;
use serde::{Deserialize, Serialize};

use crate::png_surface::PngSurface;

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Svg,
    Png,
}

impl ExportFormat {
    /// Detect the format from a file extension, ignoring case.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            other => anyhow::bail!("Unsupported output format: {}", other),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub font_family: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
        }
    }
}

/// Writes scenes to disk.
pub struct SceneExporter {
    config: ExportConfig,
}

impl SceneExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Write `scene` to `path` in `format`.
    pub fn export<P: AsRef<Path>>(&self, scene: &Scene, path: P, format: ExportFormat) -> Result<()> {
        let path = path.as_ref();
        log::debug!(
            "Exporting {} draw commands as {} to {}",
            scene.commands.len(),
            format,
            path.display()
        );
        match format {
            ExportFormat::Svg => self.export_svg(scene, path),
            ExportFormat::Png => self.export_png(scene, path),
        }
    }

    /// Export to SVG format
    #[cfg(feature = "vector-export")]
    pub fn export_svg<P: AsRef<Path>>(&self, scene: &Scene, path: P) -> Result<()> {
        std::fs::write(path, self.render_svg(scene))?;
        Ok(())
    }

    #[cfg(not(feature = "vector-export"))]
    pub fn export_svg<P: AsRef<Path>>(&self, _scene: &Scene, _path: P) -> Result<()> {
        anyhow::bail!("SVG export requires the 'vector-export' feature")
    }

    /// The SVG document for `scene`, without touching the filesystem.
    #[cfg(feature = "vector-export")]
    pub fn render_svg(&self, scene: &Scene) -> String {
        let mut surface =
            crate::svg_surface::SvgSurface::new(scene.width, scene.height, self.config.font_family.as_str());
        scene.replay(&mut surface);
        surface.into_string()
    }

    /// Export to PNG format
    pub fn export_png<P: AsRef<Path>>(&self, scene: &Scene, path: P) -> Result<()> {
        let mut surface = PngSurface::new(scene.width, scene.height);
        scene.replay(&mut surface);
        surface.save(path)
    }
}

impl Default for SceneExporter {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}
