/*!
# motifmark export

Drawing surfaces that turn a rendered [`Scene`] into files.

- [`SvgSurface`]: vector output built with the `svg` crate
- [`PngSurface`]: CPU raster output built with the `image` crate

Both implement [`DrawingSurface`], so the renderer never needs to know which
backend it is talking to. [`SceneExporter`] picks the surface from an
[`ExportFormat`] and writes the result to disk.
*/

pub mod exporter;
pub mod png_surface;
#[cfg(feature = "vector-export")]
pub mod svg_surface;

pub use exporter::{ExportConfig, ExportFormat, SceneExporter};
pub use png_surface::PngSurface;
#[cfg(feature = "vector-export")]
pub use svg_surface::SvgSurface;

// Re-export important types
pub use motifmark_core::render::{DrawingSurface, Scene};
