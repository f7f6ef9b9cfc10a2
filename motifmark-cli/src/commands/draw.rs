//! Draw command implementation - annotate transcripts and export the motif diagram

use std::path::{Path, PathBuf};

use motifmark_core::io::{read_motifs, read_sequences};
use motifmark_core::{annotate_all, compute_layout, render, Scene};
use motifmark_export::{ExportConfig, ExportFormat, SceneExporter};

use crate::config::Config;
use crate::error::{CliError, CliResult};

/// Inputs and overrides for one diagram.
#[derive(Debug, Clone)]
pub struct DrawRequest {
    pub fasta: PathBuf,
    pub motifs: PathBuf,
    pub output: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub dump_scene: Option<PathBuf>,
}

/// Run the whole pipeline and return the path written.
pub fn execute(config: &Config, request: &DrawRequest) -> CliResult<PathBuf> {
    log::info!("Input FASTA: {}", request.fasta.display());
    log::info!("Input motifs: {}", request.motifs.display());

    for input in [&request.fasta, &request.motifs] {
        if !input.exists() {
            return Err(CliError::file_not_found(input.clone()));
        }
    }

    let sequences = read_sequences(&request.fasta)
        .map_err(|e| CliError::from_input(&request.fasta, e))?;
    let motifs = read_motifs(&request.motifs)
        .map_err(|e| CliError::from_input(&request.motifs, e))?;
    log::info!("Loaded {} sequence(s) and {} motif(s)", sequences.len(), motifs.len());

    let annotated = annotate_all(&sequences, &motifs);
    let geometry = compute_layout(&sequences, &motifs)?;

    let name = display_name(&request.fasta);
    let scene = render(&geometry, &annotated, &name)?;
    log::debug!("Scene holds {} draw commands", scene.commands.len());

    let (output, format) = resolve_output(config, request, &name);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let exporter = SceneExporter::new(ExportConfig {
        font_family: config.render.font_family.clone(),
    });
    exporter
        .export(&scene, &output, format)
        .map_err(|e| CliError::rendering(format!("{:#}", e)))?;

    if let Some(dump) = &request.dump_scene {
        dump_scene(&scene, dump)?;
    }

    log::info!("{} saved!", output.display());
    Ok(output)
}

/// Diagram name: the FASTA file name without a `.fasta`/`.fa` extension.
pub fn display_name(fasta: &Path) -> String {
    let file_name = fasta
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    for ext in [".fasta", ".fa"] {
        if let Some(stem) = file_name.strip_suffix(ext) {
            if !stem.is_empty() {
                return stem.to_string();
            }
        }
    }

    fasta
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or(file_name)
}

/// Pick output path and format.
///
/// An explicit --format wins, then the extension of an explicit --output,
/// then the configured default. Without --output the file is named after the
/// diagram inside the configured directory.
fn resolve_output(config: &Config, request: &DrawRequest, name: &str) -> (PathBuf, ExportFormat) {
    let format = request
        .format
        .or_else(|| request.output.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or(config.output.format);

    let output = match &request.output {
        Some(path) => path.clone(),
        None => config
            .output
            .directory
            .join(format!("{}.{}", name, format.extension())),
    };

    (output, format)
}

fn dump_scene(scene: &Scene, path: &Path) -> CliResult<()> {
    let json = serde_json::to_string_pretty(scene)
        .map_err(|e| CliError::rendering(format!("Failed to serialize scene: {}", e)))?;
    std::fs::write(path, json)?;
    log::info!("Scene dumped to {}", path.display());
    Ok(())
}
