use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use commands::draw::DrawRequest;
use config::Config;
use error::{print_error_and_exit, CliError, CliResult};
use motifmark_export::ExportFormat;

#[derive(Parser)]
#[command(name = "motifmark")]
#[command(about = "motifmark - exon and binding-motif diagrams for transcripts")]
#[command(version)]
#[command(long_about = "
motifmark draws every transcript of a FASTA file as a to-scale line, marks exons
(upper-case bases) and overlays every occurrence of each binding motif.
Motifs may use IUPAC ambiguity codes.

Examples:
  motifmark -f Figure_1.fasta -m Fig_1_motifs.txt
  motifmark -f Figure_1.fasta -m Fig_1_motifs.txt -o figures/fig1.png
  motifmark -f Figure_1.fasta -m Fig_1_motifs.txt --format png --dump-scene scene.json
")]
pub struct Cli {
    /// FASTA file of transcripts (exons in upper case)
    #[arg(short, long, required_unless_present = "example_config")]
    pub fasta: Option<PathBuf>,

    /// Motif list, one motif per line
    #[arg(short, long, required_unless_present = "example_config")]
    pub motifs: Option<PathBuf>,

    /// Output file (defaults to <fasta name>.<format> in the configured directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (auto-detected from the output extension; PNG output has no text labels)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Also write the draw command list as JSON
    #[arg(long)]
    pub dump_scene: Option<PathBuf>,

    /// Print an example motifmark.toml and exit
    #[arg(long)]
    pub example_config: bool,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of threads to use
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Svg => ExportFormat::Svg,
            OutputFormat::Png => ExportFormat::Png,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    // RUST_LOG still takes precedence over the flags
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    // The sample config must stay reachable when the local one is broken
    if cli.example_config {
        let example = Config::example_toml().map_err(|e| CliError::config(format!("{:#}", e)))?;
        print!("{}", example);
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref()).map_err(|e| CliError::config(format!("{:#}", e)))?;

    // Set global thread count if specified
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to set thread count")
            .map_err(|e| CliError::config(format!("{:#}", e)))?;
    }

    let (Some(fasta), Some(motifs)) = (&cli.fasta, &cli.motifs) else {
        return Err(CliError::config("both --fasta and --motifs are required"));
    };

    let request = DrawRequest {
        fasta: fasta.clone(),
        motifs: motifs.clone(),
        output: cli.output.clone(),
        format: cli.format.map(ExportFormat::from),
        dump_scene: cli.dump_scene.clone(),
    };
    commands::draw::execute(&config, &request)?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(&cli) {
        print_error_and_exit(&err);
    }

    Ok(())
}
