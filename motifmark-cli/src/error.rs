//! Error handling for the motifmark CLI

use motifmark_core::io::InputError;
use motifmark_core::MarkError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for motifmark CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parsing error in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Invalid motif: {0}")]
    Motif(MarkError),

    #[error("Invalid sequence: {0}")]
    Sequence(MarkError),

    #[error("Layout error: {0}")]
    Layout(MarkError),

    #[error("Rendering error: {message}")]
    Rendering { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn parse<S: Into<String>>(file: S, message: S) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn rendering<S: Into<String>>(message: S) -> Self {
        Self::Rendering { message: message.into() }
    }

    /// Classify a loader failure for `file`.
    pub fn from_input(file: &Path, err: InputError) -> Self {
        match err {
            InputError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::file_not_found(file.to_path_buf())
            }
            InputError::Io(e) => Self::io(format!("{}: {}", file.display(), e)),
            InputError::Record(e) => Self::from(e),
            other => Self::parse(file.display().to_string(), other.to_string()),
        }
    }
}

impl From<MarkError> for CliError {
    fn from(err: MarkError) -> Self {
        match err {
            MarkError::InvalidMotifCharacter { .. } | MarkError::EmptyMotif { .. } => Self::Motif(err),
            MarkError::EmptyName { .. } | MarkError::EmptySequence { .. } => Self::Sequence(err),
            MarkError::TooManyMotifs { .. }
            | MarkError::NoSequences
            | MarkError::RowMismatch { .. }
            | MarkError::UncoloredMotif { .. } => Self::Layout(err),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    // Add helpful suggestions based on error type
    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file",
                path.display()
            ));
        }

        CliError::Parse { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check that the FASTA file starts with a '>' header line\n\
                 • Ensure the file is not corrupted or truncated",
            );
        }

        CliError::Motif(_) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Motifs may use A, C, G, T, U and the IUPAC codes N R Y K M S W B D H V\n\
                 • Put one motif per line; blank lines are ignored",
            );
        }

        CliError::Sequence(_) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Every FASTA record needs a name after '>' and at least one base",
            );
        }

        CliError::Layout(MarkError::TooManyMotifs { capacity, .. }) => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Reduce the motif file to at most {} distinct motifs\n\
                 • Split the motifs over several runs",
                capacity
            ));
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your motifmark.toml configuration file\n\
                 • Use 'motifmark --example-config' to generate a sample configuration\n\
                 • Verify that all configuration values are valid",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CliError::config("test message");
        assert!(matches!(err, CliError::Config { .. }));
        assert_eq!(err.to_string(), "Configuration error: test message");
    }

    #[test]
    fn test_error_suggestions() {
        let err = CliError::file_not_found(PathBuf::from("test.fa"));
        let formatted = format_error_with_suggestions(&err);
        assert!(formatted.contains("Suggestions:"));
        assert!(formatted.contains("Check that the file path is correct"));
    }

    #[test]
    fn test_mark_errors_are_classified() {
        let err: CliError = MarkError::TooManyMotifs { count: 11, capacity: 10 }.into();
        assert!(matches!(err, CliError::Layout(_)));
        assert!(format_error_with_suggestions(&err).contains("at most 10 distinct motifs"));

        let err: CliError = MarkError::RowMismatch { rows: 2, sequences: 1 }.into();
        assert!(matches!(err, CliError::Layout(_)));
        let err: CliError = MarkError::UncoloredMotif { motif: "TAG".into() }.into();
        assert_eq!(err.to_string(), "Layout error: motif 'TAG' has no color in the layout");

        let err: CliError = MarkError::EmptyMotif { index: Some(2) }.into();
        assert_eq!(err.to_string(), "Invalid motif: empty motif (record #3)");
    }

    #[test]
    fn test_missing_input_becomes_file_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CliError::from_input(Path::new("motifs.txt"), InputError::Io(io_err));
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::Io { .. }));
    }
}
