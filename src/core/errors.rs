use std::path::PathBuf;

/// All domain errors for awsjson.
///
/// Each variant carries enough context (path, line, hint) to diagnose
/// the problem from the message alone. Every one of them is fatal to
/// the run.
#[derive(Debug, thiserror::Error)]
pub enum AwsJsonError {
    #[error(
        "Cannot read {path}: {source}\n\n  \
         Check that the file exists and is readable.\n  \
         Use --config-file / --credentials-file to point at another location."
    )]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Parse error in {file} at line {line}: {detail}\n\n  \
         Expected format: [profile name] headers followed by key = value lines.\n  \
         Blank lines are allowed; any other line is an error."
    )]
    Parse {
        file: PathBuf,
        line: usize,
        detail: String,
    },

    #[error("Failed to encode JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot write output to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Could not determine the home directory\n\n  \
         Pass --config-file and --credentials-file explicitly, or set\n  \
         AWS_CONFIG_FILE and AWS_SHARED_CREDENTIALS_FILE."
    )]
    HomeDirNotFound,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AwsJsonError>;
