pub mod convert;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

/// Convert AWS config and credentials files into a single JSON document.
#[derive(Parser, Debug)]
#[command(name = "awsjson", version, about, long_about = None)]
pub struct Cli {
    /// Verbose logging to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// The location of the config file (default: ~/.aws/config)
    #[arg(long, env = "AWS_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// The location of the credentials file (default: ~/.aws/credentials)
    #[arg(long, env = "AWS_SHARED_CREDENTIALS_FILE", value_name = "PATH")]
    pub credentials_file: Option<PathBuf>,

    /// If omitted, the JSON body is printed to stdout
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}
