use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::core::errors::{AwsJsonError, Result};
use crate::core::traits::writer::Destination;

/// Fully resolved options for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_file: PathBuf,
    pub credentials_file: PathBuf,
    pub destination: Destination,
    pub verbose: bool,
    pub pretty: bool,
}

impl Settings {
    /// Resolve CLI arguments, filling unset input paths with the
    /// defaults under the current user's home directory.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        // Only look up the home directory when a default is actually needed.
        let home = if cli.config_file.is_none() || cli.credentials_file.is_none() {
            dirs::home_dir()
        } else {
            None
        };
        Self::resolve_with_home(cli, home.as_deref())
    }

    fn resolve_with_home(cli: &Cli, home: Option<&Path>) -> Result<Self> {
        let default_in_aws_dir = |name: &str| -> Result<PathBuf> {
            home.map(|h| h.join(".aws").join(name))
                .ok_or(AwsJsonError::HomeDirNotFound)
        };

        let config_file = match &cli.config_file {
            Some(path) => path.clone(),
            None => default_in_aws_dir("config")?,
        };
        let credentials_file = match &cli.credentials_file {
            Some(path) => path.clone(),
            None => default_in_aws_dir("credentials")?,
        };
        let destination = cli
            .output_file
            .clone()
            .map_or(Destination::Stdout, Destination::File);

        Ok(Self {
            config_file,
            credentials_file,
            destination,
            verbose: cli.verbose,
            pretty: cli.pretty,
        })
    }
}
