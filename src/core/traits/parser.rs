use std::path::Path;

use crate::core::errors::Result;
use crate::core::models::profile_table::ProfileTable;

/// Port for turning a profile-sectioned settings file into a `ProfileTable`.
///
/// Only the AWS INI dialect ships today (`IniProfileParser`).
pub trait ProfileParser: Send + Sync {
    /// Open `path` and parse it line by line.
    ///
    /// # Errors
    ///
    /// - `FileAccess` if the file cannot be opened or read.
    /// - `Parse` on the first malformed line.
    fn parse_file(&self, path: &Path) -> Result<ProfileTable>;
}
