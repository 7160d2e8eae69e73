use serde::{Deserialize, Serialize};

use super::profile_table::ProfileTable;

/// The combined result of parsing the config and credentials files.
///
/// Serializes as `{"config": {...}, "credentials": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub config: ProfileTable,
    pub credentials: ProfileTable,
}
