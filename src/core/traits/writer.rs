use std::path::PathBuf;

use crate::core::errors::Result;
use crate::core::models::parsed_document::ParsedDocument;

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// Created if missing, otherwise truncated.
    File(PathBuf),
}

/// Port for rendering and delivering a `ParsedDocument`.
pub trait DocumentWriter: Send + Sync {
    /// Render the document to text.
    fn render(&self, doc: &ParsedDocument) -> Result<String>;

    /// Render the document and deliver it to `destination`.
    fn write(&self, doc: &ParsedDocument, destination: &Destination) -> Result<()>;
}
