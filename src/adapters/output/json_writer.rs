use std::io::Write;
use std::path::PathBuf;

use crate::core::errors::{AwsJsonError, Result};
use crate::core::models::parsed_document::ParsedDocument;
use crate::core::traits::writer::{Destination, DocumentWriter};

/// Writes the document as JSON.
///
/// Stdout output ends with a newline; file output is the bare JSON body.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl DocumentWriter for JsonWriter {
    fn render(&self, doc: &ParsedDocument) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(doc)?
        } else {
            serde_json::to_string(doc)?
        };
        Ok(json)
    }

    fn write(&self, doc: &ParsedDocument, destination: &Destination) -> Result<()> {
        let json = self.render(doc)?;

        match destination {
            Destination::Stdout => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}")
                    .and_then(|()| stdout.flush())
                    .map_err(|e| AwsJsonError::OutputWrite {
                        path: PathBuf::from("<stdout>"),
                        source: e,
                    })
            }
            Destination::File(path) => {
                std::fs::write(path, json).map_err(|e| AwsJsonError::OutputWrite {
                    path: path.clone(),
                    source: e,
                })
            }
        }
    }
}
