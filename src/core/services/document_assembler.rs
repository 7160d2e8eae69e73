use std::path::Path;

use crate::core::errors::Result;
use crate::core::models::parsed_document::ParsedDocument;
use crate::core::traits::parser::ProfileParser;

/// Builds a `ParsedDocument` from a config file and a credentials file.
///
/// The config file is parsed first. The first failure aborts the whole
/// assembly; no partial document is ever returned.
pub struct DocumentAssembler<P: ProfileParser> {
    parser: P,
}

impl<P: ProfileParser> DocumentAssembler<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn assemble(&self, config_path: &Path, credentials_path: &Path) -> Result<ParsedDocument> {
        let config = self.parser.parse_file(config_path)?;
        let credentials = self.parser.parse_file(credentials_path)?;

        Ok(ParsedDocument {
            config,
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::parsers::ini_parser::IniProfileParser;
    use crate::core::errors::AwsJsonError;
    use assert_fs::prelude::*;

    #[test]
    fn assembles_config_and_credentials() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("config").write_str("[default]\nregion=x\n").unwrap();
        dir.child("credentials")
            .write_str("[default]\naws_access_key_id=y\n")
            .unwrap();

        let assembler = DocumentAssembler::new(IniProfileParser::new(false));
        let doc = assembler
            .assemble(&dir.path().join("config"), &dir.path().join("credentials"))
            .unwrap();

        assert_eq!(doc.config.get("default", "region"), Some("x"));
        assert_eq!(doc.config.get("default", "aws_access_key_id"), None);
        assert_eq!(doc.credentials.get("default", "aws_access_key_id"), Some("y"));
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            serde_json::json!({
                "config": {"default": {"region": "x"}},
                "credentials": {"default": {"aws_access_key_id": "y"}}
            })
        );
    }

    #[test]
    fn missing_credentials_aborts() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("config").write_str("[default]\nregion=x\n").unwrap();

        let assembler = DocumentAssembler::new(IniProfileParser::new(false));
        let err = assembler
            .assemble(&dir.path().join("config"), &dir.path().join("credentials"))
            .unwrap_err();

        assert!(matches!(err, AwsJsonError::FileAccess { .. }));
    }

    #[test]
    fn malformed_config_aborts_before_credentials() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("config").write_str("[default]\nbroken\n").unwrap();

        let assembler = DocumentAssembler::new(IniProfileParser::new(false));
        let err = assembler
            .assemble(&dir.path().join("config"), &dir.path().join("missing"))
            .unwrap_err();

        assert!(matches!(err, AwsJsonError::Parse { line: 2, .. }));
    }
}
