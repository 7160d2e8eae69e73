use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::cli::output;
use crate::core::errors::{AwsJsonError, Result};
use crate::core::models::profile_table::ProfileTable;
use crate::core::traits::parser::ProfileParser;

/// `[name]` or `[profile name]`, with any whitespace inside the brackets.
static PROFILE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\s*(?:profile\s+)?(.*?)\s*\]$").expect("profile header pattern is valid")
});

/// A single classified line of an AWS config or credentials file.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    Header(&'a str),
    Entry { key: &'a str, value: &'a str },
}

/// Parses AWS shared config and credentials files.
///
/// Supports:
/// - `[default]` and `[profile name]` section headers
/// - `key = value` entries, split on the first `=` only
/// - Blank lines
///
/// Anything else is a parse error.
///
/// A header seen twice restarts that profile from empty. With `verbose`
/// set, every non-blank line is echoed to stderr as it is read.
pub struct IniProfileParser {
    verbose: bool,
}

impl IniProfileParser {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Classify one raw line. `line_number` is 1-based.
    fn parse_line<'a>(raw: &'a str, source: &Path, line_number: usize) -> Result<Line<'a>> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Ok(Line::Blank);
        }

        if let Some(caps) = PROFILE_HEADER.captures(trimmed) {
            // `[]` names the empty profile
            let name = caps.get(1).map_or("", |m| m.as_str().trim());
            return Ok(Line::Header(name));
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(AwsJsonError::Parse {
                file: source.to_path_buf(),
                line: line_number,
                detail: format!("expected [profile] or key = value, got: {trimmed}"),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(AwsJsonError::Parse {
                file: source.to_path_buf(),
                line: line_number,
                detail: format!("empty key: {trimmed}"),
            });
        }

        Ok(Line::Entry {
            key,
            value: value.trim(),
        })
    }

    fn parse_reader(&self, reader: impl BufRead, source: &Path) -> Result<ProfileTable> {
        let mut table = ProfileTable::new();
        let mut current: Option<String> = None;

        if self.verbose {
            output::trace(&format!("Reading from: {}", source.display()));
        }

        for (idx, raw) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let raw = raw.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => AwsJsonError::Parse {
                    file: source.to_path_buf(),
                    line: line_number,
                    detail: "line is not valid UTF-8 text".to_string(),
                },
                _ => AwsJsonError::FileAccess {
                    path: source.to_path_buf(),
                    source: e,
                },
            })?;

            if self.verbose && !raw.trim().is_empty() {
                output::trace(&format!("{}: {}", source.display(), raw.trim()));
            }

            match Self::parse_line(&raw, source, line_number)? {
                Line::Blank => {}
                Line::Header(name) => {
                    table.start_profile(name);
                    current = Some(name.to_string());
                }
                Line::Entry { key, value } => {
                    let Some(profile) = current.as_deref() else {
                        return Err(AwsJsonError::Parse {
                            file: source.to_path_buf(),
                            line: line_number,
                            detail: format!("'{key}' appears before any [profile] header"),
                        });
                    };
                    table.insert(profile, key, value);
                }
            }
        }

        if self.verbose {
            output::trace("");
        }

        Ok(table)
    }

    /// Parse in-memory content. `source` only labels errors.
    #[cfg(test)]
    pub fn parse(&self, content: &str, source: &Path) -> Result<ProfileTable> {
        self.parse_reader(content.as_bytes(), source)
    }
}

impl ProfileParser for IniProfileParser {
    fn parse_file(&self, path: &Path) -> Result<ProfileTable> {
        let file = File::open(path).map_err(|e| AwsJsonError::FileAccess {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.parse_reader(BufReader::new(file), path)
    }
}
