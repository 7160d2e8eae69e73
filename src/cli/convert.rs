use crate::adapters::output::json_writer::JsonWriter;
use crate::adapters::parsers::ini_parser::IniProfileParser;
use crate::cli::Cli;
use crate::cli::output;
use crate::config::settings::Settings;
use crate::core::errors::Result;
use crate::core::services::document_assembler::DocumentAssembler;
use crate::core::traits::writer::{Destination, DocumentWriter};

/// Execute a conversion run.
///
/// Parses the config file, then the credentials file, and writes the
/// combined JSON document to stdout or `--output-file`.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli)?;

    let assembler = DocumentAssembler::new(IniProfileParser::new(settings.verbose));
    let doc = assembler.assemble(&settings.config_file, &settings.credentials_file)?;

    let writer = JsonWriter::new(settings.pretty);
    writer.write(&doc, &settings.destination)?;

    if settings.verbose {
        let config_profiles = doc.config.profile_names();
        let credential_profiles = doc.credentials.profile_names();
        output::success(&format!(
            "config: {} profile(s) [{}], credentials: {} profile(s) [{}]",
            config_profiles.len(),
            config_profiles.join(", "),
            credential_profiles.len(),
            credential_profiles.join(", "),
        ));
        if let Destination::File(path) = &settings.destination {
            output::success(&format!("Written to {}", path.display()));
        }
    }

    Ok(())
}
