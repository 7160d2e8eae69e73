pub mod parsed_document;
pub mod profile_table;
