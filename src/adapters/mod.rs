pub mod output;
pub mod parsers;
