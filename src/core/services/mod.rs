pub mod document_assembler;
