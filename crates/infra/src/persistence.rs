// crates/infra/src/persistence.rs
mod document_writer;
mod file_reader;
mod file_writer;

pub use document_writer::{FsDocumentWriter, WriteMode};
pub use file_reader::FileReader;
pub use file_writer::FileWriter;
