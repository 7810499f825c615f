pub mod file_entry;
pub mod record;

pub use file_entry::FileEntry;
pub use record::Record;
