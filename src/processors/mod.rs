pub mod batch_tagger;
pub mod file_store;

pub use batch_tagger::{BatchTagger, ErrorPolicy};
pub use file_store::{DiskStore, FileStore};
