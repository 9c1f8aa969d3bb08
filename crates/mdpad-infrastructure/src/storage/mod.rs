pub mod atomic_toml;
pub mod fs_document_storage;

pub use atomic_toml::AtomicTomlFile;
pub use fs_document_storage::FsDocumentStorage;
