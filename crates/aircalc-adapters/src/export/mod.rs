//! Export sink adapters.

pub mod directory;
pub mod memory;

pub use directory::DirectoryExportSink;
pub use memory::MemoryExportSink;
