//! Pistachio Sketch Persistence
//!
//! This crate provides:
//! - File schema mirror types ([`dto`])
//! - A JSON wire codec with `{kind, data}` tagged unions ([`codec`])
//! - Mapping between the runtime [`Document`](pistachio_core::Document) and the schema
//! - The [`DocumentPersistence`] port and its JSON file adapter
//! - Background loading on a worker thread
//!
//! Files carry a schema version; any version other than
//! [`SKETCH_FILE_VERSION`] is rejected before the document is read.

pub mod background;
pub mod codec;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod port;

// Re-exports for convenience
pub use background::BackgroundLoad;
pub use dto::SKETCH_FILE_VERSION;
pub use error::{PersistenceError, PersistenceResult};
pub use mapper::{from_dto, to_dto};
pub use port::{
    DocumentPersistence, JsonDocumentAdapter, SKETCH_FILE_SUFFIXES, load_document_from_bytes,
    save_document_to_bytes,
};
