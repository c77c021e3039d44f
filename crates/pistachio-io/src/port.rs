//! Document persistence port and JSON file adapter

use std::path::Path;

use pistachio_core::Document;

use crate::codec;
use crate::error::{PersistenceError, PersistenceResult};
use crate::mapper;

/// File name suffixes handled by [`JsonDocumentAdapter`]
pub const SKETCH_FILE_SUFFIXES: [&str; 2] = [".sketch.json", ".pistachio.json"];

/// Loads and saves whole documents
///
/// Implementations must be usable from a background thread.
pub trait DocumentPersistence: Send + Sync {
    /// Read a document from `path`
    fn load_document(&self, path: &Path) -> PersistenceResult<Document>;

    /// Write `document` to `path`, replacing any existing file
    fn save_document(&self, document: &Document, path: &Path) -> PersistenceResult<()>;

    /// Whether this adapter recognizes the file name of `path`
    fn can_handle(&self, path: &Path) -> bool;

    /// File-dialog filter string, e.g. `"*.sketch.json;*.pistachio.json"`
    fn supported_extensions(&self) -> &'static str;
}

/// Versioned JSON sketch files
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentAdapter;

impl JsonDocumentAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPersistence for JsonDocumentAdapter {
    fn load_document(&self, path: &Path) -> PersistenceResult<Document> {
        tracing::debug!("Loading sketch document from {:?}", path);
        let bytes = std::fs::read(path).map_err(|e| PersistenceError::io(path, e))?;
        let document = load_document_from_bytes(&bytes)?;
        tracing::info!(
            "Loaded document '{}' ({} sketches, {} entities) from {:?}",
            document.name,
            document.sketches.len(),
            document.entity_count(),
            path
        );
        Ok(document)
    }

    fn save_document(&self, document: &Document, path: &Path) -> PersistenceResult<()> {
        tracing::debug!("Saving sketch document to {:?}", path);
        let bytes = save_document_to_bytes(document)?;
        std::fs::write(path, bytes).map_err(|e| PersistenceError::io(path, e))?;
        tracing::info!("Saved document '{}' to {:?}", document.name, path);
        Ok(())
    }

    fn can_handle(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        SKETCH_FILE_SUFFIXES
            .iter()
            .any(|suffix| name.ends_with(suffix))
    }

    fn supported_extensions(&self) -> &'static str {
        "*.sketch.json;*.pistachio.json"
    }
}

/// Decode a document from JSON bytes
pub fn load_document_from_bytes(data: &[u8]) -> PersistenceResult<Document> {
    mapper::from_dto(codec::from_slice(data)?)
}

/// Encode a document as pretty-printed JSON bytes
pub fn save_document_to_bytes(document: &Document) -> PersistenceResult<Vec<u8>> {
    codec::to_vec_pretty(&mapper::to_dto(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_can_handle() {
        let adapter = JsonDocumentAdapter::new();
        assert!(adapter.can_handle(Path::new("part.sketch.json")));
        assert!(adapter.can_handle(Path::new("/tmp/dir/part.pistachio.json")));
        assert!(!adapter.can_handle(Path::new("part.json")));
        assert!(!adapter.can_handle(Path::new("part.sketch.json.bak")));
        assert!(!adapter.can_handle(Path::new("sketch.json/")));
        assert!(!adapter.can_handle(&PathBuf::new()));
    }

    #[test]
    fn test_supported_extensions() {
        assert_eq!(
            JsonDocumentAdapter.supported_extensions(),
            "*.sketch.json;*.pistachio.json"
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/nonexistent/dir/missing.sketch.json");
        match JsonDocumentAdapter.load_document(path) {
            Err(PersistenceError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        let doc = Document::new(7, "Bytes");
        let bytes = save_document_to_bytes(&doc).unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.contains("\n  \"document\""));

        let restored = load_document_from_bytes(&bytes).unwrap();
        assert_eq!(restored, doc);
    }
}
