//! Persistence of built book documents and the run manifest.
//!
//! The builder talks to a [`DocumentStore`]; [`DirStore`] keeps everything as
//! JSON files in one output directory:
//!
//! ```text
//! <output_dir>/
//! ├── books.json     (manifest)
//! ├── MAT.json
//! ├── MRK.json
//! └── ...
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use morphcorpus_shared::{BookText, CorpusError, ManifestEntry, Result};

/// Where built documents live.
pub trait DocumentStore {
    /// Whether a document for `code` has already been persisted.
    fn exists(&self, code: &str) -> bool;

    /// Read back a persisted document.
    fn load_book(&self, code: &str) -> Result<BookText>;

    /// Persist (or overwrite) the document for `code`.
    fn save_book(&self, code: &str, book: &BookText) -> Result<()>;

    /// Persist (or overwrite) the run manifest.
    fn save_manifest(&self, entries: &[ManifestEntry]) -> Result<()>;
}

// ---------------------------------------------------------------------------
// DirStore
// ---------------------------------------------------------------------------

/// Filesystem store: one `<CODE>.json` per book plus a manifest file.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
    manifest_file: String,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>, manifest_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            manifest_file: manifest_file.into(),
        }
    }

    /// Path of the document for `code`.
    pub fn document_path(&self, code: &str) -> PathBuf {
        self.root.join(format!("{code}.json"))
    }

    /// Path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_file)
    }

    fn ensure_root(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| CorpusError::io(&self.root, e))
    }
}

impl DocumentStore for DirStore {
    fn exists(&self, code: &str) -> bool {
        self.document_path(code).is_file()
    }

    fn load_book(&self, code: &str) -> Result<BookText> {
        let path = self.document_path(code);
        let content = std::fs::read(&path).map_err(|e| CorpusError::io(&path, e))?;
        serde_json::from_slice(&content)
            .map_err(|e| CorpusError::Storage(format!("invalid document {}: {e}", path.display())))
    }

    fn save_book(&self, code: &str, book: &BookText) -> Result<()> {
        self.ensure_root()?;
        let json = serde_json::to_vec(book)
            .map_err(|e| CorpusError::Storage(format!("JSON serialization failed: {e}")))?;
        write_atomic(&self.document_path(code), &json)
    }

    fn save_manifest(&self, entries: &[ManifestEntry]) -> Result<()> {
        self.ensure_root()?;
        write_json_pretty(&self.manifest_path(), entries)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Write a JSON file (pretty-printed).
fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(data)
        .map_err(|e| CorpusError::Storage(format!("JSON serialization failed: {e}")))?;
    write_atomic(path, &json)
}

/// Write to a dot-prefixed temp file beside `path`, then rename over it.
/// A reader never sees a half-written document.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CorpusError::validation(format!("not a file path: {}", path.display())))?;
    let temp = path.with_file_name(format!(".{file_name}.tmp"));

    std::fs::write(&temp, content).map_err(|e| CorpusError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| CorpusError::io(path, e))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}
