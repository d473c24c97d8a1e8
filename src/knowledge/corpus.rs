//! Loads the knowledge-base directory into one grounding blob.

use std::path::{Path, PathBuf};

use super::KnowledgeError;

/// The concatenated knowledge base, each document prefixed with a header
/// naming its source file. Immutable once loaded; safe to share.
#[derive(Debug, Clone)]
pub struct KnowledgeCorpus {
    text: String,
    file_count: usize,
}

impl KnowledgeCorpus {
    /// Load every `*.html` document under `dir`, sorted by filename so the
    /// corpus is identical run to run.
    ///
    /// A single unreadable file is logged and skipped; a directory that
    /// yields nothing at all is an error.
    pub fn load(dir: &Path) -> Result<Self, KnowledgeError> {
        let entries = std::fs::read_dir(dir).map_err(|source| KnowledgeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(KnowledgeError::NoDocuments(dir.to_path_buf()));
        }

        let mut combined = String::new();
        let mut loaded = 0usize;
        for path in &files {
            match std::fs::read_to_string(path) {
                Ok(content) => {
                    let filename = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    combined.push_str(&format!("\n\n=== KNOWLEDGE BASE FILE: {filename} ===\n"));
                    combined.push_str(&content);
                    loaded += 1;
                    tracing::info!(file = %filename, "Loaded knowledge base file");
                }
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "Failed to load knowledge base file");
                }
            }
        }

        if loaded == 0 {
            return Err(KnowledgeError::NoDocuments(dir.to_path_buf()));
        }

        tracing::info!(count = loaded, "Knowledge base loaded");
        Ok(Self {
            text: combined,
            file_count: loaded,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_html_files_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dental.html"), "<p>Dental services</p>").unwrap();
        fs::write(dir.path().join("optometry.html"), "<p>Optometry services</p>").unwrap();

        let corpus = KnowledgeCorpus::load(dir.path()).unwrap();
        assert_eq!(corpus.file_count(), 2);
        assert!(corpus
            .text()
            .contains("=== KNOWLEDGE BASE FILE: dental.html ==="));
        assert!(corpus.text().contains("<p>Optometry services</p>"));
    }

    #[test]
    fn files_are_ordered_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.html"), "second").unwrap();
        fs::write(dir.path().join("a.html"), "first").unwrap();

        let corpus = KnowledgeCorpus::load(dir.path()).unwrap();
        let a = corpus.text().find("a.html").unwrap();
        let b = corpus.text().find("b.html").unwrap();
        assert!(a < b);
    }

    #[test]
    fn empty_directory_is_no_documents() {
        let dir = tempfile::tempdir().unwrap();
        let err = KnowledgeCorpus::load(dir.path()).unwrap_err();
        assert!(matches!(err, KnowledgeError::NoDocuments(_)));
    }

    #[test]
    fn non_html_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "not a document").unwrap();
        let err = KnowledgeCorpus::load(dir.path()).unwrap_err();
        assert!(matches!(err, KnowledgeError::NoDocuments(_)));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let err = KnowledgeCorpus::load(Path::new("/nonexistent/kb")).unwrap_err();
        assert!(matches!(err, KnowledgeError::Io { .. }));
    }
}
