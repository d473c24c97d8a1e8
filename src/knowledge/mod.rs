//! The fixed knowledge base and the responder grounded in it.

pub mod corpus;
pub mod responder;

pub use corpus::KnowledgeCorpus;
pub use responder::Responder;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    /// The directory holds no loadable documents. Distinct from an I/O
    /// failure so a bad deployment is diagnosable; never answered over
    /// silently empty content.
    #[error("no knowledge base documents found in {0}")]
    NoDocuments(PathBuf),

    #[error("cannot read knowledge base at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
