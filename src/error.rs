//! Per-document failure outcomes.

use std::error::Error as StdError;

/// Why a document produced no record.
///
/// Both variants are recoverable at batch level: the document is reported and
/// skipped, and it is never written to the ledger, so a later run will try it again.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// No known site signature was found in the document text.
    #[error("unknown site structure: {id}")]
    UnknownSite { id: String },

    /// A known site's extractor hit a structural failure it cannot tolerate.
    #[error("malformed document {id}: {source}")]
    MalformedDocument {
        id: String,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },
}

impl ExtractionError {
    pub fn malformed(id: impl Into<String>, cause: anyhow::Error) -> Self {
        ExtractionError::MalformedDocument {
            id: id.into(),
            source: cause.into(),
        }
    }

    /// Identifier of the document that failed.
    pub fn id(&self) -> &str {
        match self {
            ExtractionError::UnknownSite { id } | ExtractionError::MalformedDocument { id, .. } => id,
        }
    }
}
