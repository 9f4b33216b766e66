use serde::{Deserialize, Serialize};

/// What the caller knows about a document besides its markup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentContext {
    /// Stable identifier, also the ledger key (e.g. `htmls_07.08/3.html`)
    pub id: String,
    /// Used to synthesize a link when the markup has no canonical one (file stem)
    pub fallback_id: String,
    /// Sequence column value within the batch
    pub sequence: String,
    /// Label shared by every document of one collection run
    pub batch_label: String,
}

impl DocumentContext {
    pub fn new(
        id: impl Into<String>,
        fallback_id: impl Into<String>,
        sequence: impl Into<String>,
        batch_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            fallback_id: fallback_id.into(),
            sequence: sequence.into(),
            batch_label: batch_label.into(),
        }
    }
}
