use serde::{Deserialize, Serialize};

/// What happened to one citation, resolved or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeEntry {
    /// The reference chosen for resolution.
    #[serde(rename = "ref")]
    pub reference: String,
    /// The `n` attribute of the citation's `<bibl>`, if any.
    pub n_attrib: Option<String>,
    /// The inline text of the citation's `<bibl>`, if any.
    pub bibl: Option<String>,
    /// The resolved URN, empty when resolution failed.
    pub urn: String,
    pub quote: String,
    pub xml_context: String,
    pub filename: Option<String>,
    /// Identifier of the citation within its document.
    pub doc_cit_urn: String,
}

impl OutcomeEntry {
    pub fn is_resolved(&self) -> bool {
        !self.urn.is_empty()
    }
}
