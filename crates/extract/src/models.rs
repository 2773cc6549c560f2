/// One citation found in a content unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitationRecord {
    /// Identifier of the citation within its document,
    /// `<prefix>:citations-<unit>.<index>`.
    pub urn: String,
    pub data: CitationData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitationData {
    pub quote: String,
    /// The reference chosen for resolution, if either locus form had one.
    #[cfg_attr(feature = "serde", serde(rename = "ref"))]
    pub reference: Option<String>,
    /// Canonical URN of the cited passage, `None` when resolution failed.
    pub urn: Option<String>,
}

/// Per-document citation index. Every citation takes the next index, whether
/// it resolves or not, so identifiers are never reused within a document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CitationCounter {
    next: u64,
}

impl CitationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the current index and advances.
    pub fn next_index(&mut self) -> u64 {
        let index = self.next;
        self.next += 1;
        index
    }

    /// Number of indices handed out so far.
    pub fn count(&self) -> u64 {
        self.next
    }
}
