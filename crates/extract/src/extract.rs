//! Citation extraction from one content unit.

use exn::ResultExt;
use locus_outcome::{OutcomeEntry, OutcomeSink};
use locus_resolve::{Context, Resolver};
use tracing::instrument;

use crate::consts::{BIBL_N_REGEX, BIBL_TEXT_REGEX, CIT_REGEX, QUOTE_REGEX};
use crate::error::{ErrorKind, Result};
use crate::models::{CitationCounter, CitationData, CitationRecord};
use crate::truncate::{DEFAULT_CONTEXT_BYTES, safe_markup_truncate};

/// The raw parts of one `<cit>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fragment<'a> {
    pub quote: &'a str,
    /// `n` attribute of the `<bibl>`.
    pub attribute: Option<&'a str>,
    /// Text content of the `<bibl>`.
    pub inline: Option<&'a str>,
}

impl<'a> Fragment<'a> {
    #[instrument(level = "trace")]
    pub(crate) fn parse(cit: &'a str) -> Self {
        let group = |captures: regex::Captures<'a>| captures.get(1).map(|m| m.as_str());
        let quote = QUOTE_REGEX.captures(cit).and_then(group);
        if quote.is_none() {
            tracing::debug!(cit, "citation has no quote");
        }
        Self {
            quote: quote.unwrap_or_default(),
            attribute: BIBL_N_REGEX.captures(cit).and_then(group),
            inline: BIBL_TEXT_REGEX.captures(cit).and_then(group),
        }
    }
}

/// Finds the citations of a document's content units, resolves them and
/// reports every outcome to a sink.
///
/// One extractor serves one document. Pair it with a single
/// [`CitationCounter`] for all of the document's content units.
pub struct Extractor<'a> {
    resolver: Resolver<'a>,
    sink: &'a dyn OutcomeSink,
    urn_prefix: String,
    filename: Option<String>,
    context_bytes: usize,
}

impl<'a> Extractor<'a> {
    /// `urn_prefix` is the document's URN; citation identifiers are built
    /// under it.
    pub fn new(resolver: Resolver<'a>, sink: &'a dyn OutcomeSink, urn_prefix: impl Into<String>) -> Self {
        Self {
            resolver,
            sink,
            urn_prefix: urn_prefix.into(),
            filename: None,
            context_bytes: DEFAULT_CONTEXT_BYTES,
        }
    }

    /// Source file reported in warnings and outcome entries.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Maximum size of the markup context stored in outcome entries.
    pub fn with_context_bytes(mut self, context_bytes: usize) -> Self {
        self.context_bytes = context_bytes;
        self
    }

    /// Extracts every citation of one content unit, numbered `unit`, in
    /// document order.
    ///
    /// Citations that cannot be resolved still produce a record (with no URN)
    /// and an outcome entry, and still use up an index of `counter`.
    ///
    /// # Errors
    ///
    /// Fails on the first citation whose outcome cannot be recorded, or that
    /// hits a fatal resolution error.
    #[instrument(
        skip(self, content, counter),
        fields(filename = self.filename.as_deref(), content_size = content.len())
    )]
    pub fn extract(&self, content: &str, unit: u64, counter: &mut CitationCounter) -> Result<Vec<CitationRecord>> {
        let context = Context {
            content: Some(content),
            filename: self.filename.as_deref(),
        };
        let xml_context = safe_markup_truncate(content, self.context_bytes);
        let mut records = Vec::new();
        for cit in CIT_REGEX.find_iter(content) {
            let doc_cit_urn = format!("{}:citations-{unit}.{}", self.urn_prefix, counter.next_index());
            let fragment = Fragment::parse(cit.as_str());
            let reference = self.resolver.resolve_reference(fragment.attribute, fragment.inline);
            let urn = match reference.as_deref() {
                Some(reference) => self
                    .resolver
                    .build_urn(reference, &context)
                    .or_raise(|| ErrorKind::Resolve(doc_cit_urn.clone()))?,
                None => None,
            };

            let entry = OutcomeEntry {
                reference: reference.clone().unwrap_or_default(),
                n_attrib: fragment.attribute.map(str::to_string),
                bibl: fragment.inline.map(str::to_string),
                urn: urn.clone().unwrap_or_default(),
                quote: fragment.quote.to_string(),
                xml_context: xml_context.to_string(),
                filename: self.filename.clone(),
                doc_cit_urn: doc_cit_urn.clone(),
            };
            self.sink.record(&entry).or_raise(|| ErrorKind::Outcome(doc_cit_urn.clone()))?;

            records.push(CitationRecord {
                urn: doc_cit_urn,
                data: CitationData {
                    quote: fragment.quote.to_string(),
                    reference,
                    urn,
                },
            });
        }
        tracing::debug!(
            citations = records.len(),
            resolved = records.iter().filter(|record| record.data.urn.is_some()).count(),
            "extracted citations",
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use locus_lexicon::Lexicon;
    use locus_outcome::MemoryOutcomeLog;
    use rstest::rstest;

    use super::*;

    const PREFIX: &str = "urn:cts:greekLit:viaf2603144.viaf001.perseus-eng1";

    const UNIT: &str = concat!(
        r#"<p>Cf. <cit><quote>μῆνιν ἄειδε</quote><bibl n="Hom. Il. 1.1">Il. 1.1</bibl></cit>, "#,
        r#"and <cit><quote>οὐ γάρ</quote><bibl>Hrmrm. 3</bibl></cit>, "#,
        r#"and <cit><quote>ἄνδρα μοι</quote><bibl n="Hom. Od. 1.1"/></cit>.</p>"#,
    );

    #[rstest]
    #[case::both_forms(
        r#"<cit><quote>a</quote><bibl n="Hom. Od. 4.66">Od. 4.66</bibl></cit>"#,
        Fragment { quote: "a", attribute: Some("Hom. Od. 4.66"), inline: Some("Od. 4.66") },
    )]
    #[case::attribute_only(
        r#"<cit type="lit"><quote xml:lang="grc">b</quote><bibl n="Soph. OT 5"/></cit>"#,
        Fragment { quote: "b", attribute: Some("Soph. OT 5"), inline: None },
    )]
    #[case::multiline_inline(
        "<cit><quote>c</quote>\n<bibl>Hom.\nOd. 4.66</bibl></cit>",
        Fragment { quote: "c", attribute: None, inline: Some("Hom.\nOd. 4.66") },
    )]
    #[case::no_quote(
        r#"<cit><bibl default="false">Od. 4.66</bibl></cit>"#,
        Fragment { quote: "", attribute: None, inline: Some("Od. 4.66") },
    )]
    fn parses_fragments(#[case] cit: &str, #[case] expected: Fragment<'_>) {
        assert_eq!(Fragment::parse(cit), expected);
    }

    #[test]
    fn extracts_every_citation_in_order() {
        let lexicon = Lexicon::standard().unwrap();
        let sink = MemoryOutcomeLog::default();
        let extractor = Extractor::new(Resolver::new(&lexicon), &sink, PREFIX).with_filename("jebb.xml");
        let mut counter = CitationCounter::new();

        let records = extractor.extract(UNIT, 1, &mut counter).unwrap();

        let urns: Vec<&str> = records.iter().map(|record| record.urn.as_str()).collect();
        assert_eq!(
            urns,
            vec![
                format!("{PREFIX}:citations-1.0"),
                format!("{PREFIX}:citations-1.1"),
                format!("{PREFIX}:citations-1.2"),
            ]
        );
        assert_eq!(records[0].data.reference.as_deref(), Some("hom. il. 1.1"));
        assert_eq!(records[0].data.urn.as_deref(), Some("urn:cts:greekLit:tlg0012.tlg001.perseus-grc2:1.1"));
        assert_eq!(records[0].data.quote, "μῆνιν ἄειδε");
        assert_eq!(records[1].data.urn, None);
        assert_eq!(records[2].data.urn.as_deref(), Some("urn:cts:greekLit:tlg0012.tlg002.perseus-grc2:1.1"));
    }

    #[test]
    fn indices_keep_increasing_across_units_and_failures() {
        let lexicon = Lexicon::standard().unwrap();
        let sink = MemoryOutcomeLog::default();
        let extractor = Extractor::new(Resolver::new(&lexicon), &sink, PREFIX);
        let mut counter = CitationCounter::new();

        let first = extractor.extract(UNIT, 1, &mut counter).unwrap();
        let empty = extractor.extract("<p>no citations here</p>", 2, &mut counter).unwrap();
        let failing = extractor.extract("<cit><quote>x</quote><bibl>Grmbl. 9</bibl></cit>", 3, &mut counter).unwrap();
        let last = extractor.extract(UNIT, 4, &mut counter).unwrap();

        assert!(empty.is_empty());
        assert_eq!(failing[0].urn, format!("{PREFIX}:citations-3.3"));
        assert_eq!(last[0].urn, format!("{PREFIX}:citations-4.4"));
        assert_eq!(first.len() + failing.len() + last.len(), 7);
        assert_eq!(counter.count(), 7);
    }

    #[test]
    fn every_citation_is_recorded() {
        let lexicon = Lexicon::standard().unwrap();
        let sink = MemoryOutcomeLog::default();
        let extractor = Extractor::new(Resolver::new(&lexicon), &sink, PREFIX)
            .with_filename("jebb.xml")
            .with_context_bytes(16);
        let records = extractor.extract(UNIT, 1, &mut CitationCounter::new()).unwrap();

        let entries = sink.entries();
        assert_eq!(entries.len(), records.len());
        assert_eq!(sink.resolved().len(), 2);

        let failed = &sink.unresolved()[0];
        assert_eq!(failed.reference, "hrmrm. 3");
        assert_eq!(failed.urn, "");
        assert_eq!(failed.n_attrib, None);
        assert_eq!(failed.bibl.as_deref(), Some("Hrmrm. 3"));
        assert_eq!(failed.quote, "οὐ γάρ");
        assert_eq!(failed.filename.as_deref(), Some("jebb.xml"));
        assert_eq!(failed.doc_cit_urn, format!("{PREFIX}:citations-1.1"));
        assert_eq!(failed.xml_context, "<p>Cf. <cit>");

        let resolved = &entries[0];
        assert_eq!(resolved.n_attrib.as_deref(), Some("Hom. Il. 1.1"));
        assert_eq!(resolved.bibl.as_deref(), Some("Il. 1.1"));
        assert!(resolved.is_resolved());
    }

    #[test]
    fn a_citation_without_reference_is_still_recorded() {
        let lexicon = Lexicon::standard().unwrap();
        let sink = MemoryOutcomeLog::default();
        let extractor = Extractor::new(Resolver::new(&lexicon), &sink, PREFIX);
        let records = extractor.extract("<cit><quote>x</quote></cit>", 1, &mut CitationCounter::new()).unwrap();
        assert_eq!(records[0].data.reference, None);
        assert_eq!(records[0].data.urn, None);
        assert_eq!(sink.unresolved().len(), 1);
    }
}
