use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use exn::{OptionExt, ResultExt};
use locus_config::Config;
use locus_extract::{CitationCounter, Extractor};
use locus_lexicon::Lexicon;
use locus_outcome::JsonlOutcomeLog;
use locus_resolve::{Context, Resolver};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

#[derive(Debug, Serialize)]
struct Resolution {
    #[serde(rename = "ref")]
    reference: Option<String>,
    urn: Option<String>,
}

pub(crate) struct ExtractOptions<'a> {
    pub input: &'a Path,
    pub prefix: &'a str,
    /// Empty the outcome logs before extracting.
    pub reset: bool,
}

/// Prints the chosen reference and its URN as one JSON object.
#[instrument(skip(lexicon, out))]
pub(crate) fn resolve(
    lexicon: &Lexicon,
    attribute: Option<&str>,
    inline: Option<&str>,
    out: &mut impl Write,
) -> Result<bool> {
    let resolver = Resolver::new(lexicon);
    let reference = resolver.resolve_reference(attribute, inline);
    let urn = match reference.as_deref() {
        Some(reference) => resolver.build_urn(reference, &Context::default()).or_raise(|| ErrorKind::Resolve)?,
        None => None,
    };
    let resolved = urn.is_some();
    write_line(out, &Resolution { reference, urn })?;
    Ok(resolved)
}

/// Prints the URN of `reference`, or nothing if it does not resolve.
#[instrument(skip(lexicon, out))]
pub(crate) fn urn(lexicon: &Lexicon, reference: &str, out: &mut impl Write) -> Result<bool> {
    let resolver = Resolver::new(lexicon);
    match resolver.build_urn(reference, &Context::default()).or_raise(|| ErrorKind::Resolve)? {
        Some(urn) => {
            writeln!(out, "{urn}").or_raise(|| ErrorKind::Write)?;
            Ok(true)
        },
        None => Ok(false),
    }
}

/// Copies every content unit of the input to `out` with a `citations` array
/// added. Units are numbered from 1 and share one citation counter.
#[instrument(skip_all, fields(input = %options.input.display(), prefix = options.prefix))]
pub(crate) fn extract(
    lexicon: &Lexicon,
    config: &Config,
    options: &ExtractOptions<'_>,
    out: &mut impl Write,
) -> Result<()> {
    let log = JsonlOutcomeLog::new(&config.outcomes.resolved, &config.outcomes.unresolved);
    if options.reset {
        log.reset().or_raise(|| ErrorKind::Reset)?;
    }
    let input = options.input;
    let reader = BufReader::new(File::open(input).or_raise(|| ErrorKind::Read(input.to_path_buf()))?);
    let default_filename = input.display().to_string();

    let mut counter = CitationCounter::new();
    let mut unit = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.or_raise(|| ErrorKind::Read(input.to_path_buf()))?;
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        unit += 1;
        let mut object: Map<String, Value> =
            serde_json::from_str(&line).or_raise(|| ErrorKind::InvalidUnit(line_number))?;
        let filename = object.get("filename").and_then(Value::as_str).unwrap_or(&default_filename).to_string();
        let content = object
            .get("content")
            .and_then(Value::as_str)
            .ok_or_raise(|| ErrorKind::InvalidUnit(line_number))?;

        let extractor = Extractor::new(Resolver::new(lexicon), &log, options.prefix)
            .with_filename(filename)
            .with_context_bytes(config.extract.context_bytes);
        let citations = extractor.extract(content, unit, &mut counter).or_raise(|| ErrorKind::Extract)?;
        let citations = serde_json::to_value(citations).or_raise(|| ErrorKind::Write)?;
        object.insert("citations".to_string(), citations);
        write_line(out, &object)?;
    }
    tracing::info!(units = unit, citations = counter.count(), "extracted citations");
    Ok(())
}

/// One JSON object per author: its abbreviations and title spellings.
pub(crate) fn title_forms(lexicon: &Lexicon, out: &mut impl Write) -> Result<()> {
    for forms in lexicon.title_forms() {
        write_line(out, &forms)?;
    }
    Ok(())
}

fn write_line(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer(&mut *out, value).or_raise(|| ErrorKind::Write)?;
    writeln!(out).or_raise(|| ErrorKind::Write)
}
