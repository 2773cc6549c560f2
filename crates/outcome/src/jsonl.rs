//! Outcome logs as JSON Lines files.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};

use exn::ResultExt;
use tracing::instrument;

use crate::OutcomeSink;
use crate::entry::OutcomeEntry;
use crate::error::{ErrorKind, Result};

/// Appends every entry as one line of JSON, resolved citations to one file
/// and unresolved ones to the other.
///
/// Files are opened in append mode for each entry, so entries already written
/// survive a crash mid-run and several runs can share the same logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonlOutcomeLog {
    resolved: PathBuf,
    unresolved: PathBuf,
}

impl JsonlOutcomeLog {
    pub fn new(resolved: impl Into<PathBuf>, unresolved: impl Into<PathBuf>) -> Self {
        Self {
            resolved: resolved.into(),
            unresolved: unresolved.into(),
        }
    }

    pub fn resolved_path(&self) -> &Path {
        &self.resolved
    }

    pub fn unresolved_path(&self) -> &Path {
        &self.unresolved
    }

    /// Deletes both logs, for a run that should start from empty files.
    /// Missing files are not an error.
    #[instrument(skip(self), fields(resolved = %self.resolved.display(), unresolved = %self.unresolved.display()))]
    pub fn reset(&self) -> Result<()> {
        for path in [&self.resolved, &self.unresolved] {
            match fs::remove_file(path) {
                Ok(()) => tracing::debug!(path = %path.display(), "removed outcome log"),
                Err(err) if err.kind() == IoErrorKind::NotFound => {},
                Err(err) => return Err(err).or_raise(|| ErrorKind::Remove(path.clone())),
            }
        }
        Ok(())
    }

    fn path_for(&self, entry: &OutcomeEntry) -> &Path {
        if entry.is_resolved() { &self.resolved } else { &self.unresolved }
    }
}

impl OutcomeSink for JsonlOutcomeLog {
    #[instrument(level = "trace", skip_all, fields(doc_cit_urn = %entry.doc_cit_urn))]
    fn record(&self, entry: &OutcomeEntry) -> Result<()> {
        let path = self.path_for(entry);
        let mut line = serde_json::to_vec(entry).or_raise(|| ErrorKind::Serialize)?;
        line.push(b'\n');
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).or_raise(|| ErrorKind::Open(path.to_path_buf()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .or_raise(|| ErrorKind::Open(path.to_path_buf()))?;
        file.write_all(&line).or_raise(|| ErrorKind::Write(path.to_path_buf()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn entry(urn: &str, doc_cit_urn: &str) -> OutcomeEntry {
        OutcomeEntry {
            reference: "hom. od. 4.66".to_string(),
            urn: urn.to_string(),
            doc_cit_urn: doc_cit_urn.to_string(),
            ..Default::default()
        }
    }

    fn read_lines(path: &Path) -> Vec<OutcomeEntry> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn log_in(dir: &Path) -> JsonlOutcomeLog {
        JsonlOutcomeLog::new(dir.join("resolved.jsonl"), dir.join("unresolved.jsonl"))
    }

    #[rstest]
    #[case::resolved(&["urn:cts:greekLit:tlg0012.tlg002.perseus-grc2:4.66"], 1, 0)]
    #[case::unresolved(&[""], 0, 1)]
    #[case::mixed(&["urn:x", "", "urn:y", ""], 2, 2)]
    fn routes_entries_by_resolution(#[case] urns: &[&str], #[case] resolved: usize, #[case] unresolved: usize) {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(dir.path());
        let entries: Vec<OutcomeEntry> =
            urns.iter().enumerate().map(|(index, urn)| entry(urn, &format!("urn:x:citations-1.{index}"))).collect();
        for entry in &entries {
            log.record(entry).unwrap();
        }

        let count = |path: &Path| if path.exists() { read_lines(path).len() } else { 0 };
        assert_eq!(count(log.resolved_path()), resolved);
        assert_eq!(count(log.unresolved_path()), unresolved);
        if resolved > 0 {
            let expected: Vec<OutcomeEntry> = entries.iter().filter(|e| e.is_resolved()).cloned().collect();
            assert_eq!(read_lines(log.resolved_path()), expected);
        }
    }

    #[test]
    fn appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let paths = (dir.path().join("ok.jsonl"), dir.path().join("fail.jsonl"));
        JsonlOutcomeLog::new(&paths.0, &paths.1).record(&entry("", "a")).unwrap();
        JsonlOutcomeLog::new(&paths.0, &paths.1).record(&entry("", "b")).unwrap();
        let docs: Vec<String> = read_lines(&paths.1).into_iter().map(|e| e.doc_cit_urn).collect();
        assert_eq!(docs, vec!["a", "b"]);
        assert!(!paths.0.exists());
    }

    #[test]
    fn uses_the_wire_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlOutcomeLog::new(dir.path().join("ok.jsonl"), dir.path().join("fail.jsonl"));
        log.record(&entry("", "urn:x:citations-1.1")).unwrap();
        let line = fs::read_to_string(log.unresolved_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["ref"], "hom. od. 4.66");
        assert_eq!(value["urn"], "");
        assert!(value["n_attrib"].is_null());
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlOutcomeLog::new(dir.path().join("logs/ok.jsonl"), dir.path().join("logs/fail.jsonl"));
        log.record(&entry("urn:x", "a")).unwrap();
        assert!(log.resolved_path().exists());
    }

    #[rstest]
    #[case::both_logs(&["urn:x", ""])]
    #[case::one_log(&["urn:x"])]
    #[case::no_logs(&[])]
    fn reset_removes_existing_logs(#[case] urns: &[&str]) {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(dir.path());
        for urn in urns {
            log.record(&entry(urn, "a")).unwrap();
        }
        log.reset().unwrap();
        assert!(!log.resolved_path().exists());
        assert!(!log.unresolved_path().exists());
    }
}
