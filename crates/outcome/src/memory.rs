//! In-memory outcome log for testing.

use std::sync::{Mutex, PoisonError};

use crate::OutcomeSink;
use crate::entry::OutcomeEntry;
use crate::error::Result;

/// Keeps every recorded entry in order, behind a [`Mutex`] so it can be used
/// through `&self`.
#[derive(Debug, Default)]
pub struct MemoryOutcomeLog {
    entries: Mutex<Vec<OutcomeEntry>>,
}

impl MemoryOutcomeLog {
    pub fn entries(&self) -> Vec<OutcomeEntry> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn resolved(&self) -> Vec<OutcomeEntry> {
        self.entries().into_iter().filter(OutcomeEntry::is_resolved).collect()
    }

    pub fn unresolved(&self) -> Vec<OutcomeEntry> {
        self.entries().into_iter().filter(|entry| !entry.is_resolved()).collect()
    }
}

impl OutcomeSink for MemoryOutcomeLog {
    fn record(&self, entry: &OutcomeEntry) -> Result<()> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_by_resolution() {
        let log = MemoryOutcomeLog::default();
        let resolved = OutcomeEntry { urn: "urn:x".to_string(), ..Default::default() };
        log.record(&resolved).unwrap();
        log.record(&OutcomeEntry::default()).unwrap();
        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.resolved(), vec![resolved]);
        assert_eq!(log.unresolved().len(), 1);
    }
}
