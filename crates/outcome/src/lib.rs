mod entry;
pub mod error;
mod jsonl;
#[cfg(any(test, feature = "mock"))]
mod memory;

pub use crate::entry::OutcomeEntry;
pub use crate::jsonl::JsonlOutcomeLog;
#[cfg(any(test, feature = "mock"))]
pub use crate::memory::MemoryOutcomeLog;

/// Destination for per-citation outcomes.
///
/// Implementations take `&self` so one sink can be shared by every document
/// of a run.
pub trait OutcomeSink {
    fn record(&self, entry: &OutcomeEntry) -> error::Result<()>;
}

impl<T: OutcomeSink + ?Sized> OutcomeSink for &T {
    fn record(&self, entry: &OutcomeEntry) -> error::Result<()> {
        (**self).record(entry)
    }
}
