//! Concurrency-safe store of per-repository summaries.

use std::collections::HashMap;
use std::sync::Mutex;

use tenure_core::RepoSummary;

/// Collects one [`RepoSummary`] per repository from concurrent workers.
///
/// The contract is narrow: `insert` from N workers analyzing distinct
/// repositories, then read after every worker has joined. Inserting the
/// same name twice is last-writer-wins (it cannot happen in normal
/// operation, since the queue hands out each path once); inserts of
/// distinct names are always lossless.
///
/// # Examples
///
/// ```
/// use tenure_core::RepoSummary;
/// use tenure_pool::ResultSink;
///
/// let sink = ResultSink::new();
/// sink.insert(RepoSummary::empty("widget"));
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ResultSink {
    summaries: Mutex<HashMap<String, RepoSummary>>,
}

impl ResultSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one repository's summary.
    pub fn insert(&self, summary: RepoSummary) {
        let mut summaries = self.summaries.lock().expect("sink lock poisoned");
        summaries.insert(summary.name.clone(), summary);
    }

    /// Number of summaries stored so far.
    pub fn len(&self) -> usize {
        self.summaries.lock().expect("sink lock poisoned").len()
    }

    /// Whether no summaries have been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the sink and return every stored summary, in no particular
    /// order. Call after the pool has joined.
    pub fn into_summaries(self) -> Vec<RepoSummary> {
        self.summaries
            .into_inner()
            .expect("sink lock poisoned")
            .into_values()
            .collect()
    }
}
