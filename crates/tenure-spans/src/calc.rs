//! Per-contributor span calculation and eligibility.
//!
//! A contributor's span is the number of whole days between their earliest
//! and most recent authored change. Contributors whose changes all fall
//! within one day (including single-change contributors) have no measurable
//! tenure and are excluded; that floor is deliberate, not an approximation.

use std::collections::HashSet;

use crate::history::ChangeLog;

const SECONDS_PER_DAY: i64 = 86_400;

/// Compute the eligible contributor spans for one repository, in whole days.
///
/// One full scan collects the distinct author display names; for each name
/// the most recent change is the first hit of a newest-first traversal and
/// the earliest change is the first hit of an oldest-first traversal. When
/// several changes share an extremal timestamp, whichever is hit first is
/// taken; the span is the same either way. The span is
/// `(last - first) / 86400` with truncating integer division, and only
/// spans of at least one day are returned — one entry per qualifying
/// contributor, duplicate values allowed.
///
/// Display names are compared verbatim: distinct identities sharing a name
/// merge into one contributor, and that behavior is part of the reported
/// statistics.
///
/// # Examples
///
/// ```
/// use tenure_spans::calc::eligible_spans;
/// use tenure_spans::history::{Change, ChangeLog};
///
/// let log = ChangeLog::from_changes(vec![
///     Change { author: "alice".into(), timestamp: 0 },
///     Change { author: "alice".into(), timestamp: 86_400 * 3 },
///     Change { author: "bob".into(), timestamp: 1_000 },
/// ]);
/// let mut spans = eligible_spans(&log);
/// spans.sort_unstable();
/// assert_eq!(spans, vec![3]); // bob has a single change, no tenure
/// ```
pub fn eligible_spans(history: &ChangeLog) -> Vec<i64> {
    let mut authors: HashSet<&str> = HashSet::new();
    for change in history.changes_newest_first() {
        authors.insert(change.author.as_str());
    }

    let mut spans = Vec::new();
    for author in authors {
        let last = history
            .changes_newest_first()
            .find(|c| c.author == author);
        let first = history
            .changes_oldest_first()
            .find(|c| c.author == author);

        // Both lookups hit: the author came out of this same history.
        if let (Some(last), Some(first)) = (last, first) {
            let span = (last.timestamp - first.timestamp) / SECONDS_PER_DAY;
            if span >= 1 {
                spans.push(span);
            }
        }
    }

    spans
}
