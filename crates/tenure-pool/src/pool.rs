//! Fixed-size worker pool over the work queue.

use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};

use tenure_core::{RepoSummary, Result};

use crate::queue::WorkQueue;
use crate::sink::ResultSink;

/// Default pool size: the processor count minus two, clamped to at least
/// one — the headroom deliberately leaves the host machine responsive.
///
/// # Examples
///
/// ```
/// use tenure_pool::default_workers;
///
/// assert!(default_workers() >= 1);
/// ```
pub fn default_workers() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    cpus.saturating_sub(2).max(1)
}

/// What the pool did with the queue: how many repositories produced a
/// summary, and which were skipped with why.
///
/// Skipped repositories are absent from the sink — never inserted as
/// zero-filled placeholders, so "unreadable" stays distinguishable from
/// "readable with no eligible contributors".
#[derive(Debug, Default)]
pub struct PoolReport {
    /// Repositories whose summary reached the sink.
    pub analyzed: usize,
    /// Repositories skipped after a failure, with the failure message.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Drain `queue` with exactly `workers` OS threads, depositing one summary
/// per successfully analyzed repository into `sink`.
///
/// Each worker loops pop → analyze → insert until the queue is exhausted,
/// which always happens in finite time because nothing is enqueued after
/// the initial load. The call blocks until every worker has returned; no
/// partial results are visible through the returned report before that,
/// though the sink itself tolerates concurrent inspection.
///
/// A failed analysis is contained at worker granularity: the error (or a
/// caught panic) is recorded in the report and the worker moves on to the
/// next path. Sibling workers are never affected.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tenure_core::RepoSummary;
/// use tenure_pool::{run, ResultSink, WorkQueue};
///
/// let queue = WorkQueue::load(vec![PathBuf::from("a"), PathBuf::from("b")]);
/// let sink = ResultSink::new();
/// let report = run(&queue, &sink, 2, |path| {
///     Ok(RepoSummary::empty(&path.display().to_string()))
/// });
/// assert_eq!(report.analyzed, 2);
/// assert_eq!(sink.len(), 2);
/// ```
pub fn run<F>(queue: &WorkQueue, sink: &ResultSink, workers: usize, analyze: F) -> PoolReport
where
    F: Fn(&Path) -> Result<RepoSummary> + Sync,
{
    let workers = workers.max(1);
    let analyze = &analyze;

    let worker_reports: Vec<PoolReport> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let queue = queue.clone();
                scope.spawn(move || {
                    let mut report = PoolReport::default();
                    while let Some(path) = queue.pop() {
                        let outcome =
                            std::panic::catch_unwind(AssertUnwindSafe(|| analyze(&path)));
                        match outcome {
                            Ok(Ok(summary)) => {
                                sink.insert(summary);
                                report.analyzed += 1;
                            }
                            Ok(Err(err)) => {
                                report.skipped.push((path, err.to_string()));
                            }
                            Err(_) => {
                                report.skipped.push((path, "analysis panicked".into()));
                            }
                        }
                    }
                    report
                })
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .collect()
    });

    let mut merged = PoolReport::default();
    for report in worker_reports {
        merged.analyzed += report.analyzed;
        merged.skipped.extend(report.skipped);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tenure_core::TenureError;

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("repo-{i}"))).collect()
    }

    fn name_of(path: &Path) -> String {
        path.display().to_string()
    }

    #[test]
    fn every_path_lands_in_the_sink_exactly_once() {
        let queue = WorkQueue::load(paths(50));
        let sink = ResultSink::new();

        let report = run(&queue, &sink, 8, |path| {
            Ok(RepoSummary::empty(&name_of(path)))
        });

        assert_eq!(report.analyzed, 50);
        assert!(report.skipped.is_empty());

        let names: HashSet<String> = sink
            .into_summaries()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names.len(), 50, "no summary missing or duplicated");
    }

    #[test]
    fn more_workers_than_paths_still_terminates() {
        let queue = WorkQueue::load(paths(3));
        let sink = ResultSink::new();
        let report = run(&queue, &sink, 16, |path| {
            Ok(RepoSummary::empty(&name_of(path)))
        });
        assert_eq!(report.analyzed, 3);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn failing_repository_is_skipped_not_fatal() {
        let queue = WorkQueue::load(paths(10));
        let sink = ResultSink::new();

        let report = run(&queue, &sink, 4, |path| {
            if path == Path::new("repo-3") {
                Err(TenureError::RepositoryUnreadable {
                    path: path.to_path_buf(),
                    reason: "corrupt".into(),
                })
            } else {
                Ok(RepoSummary::empty(&name_of(path)))
            }
        });

        assert_eq!(report.analyzed, 9);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, PathBuf::from("repo-3"));
        assert_eq!(sink.len(), 9, "failed repo is absent, not zero-filled");
    }

    #[test]
    fn panicking_analysis_does_not_take_down_siblings() {
        let queue = WorkQueue::load(paths(20));
        let sink = ResultSink::new();

        let report = run(&queue, &sink, 4, |path| {
            if path == Path::new("repo-7") {
                panic!("boom");
            }
            Ok(RepoSummary::empty(&name_of(path)))
        });

        assert_eq!(report.analyzed, 19);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].1, "analysis panicked");
        assert_eq!(sink.len(), 19);
    }

    #[test]
    fn empty_queue_returns_immediately() {
        let queue = WorkQueue::load(Vec::new());
        let sink = ResultSink::new();
        let report = run(&queue, &sink, 4, |path| {
            Ok(RepoSummary::empty(&name_of(path)))
        });
        assert_eq!(report.analyzed, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn default_workers_is_at_least_one() {
        assert!(default_workers() >= 1);
    }

    #[test]
    fn zero_workers_is_clamped_to_one() {
        let queue = WorkQueue::load(paths(2));
        let sink = ResultSink::new();
        let report = run(&queue, &sink, 0, |path| {
            Ok(RepoSummary::empty(&name_of(path)))
        });
        assert_eq!(report.analyzed, 2);
    }

    #[test]
    fn repeated_runs_are_consistent_across_interleavings() {
        for _ in 0..10 {
            let queue = WorkQueue::load(paths(50));
            let sink = ResultSink::new();
            run(&queue, &sink, 8, |path| {
                Ok(RepoSummary::empty(&name_of(path)))
            });
            assert_eq!(sink.len(), 50);
        }
    }
}
