//! Reduction of eligible spans into a per-repository summary.

use tenure_core::RepoSummary;

/// Reduce a repository's eligible spans into its summary record.
///
/// An empty span list short-circuits to the all-zero summary — a repository
/// with no eligible contributors is a valid outcome, never a division
/// fault. Otherwise `smallest`/`largest` are the extremes, `mean` is the
/// truncating integer mean, and `middle` is the element at index
/// `count / 2` of the ascending sort: the true middle for odd counts, the
/// upper-middle (not an average) for even counts. Both definitions are
/// pinned for report compatibility.
///
/// # Examples
///
/// ```
/// use tenure_spans::stats::summarize;
///
/// let summary = summarize("widget", &[1, 2, 4]);
/// assert_eq!(summary.authors, 3);
/// assert_eq!(summary.middle, 2);
/// assert_eq!(summary.mean, 2); // 7 / 3, truncated
/// ```
pub fn summarize(name: &str, spans: &[i64]) -> RepoSummary {
    if spans.is_empty() {
        return RepoSummary::empty(name);
    }

    let mut sorted = spans.to_vec();
    sorted.sort_unstable();

    let count = sorted.len();
    let sum: i64 = sorted.iter().sum();

    RepoSummary {
        name: name.to_string(),
        authors: count,
        smallest: sorted[0],
        middle: sorted[count / 2],
        largest: sorted[count - 1],
        mean: sum / count as i64,
    }
}
