//! Contributor tenure extraction from git history.
//!
//! Walks a repository's commit history via git2, derives per-contributor
//! experience spans (whole days between a contributor's first and most
//! recent authored commit), filters out contributors with no measurable
//! tenure, and reduces the survivors into per-repository statistics.

pub mod calc;
pub mod history;
pub mod stats;

use std::path::Path;

use tenure_core::{RepoSummary, Result};

/// Analyze one repository end to end: open its history, compute the
/// eligible spans, and summarize them under the repository's display name.
///
/// # Errors
///
/// Returns [`TenureError::RepositoryUnreadable`] when the repository cannot
/// be opened or walked.
///
/// [`TenureError::RepositoryUnreadable`]: tenure_core::TenureError::RepositoryUnreadable
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tenure_spans::analyze_repository;
///
/// let summary = analyze_repository(Path::new("repos/widget"), None).unwrap();
/// println!("{}: {} eligible authors", summary.name, summary.authors);
/// ```
pub fn analyze_repository(path: &Path, branch: Option<&str>) -> Result<RepoSummary> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let history = history::read_history(path, branch)?;
    let spans = calc::eligible_spans(&history);
    Ok(stats::summarize(&name, &spans))
}
