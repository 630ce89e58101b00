//! Git history extraction via git2.
//!
//! Reads a repository's commit history into a [`ChangeLog`], one [`Change`]
//! per commit carrying the author display name and the author timestamp in
//! epoch seconds. The rest of the crate only ever consumes a `ChangeLog`,
//! so tests can build synthetic histories without touching git.

use std::path::Path;

use git2::{ErrorCode, Repository, Sort};
use tenure_core::TenureError;

/// One recorded, author-attributed change in a repository's history.
///
/// Constructed only from the history backend (or test fixtures), never by
/// the span calculator.
///
/// # Examples
///
/// ```
/// use tenure_spans::history::Change;
///
/// let change = Change {
///     author: "alice".into(),
///     timestamp: 1_700_000_000,
/// };
/// assert_eq!(change.author, "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Author display name. Not normalized: two underlying identities with
    /// the same display name count as one contributor.
    pub author: String,
    /// Author timestamp in epoch seconds, offset normalized away.
    pub timestamp: i64,
}

/// A repository's full change history, held newest-first.
///
/// Both traversal directions are explicit so callers never have to assume
/// which way the backing store is ordered.
///
/// # Examples
///
/// ```
/// use tenure_spans::history::{Change, ChangeLog};
///
/// let log = ChangeLog::from_changes(vec![
///     Change { author: "bob".into(), timestamp: 100 },
///     Change { author: "alice".into(), timestamp: 200 },
/// ]);
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.changes_newest_first().next().unwrap().author, "alice");
/// assert_eq!(log.changes_oldest_first().next().unwrap().author, "bob");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    /// Changes sorted by timestamp, newest first.
    changes: Vec<Change>,
}

impl ChangeLog {
    /// Build a change log from unordered changes.
    ///
    /// Sorting is stable, so changes sharing a timestamp keep their input
    /// order; the span calculation is identical whichever of them is hit
    /// first at an extremal timestamp.
    pub fn from_changes(mut changes: Vec<Change>) -> Self {
        changes.sort_by_key(|c| std::cmp::Reverse(c.timestamp));
        Self { changes }
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether the history has no changes at all.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Traverse in reverse chronological order (newest first).
    pub fn changes_newest_first(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter()
    }

    /// Traverse in chronological order (oldest first).
    pub fn changes_oldest_first(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter().rev()
    }
}

/// Read the commit history of the repository at `path`.
///
/// Walks from HEAD (or `branch` when given) in time order and records one
/// change per commit. A repository with no commits yet yields an empty
/// change log rather than an error, so "readable but empty" stays
/// distinguishable from "unreadable".
///
/// # Errors
///
/// Returns [`TenureError::RepositoryUnreadable`] if the repository cannot
/// be opened or its requested branch cannot be resolved, and
/// [`TenureError::Git`] if the walk itself fails partway.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tenure_spans::history::read_history;
///
/// let log = read_history(Path::new("repos/widget"), None).unwrap();
/// println!("{} commits", log.len());
/// ```
pub fn read_history(path: &Path, branch: Option<&str>) -> Result<ChangeLog, TenureError> {
    let repo = Repository::open(path).map_err(|e| TenureError::RepositoryUnreadable {
        path: path.to_path_buf(),
        reason: e.message().to_string(),
    })?;

    let mut revwalk = repo
        .revwalk()
        .map_err(|e| TenureError::Git(format!("failed to create revwalk: {e}")))?;

    revwalk.set_sorting(Sort::TIME).ok();

    if let Some(branch) = branch {
        let reference = repo
            .resolve_reference_from_short_name(branch)
            .map_err(|e| TenureError::RepositoryUnreadable {
                path: path.to_path_buf(),
                reason: format!("failed to resolve branch '{branch}': {e}"),
            })?;
        let oid = reference
            .target()
            .ok_or_else(|| TenureError::RepositoryUnreadable {
                path: path.to_path_buf(),
                reason: format!("branch '{branch}' has no target"),
            })?;
        revwalk
            .push(oid)
            .map_err(|e| TenureError::Git(format!("failed to push oid: {e}")))?;
    } else if let Err(e) = revwalk.push_head() {
        // A freshly initialized repository has an unborn HEAD: readable,
        // just empty.
        // git2 0.19 reports the unresolvable HEAD of a fresh repository as
        // a generic reference lookup failure rather than `UnbornBranch`, so
        // also ask the repository directly whether it is empty.
        if e.code() == ErrorCode::UnbornBranch
            || e.code() == ErrorCode::NotFound
            || repo.is_empty().unwrap_or(false)
        {
            return Ok(ChangeLog::default());
        }
        return Err(TenureError::RepositoryUnreadable {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        });
    }

    let mut changes = Vec::new();
    for oid_result in revwalk {
        let oid = oid_result.map_err(|e| TenureError::Git(format!("revwalk error: {e}")))?;
        let commit = repo
            .find_commit(oid)
            .map_err(|e| TenureError::Git(format!("failed to find commit: {e}")))?;

        let author = commit.author();
        changes.push(Change {
            author: author.name().unwrap_or("unknown").to_string(),
            timestamp: author.when().seconds(),
        });
    }

    Ok(ChangeLog::from_changes(changes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(author: &str, timestamp: i64) -> Change {
        Change {
            author: author.into(),
            timestamp,
        }
    }

    #[test]
    fn from_changes_orders_newest_first() {
        let log = ChangeLog::from_changes(vec![
            change("a", 50),
            change("b", 300),
            change("c", 100),
        ]);
        let stamps: Vec<i64> = log.changes_newest_first().map(|c| c.timestamp).collect();
        assert_eq!(stamps, vec![300, 100, 50]);
    }

    #[test]
    fn oldest_first_is_the_reverse_traversal() {
        let log = ChangeLog::from_changes(vec![change("a", 50), change("b", 300)]);
        let stamps: Vec<i64> = log.changes_oldest_first().map(|c| c.timestamp).collect();
        assert_eq!(stamps, vec![50, 300]);
    }

    #[test]
    fn empty_log_reports_empty() {
        let log = ChangeLog::default();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.changes_newest_first().next().is_none());
    }

    #[test]
    fn missing_repository_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_history(&dir.path().join("absent"), None).unwrap_err();
        assert!(matches!(
            err,
            TenureError::RepositoryUnreadable { .. }
        ));
    }

    #[test]
    fn initialized_but_empty_repository_yields_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let log = read_history(dir.path(), None).unwrap();
        assert!(log.is_empty());
    }
}
