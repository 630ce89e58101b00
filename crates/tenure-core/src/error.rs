use std::path::PathBuf;

/// Errors that can occur across the tenure workspace.
///
/// Each variant wraps a specific error domain. Library crates use this type
/// directly; the binary crate converts to a `miette` diagnostic at the
/// boundary.
///
/// # Examples
///
/// ```
/// use tenure_core::TenureError;
///
/// let err = TenureError::Config("workers must be at least 1".into());
/// assert!(err.to_string().contains("workers"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TenureError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Git operation failure while walking an open repository.
    #[error("git error: {0}")]
    Git(String),

    /// The history backend cannot open or read a repository at all.
    ///
    /// Recovered at worker granularity: the repository is skipped and is
    /// absent from the final report, which keeps it distinguishable from a
    /// readable repository with no eligible contributors (reported with
    /// all-zero statistics).
    #[error("repository unreadable: {}: {reason}", path.display())]
    RepositoryUnreadable {
        /// Location of the repository that could not be opened.
        path: PathBuf,
        /// Backend message describing the failure.
        reason: String,
    },

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TenureError = io_err.into();
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = TenureError::Config("bad value".into());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn unreadable_shows_path_and_reason() {
        let err = TenureError::RepositoryUnreadable {
            path: PathBuf::from("/repos/broken"),
            reason: "could not find repository".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/repos/broken"));
        assert!(msg.contains("could not find repository"));
    }
}
