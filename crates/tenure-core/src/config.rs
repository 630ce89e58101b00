use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TenureError;

/// Top-level configuration loaded from `.tenure.toml`.
///
/// Supports layered resolution: CLI flags > local config > defaults.
///
/// # Examples
///
/// ```
/// use tenure_core::TenureConfig;
///
/// let config = TenureConfig::default();
/// assert!(config.scan.workers.is_none());
/// assert!(config.scan.branch.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenureConfig {
    /// Repository scanning settings.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl TenureConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TenureError::Io`] if the file cannot be read, or
    /// [`TenureError::Toml`] if the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tenure_core::TenureConfig;
    /// use std::path::Path;
    ///
    /// let config = TenureConfig::from_file(Path::new(".tenure.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, TenureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`TenureError::Toml`] if parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenure_core::TenureConfig;
    ///
    /// let toml = r#"
    /// [scan]
    /// workers = 4
    /// "#;
    /// let config = TenureConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.scan.workers, Some(4));
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, TenureError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// Repository scanning configuration.
///
/// # Examples
///
/// ```
/// use tenure_core::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert!(config.workers.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Worker pool size. When unset, sized from the processor count with
    /// two processors of headroom left for the host.
    pub workers: Option<usize>,
    /// Branch to walk instead of HEAD.
    pub branch: Option<String>,
}

/// Report output configuration.
///
/// # Examples
///
/// ```
/// use tenure_core::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert!(config.output.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default CSV output path when no `--output` flag is given.
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = TenureConfig::default();
        assert!(config.scan.workers.is_none());
        assert!(config.scan.branch.is_none());
        assert!(config.report.output.is_none());
    }

    #[test]
    fn parse_minimal_toml() {
        let toml = r#"
[scan]
workers = 8
"#;
        let config = TenureConfig::from_toml(toml).unwrap();
        assert_eq!(config.scan.workers, Some(8));
        assert!(config.scan.branch.is_none());
    }

    #[test]
    fn parse_full_toml() {
        let toml = r#"
[scan]
workers = 2
branch = "main"

[report]
output = "out/tenure.csv"
"#;
        let config = TenureConfig::from_toml(toml).unwrap();
        assert_eq!(config.scan.workers, Some(2));
        assert_eq!(config.scan.branch.as_deref(), Some("main"));
        assert_eq!(
            config.report.output.as_deref(),
            Some(Path::new("out/tenure.csv"))
        );
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = TenureConfig::from_toml("").unwrap();
        assert!(config.scan.workers.is_none());
        assert!(config.report.output.is_none());
    }

    #[test]
    fn invalid_toml_returns_error() {
        let result = TenureConfig::from_toml("{{invalid}}");
        assert!(result.is_err());
    }
}
