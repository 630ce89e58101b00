use serde::{Deserialize, Serialize};

/// CSV header for tenure reports.
///
/// This column set and order is the durable output contract; any persisted
/// form of the report must preserve it exactly.
pub const CSV_HEADER: &str = "repo,authors,smallest,middle,largest,mean";

/// Summary statistics for one analyzed repository.
///
/// Produced once per repository by the aggregator and immutable thereafter.
/// `authors` counts the contributors whose tenure span was at least one
/// whole day; the four statistics are taken over exactly those spans. A
/// repository with no eligible contributors reports all four as zero.
///
/// # Examples
///
/// ```
/// use tenure_core::RepoSummary;
///
/// let summary = RepoSummary {
///     name: "widget".into(),
///     authors: 3,
///     smallest: 1,
///     middle: 14,
///     largest: 400,
///     mean: 138,
/// };
/// assert_eq!(summary.csv_row(), "widget,3,1,14,400,138");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSummary {
    /// Repository display name (the base name of its directory).
    pub name: String,
    /// Number of contributors with an eligible span.
    pub authors: usize,
    /// Shortest eligible span, in whole days.
    pub smallest: i64,
    /// Median eligible span: the upper-middle element for even counts.
    pub middle: i64,
    /// Longest eligible span, in whole days.
    pub largest: i64,
    /// Mean eligible span, truncated toward zero.
    pub mean: i64,
}

impl RepoSummary {
    /// A summary for a readable repository with no eligible contributors.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenure_core::RepoSummary;
    ///
    /// let summary = RepoSummary::empty("quiet");
    /// assert_eq!(summary.authors, 0);
    /// assert_eq!(summary.largest, 0);
    /// ```
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            authors: 0,
            smallest: 0,
            middle: 0,
            largest: 0,
            mean: 0,
        }
    }

    /// Render this summary as one CSV row matching [`CSV_HEADER`].
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            escape_field(&self.name),
            self.authors,
            self.smallest,
            self.middle,
            self.largest,
            self.mean,
        )
    }
}

/// Quote a field if it contains a comma, quote, or newline.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
