use serde::{Deserialize, Serialize};

/// Kinds of fallback substitution the cleaning pipeline can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// State code is non-empty but not in the reference set.
    InvalidState,
    /// A population count was missing or unparseable and became 0.0.
    ZeroFilledCount,
    /// The inspection date matched no recognized format.
    UnparseableDate,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::InvalidState => "invalid state code",
            IssueKind::ZeroFilledCount => "zero-filled count",
            IssueKind::UnparseableDate => "unparseable inspection date",
        }
    }
}

/// Aggregate count for one issue kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityIssue {
    pub kind: IssueKind,
    pub count: u64,
}

/// Data-quality report for one cleaning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityReport {
    /// Rows processed.
    pub rows: usize,
    /// Rows that required at least one fallback substitution.
    pub flagged_rows: usize,
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    pub fn issue_count(&self, kind: IssueKind) -> u64 {
        self.issues
            .iter()
            .filter(|issue| issue.kind == kind)
            .map(|issue| issue.count)
            .sum()
    }

    pub fn total_issue_count(&self) -> u64 {
        self.issues.iter().map(|issue| issue.count).sum()
    }

    pub fn has_issues(&self) -> bool {
        self.flagged_rows > 0
    }
}
