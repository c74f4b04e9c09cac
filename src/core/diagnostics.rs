use serde::Serialize;

/// A row-level problem absorbed during a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowIssue {
    /// The row's primary identifier column was absent; no record emitted.
    MissingIdentifier { row: usize, column: String },
    /// A date field did not match `DD-MM-YYYY`; an empty value was emitted.
    DateFormat {
        row: usize,
        column: String,
        value: String,
    },
    /// A keyless row appeared before any group leader and was dropped.
    Orphan { row: usize },
}

impl RowIssue {
    /// 0-based table index of the affected row.
    pub fn row(&self) -> usize {
        match self {
            Self::MissingIdentifier { row, .. } | Self::DateFormat { row, .. } | Self::Orphan { row } => {
                *row
            }
        }
    }

    /// True if the row produced no record at all.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::MissingIdentifier { .. } | Self::Orphan { .. })
    }
}

/// Report of what a conversion silently skipped or defaulted.
///
/// Collecting it never changes the output bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    issues: Vec<RowIssue>,
}

impl Diagnostics {
    pub fn push(&mut self, issue: RowIssue) {
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[RowIssue] {
        &self.issues
    }

    /// Indices of rows that produced no record, in table order.
    pub fn skipped_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self
            .issues
            .iter()
            .filter(|i| i.is_skip())
            .map(RowIssue::row)
            .collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    /// True if nothing was skipped or defaulted because of bad data.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
