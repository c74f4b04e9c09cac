use thiserror::Error;

use super::kind::DocumentKind;

/// Errors that abort a whole conversion.
///
/// Row-level problems (blank identifiers, unparseable dates) are not errors;
/// they are recorded as [`RowIssue`](super::RowIssue) values in the
/// conversion's [`Diagnostics`](super::Diagnostics).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TallyError {
    /// The referenced input table could not be located.
    #[error("input not found: {reference}")]
    InputNotFound { reference: String },

    /// The input exists but could not be read.
    #[error("failed to read {reference}: {source}")]
    InputRead {
        reference: String,
        #[source]
        source: std::io::Error,
    },

    /// The input is not readable as a table with a usable header row.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// The serialized document could not be persisted.
    #[error("failed to write {file_name}: {source}")]
    OutputWrite {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// A document type name that no mapping table exists for.
    #[error("unknown document type: {0}")]
    UnknownDocumentKind(String),

    /// A fatal error annotated with the document type and input reference.
    #[error("{kind} conversion of {reference} failed: {source}")]
    Conversion {
        kind: DocumentKind,
        reference: String,
        #[source]
        source: Box<TallyError>,
    },
}

impl TallyError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Wrap this error with the document type and input reference.
    pub fn in_conversion(self, kind: DocumentKind, reference: impl Into<String>) -> Self {
        Self::Conversion {
            kind,
            reference: reference.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any [`TallyError::Conversion`] context.
    pub fn root(&self) -> &TallyError {
        match self {
            Self::Conversion { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = TallyError::InputNotFound {
            reference: "/files/coa.csv".into(),
        }
        .in_conversion(DocumentKind::ChartOfAccounts, "/files/coa.csv");
        assert_eq!(
            err.to_string(),
            "chart_of_accounts conversion of /files/coa.csv failed: input not found: /files/coa.csv"
        );
        assert!(matches!(err.root(), TallyError::InputNotFound { .. }));
    }

    #[test]
    fn root_of_plain_error_is_itself() {
        let err = TallyError::malformed("no header row");
        assert!(matches!(err.root(), TallyError::MalformedInput { .. }));
    }
}
