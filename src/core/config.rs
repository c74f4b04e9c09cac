use serde::{Deserialize, Serialize};

use super::kind::DocumentKind;
use super::loader::SkipRows;

/// Company name stamped into `SVCURRENTCOMPANY` and buyer fields.
pub const DEFAULT_COMPANY: &str = "Techsolvo";

/// Settings shared by every conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Target company in Tally.
    pub company: String,
    /// Records to discard before the header. `None` uses the layout the
    /// document type expects.
    pub skip_rows: Option<SkipRows>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            company: DEFAULT_COMPANY.into(),
            skip_rows: None,
        }
    }
}

impl ConversionConfig {
    /// The skip policy for `kind`: the override if set, otherwise no skipped
    /// rows for the chart of accounts and the ERPNext data-export layout for
    /// everything else.
    pub fn skip_rows_for(&self, kind: DocumentKind) -> SkipRows {
        match &self.skip_rows {
            Some(skip) => skip.clone(),
            None if kind == DocumentKind::ChartOfAccounts => SkipRows::none(),
            None => SkipRows::data_export(),
        }
    }
}

/// Builder for [`ConversionConfig`].
///
/// # Example
///
/// ```
/// use tally_import::core::{ConversionConfigBuilder, SkipRows};
///
/// let config = ConversionConfigBuilder::new()
///     .company("Acme Traders")
///     .skip_rows(SkipRows::none())
///     .build();
/// assert_eq!(config.company, "Acme Traders");
/// ```
#[derive(Debug, Default)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target company name.
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.config.company = company.into();
        self
    }

    /// Override the per-type skip policy for every document type.
    pub fn skip_rows(mut self, skip: SkipRows) -> Self {
        self.config.skip_rows = Some(skip);
        self
    }

    pub fn build(self) -> ConversionConfig {
        self.config
    }
}
