//! CSV loading with an explicit set of leading records to discard.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::error::TallyError;
use super::table::Table;

/// Record indices (0-based) to discard before the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRows {
    indices: BTreeSet<usize>,
}

impl SkipRows {
    /// Keep every record; the first one is the header.
    pub fn none() -> Self {
        Self::default()
    }

    /// Layout of an ERPNext "Data Export" CSV.
    ///
    /// Records 0–14 are the export preamble, record 15 holds the field names
    /// and records 16–19 are label/type/option description rows.
    pub fn data_export() -> Self {
        Self::indices((0..15).chain(16..20))
    }

    /// Skip exactly the given record indices.
    pub fn indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// True if record `index` is discarded.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

/// Parse CSV bytes into a [`Table`].
///
/// Records listed in `skip` are discarded; the first remaining record is the
/// header and its cells are trimmed. Fails with
/// [`TallyError::MalformedInput`] when no usable header row exists.
pub fn load(bytes: &[u8], skip: &SkipRows) -> Result<Table, TallyError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if skip.contains(index) {
            continue;
        }
        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        if header.is_none() {
            if cells.iter().all(|c| c.trim().is_empty()) {
                return Err(TallyError::malformed(format!(
                    "header row (record {index}) has no column names"
                )));
            }
            header = Some(cells);
        } else {
            rows.push(cells);
        }
    }

    let header = header.ok_or_else(|| TallyError::malformed("no header row found"))?;
    tracing::debug!(
        columns = header.len(),
        rows = rows.len(),
        "loaded CSV table"
    );
    Ok(Table::new(header, rows))
}
