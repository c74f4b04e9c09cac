//! Input and output collaborators around a conversion.
//!
//! The mapper never touches storage itself. [`publish`] fetches the CSV
//! through an [`InputSource`], converts it and hands the XML to an
//! [`OutputSink`]. [`SiteFiles`] implements both over a site directory laid
//! out as `public/files` and `private/files`.

#[cfg(feature = "fs")]
mod site;

#[cfg(feature = "fs")]
pub use site::SiteFiles;

use crate::core::{ConversionConfig, Diagnostics, DocumentKind, IdSource, TallyError};
use crate::documents::convert;

/// Resolves an input reference (e.g. a file URL) to its bytes.
pub trait InputSource {
    fn fetch(&self, reference: &str) -> Result<Vec<u8>, TallyError>;
}

/// Stores a finished document under `name` and returns its URL.
pub trait OutputSink {
    fn persist(&self, bytes: &[u8], name: &str) -> Result<String, TallyError>;
}

/// Outcome of [`publish`].
#[derive(Debug, Clone)]
pub struct Published {
    /// Where the sink stored the document.
    pub url: String,
    pub file_name: String,
    pub diagnostics: Diagnostics,
}

/// Fetch, convert and persist one export.
///
/// Every failure is wrapped in [`TallyError::Conversion`] carrying `kind`
/// and `reference`.
pub fn publish(
    kind: DocumentKind,
    reference: &str,
    source: &dyn InputSource,
    sink: &dyn OutputSink,
    config: &ConversionConfig,
    ids: &mut dyn IdSource,
) -> Result<Published, TallyError> {
    fetch_convert_persist(kind, reference, source, sink, config, ids)
        .map_err(|e| e.in_conversion(kind, reference))
}

fn fetch_convert_persist(
    kind: DocumentKind,
    reference: &str,
    source: &dyn InputSource,
    sink: &dyn OutputSink,
    config: &ConversionConfig,
    ids: &mut dyn IdSource,
) -> Result<Published, TallyError> {
    let csv = source.fetch(reference)?;
    let conversion = convert(kind, &csv, config, ids)?;
    let url = sink.persist(conversion.xml.as_bytes(), &conversion.file_name)?;
    tracing::info!(
        kind = %kind,
        reference,
        url = %url,
        issues = conversion.diagnostics.issues().len(),
        "persisted Tally document"
    );
    Ok(Published {
        url,
        file_name: conversion.file_name,
        diagnostics: conversion.diagnostics,
    })
}
