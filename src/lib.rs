//! # tally-import
//!
//! Converts ERPNext CSV exports (chart of accounts, customers, items,
//! journal entries, payments, purchase and sales orders) into Tally ERP9
//! XML import documents.
//!
//! Every document type is a declarative mapping table applied by one
//! generic tree builder. Conversions are pure: rows go in, a
//! [`Document`](core::Document) and a [`Diagnostics`](core::Diagnostics)
//! report come out. Storage is a separate concern behind the
//! [`storage::InputSource`] and [`storage::OutputSink`] traits.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_import::core::*;
//! use tally_import::documents::convert_table;
//!
//! let table = Table::new(
//!     ["customer_name", "email_id", "country"],
//!     vec![vec!["Acme & Sons", "ops@acme.test", "India"]],
//! );
//! let out = convert_table(
//!     DocumentKind::Customer,
//!     &table,
//!     &ConversionConfig::default(),
//!     &mut SequentialIds::new(),
//! )
//! .unwrap();
//!
//! assert!(out.xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
//! assert!(out.xml.contains("<LEDGER NAME=\"Acme &amp; Sons\""));
//! assert!(out.diagnostics.is_clean());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `fs` (default) | [`storage::SiteFiles`], a site-directory input source and output sink |
//! | `all` | Everything |

pub mod core;
pub mod documents;
pub mod storage;
pub mod xml;

// Re-export core types at crate root for convenience
pub use crate::core::*;
pub use crate::documents::{Conversion, convert, convert_table, map_table};
