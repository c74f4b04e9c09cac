//! The tabular-to-document mapper: table model, CSV loading, field
//! resolution, node templates, grouping policies and the Tally envelope.
//!
//! Nothing in this module touches the filesystem. A conversion is a pure
//! pass from a [`Table`] to a [`Document`]; see [`crate::documents`] for the
//! per-type mapping tables built on top of it.

mod config;
mod diagnostics;
mod envelope;
mod error;
mod field;
mod ids;
mod kind;
mod loader;
mod node;
mod policy;
mod table;
mod template;

pub use config::*;
pub use diagnostics::*;
pub use envelope::*;
pub use error::*;
pub use field::*;
pub use ids::*;
pub use kind::*;
pub use loader::*;
pub use node::*;
pub use policy::*;
pub use table::*;
pub use template::*;
