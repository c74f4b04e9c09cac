//! XML serialization of [`Document`](crate::core::Document) trees and
//! re-parsing of generated output.

mod reader;
mod writer;

pub use reader::parse;
pub use writer::{XmlWriter, to_xml};
