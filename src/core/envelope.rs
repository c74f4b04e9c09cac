//! The fixed Tally import scaffold around the generated records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::escape;
use super::kind::DocumentKind;
use super::node::{Document, Node};

/// Tally report a document imports into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportName {
    AllMasters,
    Vouchers,
}

impl ReportName {
    pub fn for_kind(kind: DocumentKind) -> Self {
        if kind.is_master() {
            Self::AllMasters
        } else {
            Self::Vouchers
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllMasters => "All Masters",
            Self::Vouchers => "Vouchers",
        }
    }
}

impl fmt::Display for ReportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `TALLYMESSAGE` wrapper holding `records`.
pub fn message(records: impl IntoIterator<Item = Node>) -> Node {
    records
        .into_iter()
        .fold(Node::new("TALLYMESSAGE").with_attr("xmlns:UDF", "TallyUDF"), Node::with_child)
}

/// Wrap `messages` in `ENVELOPE/HEADER` and `ENVELOPE/BODY/IMPORTDATA`.
///
/// `company` is raw text and is escaped here.
pub fn assemble(report: ReportName, company: &str, messages: Vec<Node>) -> Document {
    let header = Node::new("HEADER").with_child(Node::with_text("TALLYREQUEST", "Import Data"));

    let request_desc = Node::new("REQUESTDESC")
        .with_child(Node::with_text("REPORTNAME", report.as_str()))
        .with_child(
            Node::new("STATICVARIABLES")
                .with_child(Node::with_text("SVCURRENTCOMPANY", escape(company))),
        );

    let request_data = messages
        .into_iter()
        .fold(Node::new("REQUESTDATA"), Node::with_child);

    let body = Node::new("BODY").with_child(
        Node::new("IMPORTDATA")
            .with_child(request_desc)
            .with_child(request_data),
    );

    Document {
        root: Node::new("ENVELOPE").with_child(header).with_child(body),
    }
}
