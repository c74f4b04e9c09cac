//! Per-document mapping tables and the conversion entry points.
//!
//! Each ERPNext export type has one declarative [`DocumentSpec`]: which
//! column identifies a record, how rows group into records, and the node
//! templates emitted for each record. [`map_table`] applies a spec to a
//! [`Table`]; [`convert`] adds CSV loading and serialization.
//!
//! ```
//! use tally_import::core::{ConversionConfig, DocumentKind, SequentialIds};
//! use tally_import::documents::convert;
//!
//! let csv = b"Account Name,Parent Account,Is Group\nCash,,No\n";
//! let out = convert(
//!     DocumentKind::ChartOfAccounts,
//!     csv,
//!     &ConversionConfig::default(),
//!     &mut SequentialIds::new(),
//! )
//! .unwrap();
//! assert_eq!(out.document.records_named("GROUP").len(), 1);
//! assert!(out.file_name.starts_with("chart_of_accounts_output_"));
//! ```

mod coa;
mod customer;
mod item_master;
mod journal_entry;
mod payment_entry;
mod purchase_order;
mod sales_order;

use crate::core::{
    ConversionConfig, Diagnostics, Document, DocumentKind, FieldSpec, FirstSeen, IdSource, Node,
    NodeTemplate, ReportName, Row, RowIssue, Scope, TallyError, Table, assemble, group_by_leader,
    load, message,
};
use crate::xml::to_xml;

/// How table rows form records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// One record per row with a present identifier.
    PerRow,
    /// A row with a present identifier leads a record; the keyless rows
    /// after it are its followers.
    LeadingRow,
}

/// How emitted nodes are wrapped in `TALLYMESSAGE` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    /// One `TALLYMESSAGE` per emitted node.
    EachNode,
    /// A single `TALLYMESSAGE` holding every emitted node.
    Shared,
}

/// One node emitted per record.
#[derive(Debug, Clone)]
pub enum Emit {
    /// The record itself.
    Primary(NodeTemplate),
    /// A group record, emitted only the first time its key is seen.
    /// Records whose key resolves empty emit nothing.
    FirstSeen { key: FieldSpec, node: NodeTemplate },
}

/// Declarative mapping for one document type.
#[derive(Debug, Clone)]
pub struct DocumentSpec {
    pub kind: DocumentKind,
    pub report: ReportName,
    /// Column whose presence makes a row a record (or a group leader).
    pub identifier: &'static str,
    pub grouping: Grouping,
    pub wrapper: Wrapper,
    /// Emitted per record, in order.
    pub emits: Vec<Emit>,
}

impl DocumentSpec {
    pub(crate) fn new(kind: DocumentKind, identifier: &'static str) -> Self {
        Self {
            kind,
            report: ReportName::for_kind(kind),
            identifier,
            grouping: Grouping::PerRow,
            wrapper: Wrapper::EachNode,
            emits: Vec::new(),
        }
    }

    pub(crate) fn grouped(mut self) -> Self {
        self.grouping = Grouping::LeadingRow;
        self
    }

    pub(crate) fn shared_wrapper(mut self) -> Self {
        self.wrapper = Wrapper::Shared;
        self
    }

    pub(crate) fn first_seen(mut self, key: FieldSpec, node: NodeTemplate) -> Self {
        self.emits.push(Emit::FirstSeen { key, node });
        self
    }

    pub(crate) fn primary(mut self, node: NodeTemplate) -> Self {
        self.emits.push(Emit::Primary(node));
        self
    }
}

/// The mapping table for `kind`.
pub fn spec(kind: DocumentKind) -> DocumentSpec {
    match kind {
        DocumentKind::ChartOfAccounts => coa::spec(),
        DocumentKind::Customer => customer::spec(),
        DocumentKind::ItemMaster => item_master::spec(),
        DocumentKind::JournalEntry => journal_entry::spec(),
        DocumentKind::PaymentEntry => payment_entry::spec(),
        DocumentKind::PurchaseOrder => purchase_order::spec(),
        DocumentKind::SalesOrder => sales_order::spec(),
    }
}

/// Per-call mapping state. Dropped when the call returns.
struct Mapper<'s, 'i> {
    spec: &'s DocumentSpec,
    company: &'s str,
    ids: &'i mut dyn IdSource,
    seen: Vec<FirstSeen>,
    diag: Diagnostics,
    nodes: Vec<Node>,
}

impl<'s, 'i> Mapper<'s, 'i> {
    fn new(spec: &'s DocumentSpec, company: &'s str, ids: &'i mut dyn IdSource) -> Self {
        Self {
            spec,
            company,
            ids,
            seen: vec![FirstSeen::new(); spec.emits.len()],
            diag: Diagnostics::default(),
            nodes: Vec::new(),
        }
    }

    fn record<'a>(&mut self, leader: Row<'a>, rows: &[Row<'a>]) {
        let spec = self.spec;
        for (slot, emit) in spec.emits.iter().enumerate() {
            match emit {
                Emit::Primary(template) => self.build(template, leader, rows),
                Emit::FirstSeen { key, node } => {
                    let probe = Scope {
                        row: leader,
                        guid: "",
                        company: self.company,
                    };
                    let key = key.resolve(&probe, &mut self.diag);
                    if !key.is_empty() && self.seen[slot].first_sight(&key) {
                        self.build(node, leader, rows);
                    }
                }
            }
        }
    }

    fn build<'a>(&mut self, template: &NodeTemplate, leader: Row<'a>, rows: &[Row<'a>]) {
        let guid = self.ids.next_guid();
        let scope = Scope {
            row: leader,
            guid: &guid,
            company: self.company,
        };
        let built = template.build(&scope, rows, &mut self.diag);
        self.nodes.extend(built);
    }

    fn skip(&mut self, row: Row<'_>) {
        tracing::debug!(
            kind = %self.spec.kind,
            row = row.position(),
            column = self.spec.identifier,
            "skipping row without identifier"
        );
        self.diag.push(RowIssue::MissingIdentifier {
            row: row.index(),
            column: self.spec.identifier.to_string(),
        });
    }

    fn finish(self) -> (Document, Diagnostics) {
        let record_count = self.nodes.len();
        let messages = match self.spec.wrapper {
            Wrapper::EachNode => self
                .nodes
                .into_iter()
                .map(|node| message([node]))
                .collect(),
            Wrapper::Shared => vec![message(self.nodes)],
        };
        let document = assemble(self.spec.report, self.company, messages);
        tracing::info!(
            kind = %self.spec.kind,
            records = record_count,
            skipped = self.diag.skipped_rows().len(),
            "assembled Tally document"
        );
        (document, self.diag)
    }
}

/// Apply `spec` to `table`.
///
/// Never fails: rows without an identifier are skipped and malformed dates
/// are emitted empty, both recorded in the returned [`Diagnostics`].
pub fn map_spec(
    spec: &DocumentSpec,
    table: &Table,
    company: &str,
    ids: &mut dyn IdSource,
) -> (Document, Diagnostics) {
    let mut mapper = Mapper::new(spec, company, ids);
    match spec.grouping {
        Grouping::PerRow => {
            for row in table.rows() {
                if row.has(spec.identifier) {
                    mapper.record(row, &[row]);
                } else {
                    mapper.skip(row);
                }
            }
        }
        Grouping::LeadingRow => {
            let grouped = group_by_leader(table, spec.identifier);
            for index in grouped.orphans {
                mapper.diag.push(RowIssue::Orphan { row: index });
            }
            for group in &grouped.groups {
                mapper.record(group.leader, &group.rows());
            }
        }
    }
    mapper.finish()
}

/// Map `table` with the mapping table for `kind`.
pub fn map_table(
    kind: DocumentKind,
    table: &Table,
    config: &ConversionConfig,
    ids: &mut dyn IdSource,
) -> (Document, Diagnostics) {
    map_spec(&spec(kind), table, &config.company, ids)
}

/// Result of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub kind: DocumentKind,
    pub document: Document,
    /// Serialized XML, declaration included.
    pub xml: String,
    /// Suggested name: `{kind}_output_{8 hex}.xml`.
    pub file_name: String,
    pub diagnostics: Diagnostics,
}

/// Map and serialize an already loaded table.
pub fn convert_table(
    kind: DocumentKind,
    table: &Table,
    config: &ConversionConfig,
    ids: &mut dyn IdSource,
) -> Result<Conversion, TallyError> {
    let (document, diagnostics) = map_table(kind, table, config, ids);
    let xml = to_xml(&document)?;
    let file_name = format!("{}_output_{}.xml", kind.slug(), ids.file_tag());
    Ok(Conversion {
        kind,
        document,
        xml,
        file_name,
        diagnostics,
    })
}

/// Load CSV bytes with the skip policy for `kind`, then map and serialize.
pub fn convert(
    kind: DocumentKind,
    csv: &[u8],
    config: &ConversionConfig,
    ids: &mut dyn IdSource,
) -> Result<Conversion, TallyError> {
    let table = load(csv, &config.skip_rows_for(kind))?;
    convert_table(kind, &table, config, ids)
}

/// Placeholder run used to keep empty list elements from self-closing.
pub(crate) fn spaces(n: usize) -> &'static str {
    const RUN: &str = "                ";
    &RUN[..n.min(RUN.len())]
}

/// `LANGUAGENAME.LIST` carrying one name, optionally with a language id.
pub(crate) fn language_names(name: FieldSpec, language_id: Option<&'static str>) -> NodeTemplate {
    let list = NodeTemplate::new("LANGUAGENAME.LIST").child(
        NodeTemplate::new("NAME.LIST")
            .attr_literal("TYPE", "String")
            .field("NAME", name),
    );
    match language_id {
        Some(id) => list.literal("LANGUAGEID", id),
        None => list,
    }
}

/// `OLDAUDITENTRYIDS.LIST` carrying the row's audit id, `-1` when absent.
pub(crate) fn old_audit_ids() -> NodeTemplate {
    NodeTemplate::new("OLDAUDITENTRYIDS.LIST")
        .attr_literal("TYPE", "Number")
        .field("OLDAUDITENTRYIDS", FieldSpec::column("old_audit_entry_id").or("-1"))
}

/// Detail lists carried, empty, by every ledger posting of an order.
pub(crate) const POSTING_DETAIL_LISTS: &[&str] = &[
    "SERVICETAXDETAILS.LIST",
    "BANKALLOCATIONS.LIST",
    "BILLALLOCATIONS.LIST",
    "INTERESTCOLLECTION.LIST",
    "OLDAUDITENTRIES.LIST",
    "ACCOUNTAUDITENTRIES.LIST",
    "AUDITENTRIES.LIST",
    "INPUTCRALLOCS.LIST",
    "DUTYHEADDETAILS.LIST",
    "EXCISEDUTYHEADDETAILS.LIST",
    "RATEDETAILS.LIST",
    "SUMMARYALLOCS.LIST",
    "STPYMTDETAILS.LIST",
    "EXCISEPAYMENTALLOCATIONS.LIST",
    "TAXBILLALLOCATIONS.LIST",
    "TAXOBJECTALLOCATIONS.LIST",
    "TDSEXPENSEALLOCATIONS.LIST",
    "VATSTATUTORYDETAILS.LIST",
    "COSTTRACKALLOCATIONS.LIST",
    "REFVOUCHERDETAILS.LIST",
    "INVOICEWISEDETAILS.LIST",
    "VATITCDETAILS.LIST",
    "ADVANCETAXDETAILS.LIST",
];

/// Payroll and e-way bill lists closing a party ledger posting.
pub(crate) const PARTY_POSTING_TAIL_LISTS: &[&str] = &[
    "PAYROLLMODEOFPAYMENT.LIST",
    "ATTDRECORDS.LIST",
    "GSTEWAYCONSIGNORADDRESS.LIST",
    "GSTEWAYCONSIGNEEADDRESS.LIST",
    "TEMPGSTRATEDETAILS.LIST",
];

/// Defaults for the flag block of a ledger posting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Posting {
    pub gst_class: &'static str,
    pub deemed_positive: &'static str,
    pub party_ledger: &'static str,
}

impl Posting {
    /// The order's own ledger (PRCORD / SALORD).
    pub const ALLOCATION: Posting = Posting {
        gst_class: "",
        deemed_positive: "Yes",
        party_ledger: "No",
    };

    /// The supplier's ledger on a purchase order.
    pub const SUPPLIER: Posting = Posting {
        gst_class: "Standard Rate",
        deemed_positive: "No",
        party_ledger: "Yes",
    };

    /// Append `LEDGERNAME`, the flag block and `AMOUNT` to `base`.
    pub fn fields(self, base: NodeTemplate, ledger: FieldSpec) -> NodeTemplate {
        base.field("LEDGERNAME", ledger).column_fields(&[
            ("GSTCLASS", "gst_class", self.gst_class),
            ("ISDEEMEDPOSITIVE", "is_deemed_positive", self.deemed_positive),
            ("LEDGERFROMITEM", "ledger_from_item", "No"),
            ("REMOVEZEROENTRIES", "remove_zero_entries", "No"),
            ("ISPARTYLEDGER", "is_party_ledger", self.party_ledger),
            ("ISLASTDEEMEDPOSITIVE", "is_last_deemed_positive", self.deemed_positive),
            ("ISCAPVATTAXALTERED", "is_cap_vat_tax_altered", "No"),
            ("ISCAPVATNOTCLAIMED", "is_cap_vat_not_claimed", "No"),
            ("AMOUNT", "amount", ""),
        ])
    }
}

/// `BATCHALLOCATIONS.LIST` for an order line, due on the transaction date.
pub(crate) fn batch_allocation(amount_column: &'static str, filler: &'static str) -> NodeTemplate {
    let due = FieldSpec::column("transaction_date").long_date();
    NodeTemplate::new("BATCHALLOCATIONS.LIST")
        .column_fields(&[
            ("BATCHNAME", "batch_name", "Primary Batch"),
            ("INDENTNO", "indent_no", ""),
            ("ORDERNO", "name", ""),
            ("TRACKINGNUMBER", "tracking_number", ""),
            ("DYNAMICCSTISCLEARED", "dynamic_cst_is_cleared", "No"),
        ])
        .field("AMOUNT", FieldSpec::column(amount_column))
        .field("ACTUALQTY", FieldSpec::column("stock_qty"))
        .field("BILLEDQTY", FieldSpec::column("stock_qty"))
        .child(
            NodeTemplate::text("ORDERDUEDATE", due.clone())
                .attr("JD", FieldSpec::position())
                .attr("P", due),
        )
        .placeholders(&["ADDITIONALDETAILS.LIST", "VOUCHERCOMPONENTLIST.LIST"], filler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequentialIds;

    #[test]
    fn every_kind_has_a_spec() {
        for kind in DocumentKind::ALL {
            let spec = spec(kind);
            assert_eq!(spec.kind, kind);
            assert!(!spec.emits.is_empty());
            assert_eq!(spec.report, ReportName::for_kind(kind));
        }
    }

    #[test]
    fn spaces_slices_run() {
        assert_eq!(spaces(0), "");
        assert_eq!(spaces(6), "      ");
        assert_eq!(spaces(8).len(), 8);
    }

    #[test]
    fn first_seen_skips_empty_keys() {
        let spec = DocumentSpec::new(DocumentKind::ItemMaster, "item_name")
            .first_seen(
                FieldSpec::column("item_group"),
                NodeTemplate::new("STOCKGROUP").attr("NAME", FieldSpec::column("item_group")),
            )
            .primary(NodeTemplate::new("STOCKITEM"));
        let table = Table::new(
            ["item_name", "item_group"],
            vec![vec!["Bolt", ""], vec!["Nut", "Hardware"], vec!["Screw", "hardware"]],
        );
        let (doc, diag) = map_spec(&spec, &table, "Co", &mut SequentialIds::new());
        assert!(diag.is_clean());
        assert_eq!(doc.records_named("STOCKGROUP").len(), 1);
        assert_eq!(doc.records_named("STOCKITEM").len(), 3);
        let order: Vec<_> = doc.records().iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(order, ["STOCKITEM", "STOCKGROUP", "STOCKITEM", "STOCKITEM"]);
    }

    #[test]
    fn shared_wrapper_holds_every_record() {
        let spec = DocumentSpec::new(DocumentKind::JournalEntry, "name")
            .grouped()
            .shared_wrapper()
            .primary(NodeTemplate::new("VOUCHER"));
        let table = Table::new(["name"], vec![vec![""], vec!["JV-1"], vec![""], vec!["JV-2"]]);
        let (doc, diag) = map_spec(&spec, &table, "Co", &mut SequentialIds::new());
        assert_eq!(doc.messages().len(), 1);
        assert_eq!(doc.records_named("VOUCHER").len(), 2);
        assert_eq!(diag.issues(), [RowIssue::Orphan { row: 0 }]);
    }
}
