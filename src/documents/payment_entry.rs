//! Payment entries: one `VOUCHER VCHTYPE="Payment"` per payment row.

use super::{DocumentSpec, old_audit_ids};
use crate::core::{DocumentKind, FieldSpec, NodeTemplate};

const TOTAL: &[&str] = &["received_amount", "total_taxes_and_charges"];

pub(super) fn spec() -> DocumentSpec {
    let party = FieldSpec::column("party_name");
    let total = FieldSpec::sum(TOTAL).or("0.00");

    let entries = NodeTemplate::new("ALLLEDGERENTRIES.LIST")
        .child(
            NodeTemplate::new("ALLLEDGERENTRIES.LIST")
                .field("LEDGERNAME", party.clone())
                .literal("ISDEEMEDPOSITIVE", "Yes")
                .field("AMOUNT", total.clone().negated()),
        )
        .child(
            NodeTemplate::new("ALLLEDGERENTRIES.LIST")
                .field("LEDGERNAME", FieldSpec::column("paid_to"))
                .literal("ISDEEMEDPOSITIVE", "No")
                .field("AMOUNT", total.clone().amount()),
        );

    let voucher = NodeTemplate::new("VOUCHER")
        .attr("REMOTEID", FieldSpec::guid("-00000029"))
        .attr("VCHKEY", FieldSpec::guid("-0000b147:00000020"))
        .attr_literal("VCHTYPE", "Payment")
        .attr_literal("ACTION", "Create")
        .attr_literal("OBJVIEW", "Accounting Voucher View")
        .child(old_audit_ids())
        .field("DATE", FieldSpec::column("posting_date").compact_date())
        .field("GUID", FieldSpec::guid(""))
        .field("PARTYLEDGERNAME", party.clone())
        .literal("VOUCHERTYPENAME", "Payment")
        .field("VOUCHERNUMBER", FieldSpec::column("payment_order"))
        .literal("FBTPAYMENTTYPE", "Default")
        .literal("PERSISTEDVIEW", "Accounting Voucher View")
        .field("AMOUNT", total.amount())
        .field("LEDGERNAME", party)
        .child(entries);

    DocumentSpec::new(DocumentKind::PaymentEntry, "name").primary(voucher)
}

#[cfg(test)]
mod tests {
    use crate::core::{ConversionConfig, DocumentKind, SequentialIds, Table};
    use crate::documents::convert_table;

    #[test]
    fn oversized_amounts_use_the_zero_total() {
        let max = "79228162514264337593543950335";
        let table = Table::new(
            ["name", "party_name", "received_amount", "total_taxes_and_charges"],
            vec![vec!["PE-1", "Acme", max, max]],
        );
        let out = convert_table(
            DocumentKind::PaymentEntry,
            &table,
            &ConversionConfig::default(),
            &mut SequentialIds::new(),
        )
        .unwrap();
        let voucher = out.document.records_named("VOUCHER")[0];
        assert_eq!(voucher.child_text("AMOUNT"), Some("0.00"));
        let amounts: Vec<_> = voucher
            .descendants("AMOUNT")
            .iter()
            .filter_map(|n| n.text())
            .collect();
        assert_eq!(amounts, ["0.00", "0.00", "0.00"]);
    }
}
