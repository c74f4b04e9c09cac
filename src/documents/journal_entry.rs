//! Journal entries: multi-line vouchers grouped by their leading row.
//!
//! A row with a `name` opens a voucher; the rows after it without a `name`
//! are further ledger lines of the same voucher. All vouchers share one
//! `TALLYMESSAGE`.

use super::DocumentSpec;
use crate::core::{DocumentKind, FieldSpec, NodeTemplate, Row, format_amount, parse_amount};

fn is_customer(row: &Row<'_>) -> bool {
    row.get("party_type") == Some("Customer")
}

fn deemed_positive(row: &Row<'_>) -> Option<String> {
    Some(if is_customer(row) { "Yes" } else { "No" }.to_string())
}

/// Customer lines post the debit as a negative amount; every other line
/// posts the credit as a positive one. Missing amounts count as zero.
fn line_amount(row: &Row<'_>) -> Option<String> {
    let customer = is_customer(row);
    let column = if customer {
        "debit_in_account_currency"
    } else {
        "credit_in_account_currency"
    };
    let amount = row
        .get(column)
        .and_then(parse_amount)
        .unwrap_or_default()
        .abs();
    Some(format_amount(if customer { -amount } else { amount }))
}

pub(super) fn spec() -> DocumentSpec {
    let voucher = NodeTemplate::new("VOUCHER")
        .attr("REMOTEID", FieldSpec::guid("-00000001"))
        .attr("VCHKEY", FieldSpec::guid("-0000b146:00000008"))
        .attr_literal("VCHTYPE", "Journal")
        .attr_literal("ACTION", "Create")
        .attr_literal("OBJVIEW", "Accounting Voucher View")
        .child(
            NodeTemplate::new("OLDAUDITENTRYIDS.LIST")
                .attr_literal("TYPE", "Number")
                .literal("OLDAUDITENTRYIDS", "-1"),
        )
        .field("DATE", FieldSpec::column("posting_date").compact_date())
        .field("GUID", FieldSpec::guid("-00000001"))
        .field("PARTYLEDGERNAME", FieldSpec::column("party"))
        .literal("VOUCHERTYPENAME", "Journal")
        .child(
            NodeTemplate::new("ALLLEDGERENTRIES.LIST")
                .each_row()
                .field("LEDGERNAME", FieldSpec::column("party").or("Ledger"))
                .field("ISDEEMEDPOSITIVE", FieldSpec::derived(deemed_positive))
                .field("AMOUNT", FieldSpec::derived(line_amount)),
        );

    DocumentSpec::new(DocumentKind::JournalEntry, "name")
        .grouped()
        .shared_wrapper()
        .primary(voucher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Table;

    #[test]
    fn sign_convention_follows_party_type() {
        let t = Table::new(
            ["party_type", "debit_in_account_currency", "credit_in_account_currency"],
            vec![
                vec!["Customer", "250", "0"],
                vec!["Supplier", "0", "-75.5"],
                vec!["", "", ""],
            ],
        );
        let amounts: Vec<_> = t.rows().map(|r| line_amount(&r).unwrap()).collect();
        assert_eq!(amounts, ["-250.00", "75.50", "0.00"]);
        let flags: Vec<_> = t.rows().map(|r| deemed_positive(&r).unwrap()).collect();
        assert_eq!(flags, ["Yes", "No", "No"]);
    }
}
