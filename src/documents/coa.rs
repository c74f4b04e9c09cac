//! Chart of accounts: one `GROUP` master per named account.
//!
//! The `Is Group` column is not consulted; every account imports as a
//! group. Parent accounts are referenced by name only and are expected to
//! exist in Tally already.

use super::{DocumentSpec, language_names, spaces};
use crate::core::{DocumentKind, FieldSpec, NodeTemplate};

const ACCOUNT: &str = "Account Name";

pub(super) fn spec() -> DocumentSpec {
    let group = NodeTemplate::new("GROUP")
        .attr("NAME", FieldSpec::column(ACCOUNT))
        .attr("RESERVEDNAME", FieldSpec::column(ACCOUNT))
        .field("GUID", FieldSpec::guid(""))
        .field("PARENT", FieldSpec::column("Parent Account").or("\t"))
        .empties(&["GRPDEBITPARENT", "GRPCREDITPARENT"])
        .flags(
            &["ISBILLWISEON", "ISCOSTCENTRESON", "ISADDABLE", "ISUPDATINGTARGETID"],
            "No",
        )
        .literal("ASORIGINAL", "Yes")
        .flags(
            &[
                "ISSUBLEDGER",
                "ISREVENUE",
                "AFFECTSGROSSPROFIT",
                "ISDEEMEDPOSITIVE",
                "TRACKNEGATIVEBALANCES",
                "ISCONDENSED",
                "AFFECTSSTOCK",
                "ISGROUPFORLOANRCPT",
                "ISGROUPFORLOANPYMNT",
                "ISRATEINCLUSIVEVAT",
                "ISINVDETAILSENABLE",
            ],
            "No",
        )
        .literal("SORTPOSITION", "30")
        .literal("ALTERID", "4")
        .placeholders(&["SERVICETAXDETAILS.LIST"], spaces(7))
        .placeholders(&["VATDETAILS.LIST"], spaces(6))
        .placeholders(&["SALESTAXCESSDETAILS.LIST"], spaces(5))
        .placeholders(&["GSTDETAILS.LIST"], spaces(6))
        .child(language_names(FieldSpec::column(ACCOUNT), Some("1033")))
        .placeholders(
            &[
                "XBRLDETAIL.LIST",
                "AUDITDETAILS.LIST",
                "SCHVIDETAILS.LIST",
                "EXCISETARIFFDETAILS.LIST",
                "TCSCATEGORYDETAILS.LIST",
                "TDSCATEGORYDETAILS.LIST",
                "GSTCLASSFNIGSTRATES.LIST",
                "EXTARIFFDUTYHEADDETAILS.LIST",
            ],
            spaces(8),
        );

    DocumentSpec::new(DocumentKind::ChartOfAccounts, ACCOUNT).primary(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SequentialIds, Table};
    use crate::documents::map_spec;

    #[test]
    fn parent_defaults_to_tab() {
        let table = Table::new(
            [ACCOUNT, "Parent Account"],
            vec![vec!["Cash", ""], vec!["Bank", "Current Assets"]],
        );
        let (doc, diag) = map_spec(&spec(), &table, "Co", &mut SequentialIds::new());
        assert!(diag.is_clean());

        let groups = doc.records_named("GROUP");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].attr("RESERVEDNAME"), Some("Cash"));
        assert_eq!(groups[0].child_text("PARENT"), Some("\t"));
        assert_eq!(groups[1].child_text("PARENT"), Some("Current Assets"));
        assert_eq!(
            groups[1].path("LANGUAGENAME.LIST/NAME.LIST/NAME").and_then(|n| n.text()),
            Some("Bank")
        );
        assert_eq!(
            groups[1].path("LANGUAGENAME.LIST/LANGUAGEID").and_then(|n| n.text()),
            Some("1033")
        );
    }
}
