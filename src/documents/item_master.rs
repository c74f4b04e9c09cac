//! Item master: `UNIT` and `STOCKGROUP` masters at first reference, then one
//! `STOCKITEM` per item row.

use super::{DocumentSpec, language_names, spaces};
use crate::core::{DocumentKind, FieldSpec, NodeTemplate};

const ITEM: &str = "item_name";
const UOM: &str = "stock_uom";

fn item_group() -> FieldSpec {
    FieldSpec::column("item_group").or("Primary")
}

fn unit() -> NodeTemplate {
    NodeTemplate::new("UNIT")
        .attr("NAME", FieldSpec::column(UOM))
        .attr_literal("RESERVEDNAME", "")
        .field("NAME", FieldSpec::column(UOM))
        .field("GUID", FieldSpec::guid(""))
        .literal("ISUPDATINGTARGETID", "No")
        .literal("ASORIGINAL", "Yes")
        .literal("ISGSTEXCLUDED", "No")
        .literal("ISSIMPLEUNIT", "Yes")
        .field("ALTERID", FieldSpec::position())
}

fn stock_group() -> NodeTemplate {
    NodeTemplate::new("STOCKGROUP")
        .attr("NAME", item_group())
        .attr_literal("RESERVEDNAME", "")
        .field("GUID", FieldSpec::guid(""))
        .empties(&["PARENT"])
        .literal("BASEUNITS", "Nos")
        .empties(&["ADDITIONALUNITS"])
        .flags(&["ISBATCHWISEON", "ISPERISHABLEON", "ISADDABLE", "ISUPDATINGTARGETID"], "No")
        .literal("ASORIGINAL", "Yes")
        .flags(
            &[
                "IGNOREPHYSICALDIFFERENCE",
                "IGNORENEGATIVESTOCK",
                "TREATSALESASMANUFACTURED",
                "TREATPURCHASESASCONSUMED",
                "TREATREJECTSASSCRAP",
                "HASMFGDATE",
                "ALLOWUSEOFEXPIREDITEMS",
                "IGNOREBATCHES",
                "IGNOREGODOWNS",
            ],
            "No",
        )
        .field("ALTERID", FieldSpec::position())
        .empties(&[
            "SERVICETAXDETAILS.LIST",
            "VATDETAILS.LIST",
            "SALESTAXCESSDETAILS.LIST",
            "GSTDETAILS.LIST",
        ])
        .child(language_names(item_group(), Some("1033")))
        .empties(&[
            "SCHVIDETAILS.LIST",
            "EXCISETARIFFDETAILS.LIST",
            "TCSCATEGORYDETAILS.LIST",
            "TDSCATEGORYDETAILS.LIST",
            "GSTCLASSFNIGSTRATES.LIST",
            "EXTARIFFDUTYHEADDETAILS.LIST",
            "TEMPGSTITEMSLABRATES.LIST",
        ])
}

const ITEM_EMPTY_LISTS: &[&str] = &[
    "SERVICETAXDETAILS.LIST",
    "VATDETAILS.LIST",
    "SALESTAXCESSDETAILS.LIST",
    "SCHVIDETAILS.LIST",
    "EXCISETARIFFDETAILS.LIST",
    "TCSCATEGORYDETAILS.LIST",
    "TDSCATEGORYDETAILS.LIST",
    "EXCLUDEDTAXATIONS.LIST",
    "OLDAUDITENTRIES.LIST",
    "ACCOUNTAUDITENTRIES.LIST",
    "AUDITENTRIES.LIST",
    "MRPDETAILS.LIST",
    "VATCLASSIFICATIONDETAILS.LIST",
    "COMPONENTLIST.LIST",
    "ADDITIONALLEDGERS.LIST",
    "SALESLIST.LIST",
    "PURCHASELIST.LIST",
    "FULLPRICELIST.LIST",
    "BATCHALLOCATIONS.LIST",
    "TRADEREXCISEDUTIES.LIST",
    "STANDARDCOSTLIST.LIST",
    "STANDARDPRICELIST.LIST",
    "EXCISEITEMGODOWN.LIST",
    "MULTICOMPONENTLIST.LIST",
    "LBTDETAILS.LIST",
    "PRICELEVELLIST.LIST",
    "GSTCLASSFNIGSTRATES.LIST",
    "EXTARIFFDUTYHEADDETAILS.LIST",
    "TEMPGSTITEMSLABRATES.LIST",
];

fn stock_item() -> NodeTemplate {
    NodeTemplate::new("STOCKITEM")
        .attr("NAME", FieldSpec::column(ITEM))
        .attr_literal("RESERVEDNAME", "")
        .field("GUID", FieldSpec::guid(""))
        .field("PARENT", item_group())
        .empties(&["CATEGORY", "TAXCLASSIFICATIONNAME"])
        .field("BASEUNITS", FieldSpec::column(UOM).or("Nos"))
        .empties(&["ADDITIONALUNITS", "EXCISEITEMCLASSIFICATION"])
        .flags(
            &[
                "ISCOSTCENTRESON",
                "ISBATCHWISEON",
                "ISPERISHABLEON",
                "ISENTRYTAXAPPLICABLE",
                "ISCOSTTRACKINGON",
                "ISUPDATINGTARGETID",
            ],
            "No",
        )
        .literal("ASORIGINAL", "Yes")
        .flags(
            &[
                "ISRATEINCLUSIVEVAT",
                "IGNOREPHYSICALDIFFERENCE",
                "IGNORENEGATIVESTOCK",
                "TREATSALESASMANUFACTURED",
                "TREATPURCHASESASCONSUMED",
                "TREATREJECTSASSCRAP",
                "HASMFGDATE",
                "ALLOWUSEOFEXPIREDITEMS",
                "IGNOREBATCHES",
                "IGNOREGODOWNS",
                "CALCONMRP",
                "EXCLUDEJRNLFORVALUATION",
                "ISMRPINCLOFTAX",
                "ISADDLTAXEXEMPT",
                "ISSUPPLEMENTRYDUTYON",
                "GVATISEXCISEAPPL",
                "REORDERASHIGHER",
                "MINORDERASHIGHER",
                "ISEXCISECALCULATEONMRP",
                "INCLUSIVETAX",
                "GSTCALCSLABONMRP",
                "MODIFYMRPRATE",
            ],
            "No",
        )
        .field("ALTERID", FieldSpec::position())
        .literal("DENOMINATOR", "1")
        .literal("RATEOFVAT", "0")
        .child(
            NodeTemplate::new("GSTDETAILS.LIST")
                .literal("APPLICABLEFROM", "20170701")
                .literal("CALCULATIONTYPE", "On Value")
                .field("HSNCODE", FieldSpec::column("gst_hsn_code"))
                .flags(
                    &[
                        "ISREVERSECHARGEAPPLICABLE",
                        "ISNONGSTGOODS",
                        "GSTINELIGIBLEITC",
                        "INCLUDEEXPFORSLABCALC",
                    ],
                    "No",
                ),
        )
        .child(language_names(FieldSpec::column(ITEM), None))
        .placeholders(ITEM_EMPTY_LISTS, spaces(6))
}

pub(super) fn spec() -> DocumentSpec {
    DocumentSpec::new(DocumentKind::ItemMaster, ITEM)
        .first_seen(FieldSpec::column(UOM), unit())
        .first_seen(item_group(), stock_group())
        .primary(stock_item())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SequentialIds, Table};
    use crate::documents::map_spec;

    #[test]
    fn masters_appear_at_first_reference() {
        let table = Table::new(
            [ITEM, UOM, "item_group"],
            vec![
                vec!["Bolt", "Nos", "Hardware"],
                vec!["Nut", "NOS", ""],
                vec!["Washer", "Kg", "hardware"],
            ],
        );
        let (doc, diag) = map_spec(&spec(), &table, "Co", &mut SequentialIds::new());
        assert!(diag.is_clean());

        let order: Vec<_> = doc.records().iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(
            order,
            ["UNIT", "STOCKGROUP", "STOCKITEM", "STOCKGROUP", "STOCKITEM", "UNIT", "STOCKITEM"]
        );

        let groups: Vec<_> = doc
            .records_named("STOCKGROUP")
            .iter()
            .filter_map(|g| g.attr("NAME"))
            .collect();
        assert_eq!(groups, ["Hardware", "Primary"]);

        let kg = doc.records_named("UNIT")[1];
        assert_eq!(kg.child_text("NAME"), Some("Kg"));
        assert_eq!(kg.child_text("ALTERID"), Some("3"));

        let nut = doc.records_named("STOCKITEM")[1];
        assert_eq!(nut.child_text("PARENT"), Some("Primary"));
        assert_eq!(nut.child_text("BASEUNITS"), Some("NOS"));
    }
}
