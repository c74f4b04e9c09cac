//! Customers: one `LEDGER` master under "Sundry Debtors" per customer.

use super::{DocumentSpec, language_names};
use crate::core::{DocumentKind, FieldSpec, NodeTemplate};

const CUSTOMER: &str = "customer_name";

const NO_FLAGS_BEFORE_ORIGINAL: &[&str] = &[
    "ISCOSTCENTRESON",
    "ISINTERESTON",
    "ALLOWINMOBILE",
    "ISCOSTTRACKINGON",
    "ISBENEFICIARYCODEON",
    "PLASINCOMEEXPENSE",
    "ISUPDATINGTARGETID",
];

const NO_FLAGS_BEFORE_CHEQUE: &[&str] = &[
    "ISCONDENSED",
    "AFFECTSSTOCK",
    "ISRATEINCLUSIVEVAT",
    "FORPAYROLL",
    "ISABCENABLED",
    "ISCREDITDAYSCHKON",
    "INTERESTONBILLWISE",
    "OVERRIDEINTEREST",
    "OVERRIDEADVINTEREST",
    "USEFORVAT",
    "IGNORETDSEXEMPT",
    "ISTCSAPPLICABLE",
    "ISTDSAPPLICABLE",
    "ISFBTAPPLICABLE",
    "ISGSTAPPLICABLE",
    "ISEXCISEAPPLICABLE",
    "ISTDSEXPENSE",
    "ISEDLIAPPLICABLE",
    "ISRELATEDPARTY",
    "USEFORESIELIGIBILITY",
    "ISINTERESTINCLLASTDAY",
    "APPROPRIATETAXVALUE",
    "ISBEHAVEASDUTY",
    "INTERESTINCLDAYOFADDITION",
    "INTERESTINCLDAYOFDEDUCTION",
    "ISOTHTERRITORYASSESSEE",
    "OVERRIDECREDITLIMIT",
    "ISAGAINSTFORMC",
];

const NO_FLAGS_AFTER_CHEQUE: &[&str] = &[
    "ISPAYUPLOAD",
    "ISPAYBATCHONLYSAL",
    "ISBNFCODESUPPORTED",
    "ALLOWEXPORTWITHERRORS",
    "CONSIDERPURCHASEFOREXPORT",
    "ISTRANSPORTER",
    "USEFORNOTIONALITC",
    "ISECOMMOPERATOR",
    "SHOWINPAYSLIP",
    "USEFORGRATUITY",
    "ISTDSPROJECTED",
    "FORSERVICETAX",
    "ISINPUTCREDIT",
    "ISEXEMPTED",
    "ISABATEMENTAPPLICABLE",
    "ISSTXPARTY",
    "ISSTXNONREALIZEDTYPE",
    "ISUSEDFORCVD",
    "LEDBELONGSTONONTAXABLE",
    "ISEXCISEMERCHANTEXPORTER",
    "ISPARTYEXEMPTED",
    "ISSEZPARTY",
    "TDSDEDUCTEEISSPECIALRATE",
    "ISECHEQUESUPPORTED",
    "ISEDDSUPPORTED",
    "HASECHEQUEDELIVERYMODE",
    "HASECHEQUEDELIVERYTO",
    "HASECHEQUEPRINTLOCATION",
    "HASECHEQUEPAYABLELOCATION",
    "HASECHEQUEBANKLOCATION",
    "HASEDDDELIVERYMODE",
    "HASEDDDELIVERYTO",
    "HASEDDPRINTLOCATION",
    "HASEDDPAYABLELOCATION",
    "HASEDDBANKLOCATION",
    "ISEBANKINGENABLED",
    "ISEXPORTFILEENCRYPTED",
    "ISBATCHENABLED",
    "ISPRODUCTCODEBASED",
    "HASEDDCITY",
    "HASECHEQUECITY",
    "ISFILENAMEFORMATSUPPORTED",
    "HASCLIENTCODE",
    "PAYINSISBATCHAPPLICABLE",
    "PAYINSISFILENUMAPP",
    "ISSALARYTRANSGROUPEDFORBRS",
    "ISEBANKINGSUPPORTED",
    "ISSCBUAE",
    "ISBANKSTATUSAPP",
    "ISSALARYGROUPED",
    "USEFORPURCHASETAX",
    "AUDITED",
];

pub(super) fn spec() -> DocumentSpec {
    let address = FieldSpec::column("customer_primary_address");
    let mobile = FieldSpec::column("mobile_no");

    let ledger = NodeTemplate::new("LEDGER")
        .attr("NAME", FieldSpec::column(CUSTOMER))
        .attr_literal("RESERVEDNAME", "")
        .child(
            NodeTemplate::new("ADDRESS.LIST")
                .attr_literal("TYPE", "String")
                .field("ADDRESS", address.clone()),
        )
        .child(
            NodeTemplate::new("MAILINGNAME.LIST")
                .attr_literal("TYPE", "String")
                .field("MAILINGNAME", FieldSpec::column(CUSTOMER)),
        )
        .child(
            NodeTemplate::new("OLDAUDITENTRYIDS.LIST")
                .attr_literal("TYPE", "Number")
                .literal("OLDAUDITENTRYIDS", "-1"),
        )
        .field("GUID", FieldSpec::guid(""))
        .field("EMAIL", FieldSpec::column("email_id"))
        .field("PRIORSTATENAME", address)
        .empties(&["PINCODE"])
        .field("WEBSITE", FieldSpec::column("website"))
        .field("INCOMETAXNUMBER", FieldSpec::column("pan"))
        .literal("COUNTRYNAME", "India")
        .literal("GSTREGISTRATIONTYPE", "Regular")
        .literal("VATDEALERTYPE", "Regular")
        .literal("PARENT", "Sundry Debtors")
        .empties(&["TAXCLASSIFICATIONNAME"])
        .literal("TAXTYPE", "Others")
        .field("COUNTRYOFRESIDENCE", FieldSpec::column("country"))
        .field("LEDGERPHONE", mobile.clone())
        .field("LEDGERFAX", mobile.clone())
        .field("LEDGERCONTACT", FieldSpec::column(CUSTOMER))
        .field("LEDGERMOBILE", mobile)
        .empties(&[
            "GSTTYPE",
            "APPROPRIATEFOR",
            "EXCISELEDGERCLASSIFICATION",
            "EXCISEDUTYTYPE",
            "EXCISENATUREOFPURCHASE",
            "LEDGERFBTCATEGORY",
        ])
        .literal("ISBILLWISEON", "Yes")
        .flags(NO_FLAGS_BEFORE_ORIGINAL, "No")
        .literal("ASORIGINAL", "Yes")
        .flags(NO_FLAGS_BEFORE_CHEQUE, "No")
        .literal("ISCHEQUEPRINTINGENABLED", "Yes")
        .flags(NO_FLAGS_AFTER_CHEQUE, "No")
        .literal("SORTPOSITION", "1000")
        .field("ALTERID", FieldSpec::position())
        .child(language_names(FieldSpec::column(CUSTOMER), None));

    DocumentSpec::new(DocumentKind::Customer, CUSTOMER).primary(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SequentialIds, Table};
    use crate::documents::map_spec;

    #[test]
    fn ledger_sits_under_sundry_debtors() {
        let table = Table::new(
            [CUSTOMER, "mobile_no"],
            vec![vec!["Smith & Co", "98450"], vec!["Zenith", ""]],
        );
        let (doc, _) = map_spec(&spec(), &table, "Co", &mut SequentialIds::new());
        let ledgers = doc.records_named("LEDGER");

        assert_eq!(ledgers[0].attr("NAME"), Some("Smith &amp; Co"));
        assert_eq!(ledgers[0].child_text("PARENT"), Some("Sundry Debtors"));
        assert_eq!(ledgers[0].child_text("LEDGERMOBILE"), Some("98450"));
        assert_eq!(ledgers[0].child_text("SORTPOSITION"), Some("1000"));
        assert_eq!(
            ledgers[0].path("MAILINGNAME.LIST/MAILINGNAME").and_then(|n| n.text()),
            Some("Smith &amp; Co")
        );
        assert_eq!(ledgers[1].child_text("ALTERID"), Some("2"));
    }
}
