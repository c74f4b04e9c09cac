//! Sales orders: one `VOUCHER VCHTYPE="Sales Order"` per order row.

use super::{
    DocumentSpec, POSTING_DETAIL_LISTS, PARTY_POSTING_TAIL_LISTS, Posting, batch_allocation,
    old_audit_ids, spaces,
};
use crate::core::{DocumentKind, FieldSpec, NodeTemplate};

const CUSTOMER: &str = "customer_name";

const HEADER_NO_FLAGS: &[&str] = &[
    "DIFFACTUALQTY",
    "ISMSTFROMSYNC",
    "ASORIGINAL",
    "AUDITED",
    "FORJOBCOSTING",
    "ISOPTIONAL",
    "USEFOREXCISE",
    "ISFORJOBWORKIN",
    "ALLOWCONSUMPTION",
    "USEFORINTEREST",
    "USEFORGAINLOSS",
    "USEFORGODOWNTRANSFER",
    "USEFORCOMPOUND",
    "USEFORSERVICETAX",
    "ISDELETED",
    "ISONHOLD",
    "ISBOENOTAPPLICABLE",
    "ISEXCISEVOUCHER",
    "EXCISETAXOVERRIDE",
    "USEFORTAXUNITTRANSFER",
    "IGNOREPOSVALIDATION",
    "EXCISEOPENING",
    "USEFORFINALPRODUCTION",
    "ISTDSOVERRIDDEN",
    "ISTCSOVERRIDDEN",
    "ISTDSTCSCASHVCH",
    "INCLUDEADVPYMTVCH",
    "ISSUBWORKSCONTRACT",
    "ISVATOVERRIDDEN",
    "IGNOREORIGVCHDATE",
    "ISVATPAIDATCUSTOMS",
    "ISDECLAREDTOCUSTOMS",
    "ISSERVICETAXOVERRIDDEN",
    "ISISDVOUCHER",
    "ISEXCISEOVERRIDDEN",
    "ISEXCISESUPPLYVCH",
    "ISGSTOVERRIDDEN",
    "GSTNOTEXPORTED",
    "IGNOREGSTINVALIDATION",
    "ISGSTREFUND",
    "ISGSTSECSEVENAPPLICABLE",
    "ISVATPRINCIPALACCOUNT",
    "ISSHIPPINGWITHINSTATE",
    "ISOVERSEASTOURISTTRANS",
    "ISDESIGNATEDZONEPARTY",
    "ISCANCELLED",
    "ISPOSTDATED",
    "USETRACKINGNUMBER",
    "ISINVOICE",
    "MFGJOURNAL",
    "HASDISCOUNTS",
    "ASPAYSLIP",
    "ISCOSTCENTRE",
    "ISSTXNONREALIZEDVCH",
    "ISEXCISEMANUFACTURERON",
    "ISBLANKCHEQUE",
    "ISVOID",
    "ORDERLINESTATUS",
    "VATISAGNSTCANCSALES",
    "VATISPURCEXEMPTED",
    "ISVATRESTAXINVOICE",
    "VATISASSESABLECALCVCH",
    "ISDELIVERYSAMEASCONSIGNEE",
    "ISDISPATCHSAMEASCONSIGNOR",
    "CHANGEVCHMODE",
];

const INVENTORY_NO_FLAGS: &[&str] = &[
    "ISDEEMEDPOSITIVE",
    "ISLASTDEEMEDPOSITIVE",
    "ISAUTONEGATE",
    "ISCUSTOMSCLEARANCE",
    "ISTRACKCOMPONENT",
    "ISTRACKPRODUCTION",
    "ISPRIMARYITEM",
    "ISSCRAP",
];

fn inventory_entry() -> NodeTemplate {
    let order_ledger = Posting::ALLOCATION
        .fields(
            NodeTemplate::new("ACCOUNTINGALLOCATIONS.LIST").child(old_audit_ids()),
            FieldSpec::literal("SALORD"),
        )
        .placeholders(POSTING_DETAIL_LISTS, spaces(8));

    let customer_ledger = Posting::ALLOCATION
        .fields(NodeTemplate::new("LEDGERENTRIES.LIST"), FieldSpec::column(CUSTOMER))
        .placeholders(POSTING_DETAIL_LISTS, spaces(8))
        .placeholders(PARTY_POSTING_TAIL_LISTS, spaces(8));

    NodeTemplate::new("INVENTORYENTRIES.LIST")
        .field("STOCKITEMNAME", FieldSpec::column("item_name"))
        .flags(INVENTORY_NO_FLAGS, "No")
        .field("RATE", FieldSpec::column("rate"))
        .field("AMOUNT", FieldSpec::column("total"))
        .field("ACTUALQTY", FieldSpec::column("stock_qty"))
        .field("BILLEDQTY", FieldSpec::column("stock_qty"))
        .child(batch_allocation("total", spaces(6)))
        .child(order_ledger)
        .child(customer_ledger)
}

pub(super) fn spec() -> DocumentSpec {
    let date = FieldSpec::column("transaction_date").compact_date();
    let customer = FieldSpec::column(CUSTOMER);

    let voucher = NodeTemplate::new("VOUCHER")
        .attr("REMOTEID", FieldSpec::guid("-00000001"))
        .attr("VCHKEY", FieldSpec::guid("-0000b146:00000008"))
        .attr_literal("VCHTYPE", "Sales Order")
        .attr_literal("ACTION", "Create")
        .attr_literal("OBJVIEW", "Invoice Voucher View")
        .child(
            NodeTemplate::new("OLDAUDITENTRYIDS.LIST")
                .attr_literal("TYPE", "Number")
                .literal("OLDAUDITENTRYIDS", "-1"),
        )
        .field("DATE", date.clone())
        .field("GUID", FieldSpec::guid("-00000001"))
        .literal("VATDEALERTYPE", "Unregistered")
        .literal("NARRATION", "New Sales Order")
        .literal("COUNTRYOFRESIDENCE", "India")
        .field("PARTYNAME", customer.clone())
        .field("PARTYLEDGERNAME", customer.clone())
        .literal("VOUCHERTYPENAME", "Sales Order")
        .field("REFERENCE", FieldSpec::column("name"))
        .field("VOUCHERNUMBER", FieldSpec::position())
        .field("BASICBASEPARTYNAME", customer.clone())
        .column_fields(&[
            ("CSTFORMISSUETYPE", "cst_form_issue_type", ""),
            ("CSTFORMRECVTYPE", "cst_form_recv_type", ""),
            ("FBTPAYMENTTYPE", "payment_type", "Default"),
        ])
        .literal("PERSISTEDVIEW", "Invoice Voucher View")
        .field("BASICBUYERNAME", customer)
        .field("VCHGSTCLASS", FieldSpec::column("gst_category"))
        .flags(HEADER_NO_FLAGS, "No")
        .field("ALTERID", FieldSpec::position())
        .field("MASTERID", FieldSpec::position())
        .field("VOUCHERKEY", FieldSpec::guid("-0000b146:00000008"))
        .field("EFFECTIVEDATE", date)
        .flags(&["HASCASHFLOW", "ISVATDUTYPAID"], "Yes")
        .placeholders(
            &[
                "EWAYBILLDETAILS.LIST",
                "EXCLUDEDTAXATIONS.LIST",
                "OLDAUDITENTRIES.LIST",
                "ACCOUNTAUDITENTRIES.LIST",
                "AUDITENTRIES.LIST",
                "DUTYHEADDETAILS.LIST",
            ],
            spaces(6),
        )
        .child(inventory_entry());

    DocumentSpec::new(DocumentKind::SalesOrder, "name").primary(voucher)
}
