//! Purchase orders: one `VOUCHER VCHTYPE="Purchase Order"` per order row,
//! with its inventory line, batch allocation and supplier posting.
//!
//! Most header flags may be overridden by a same-named snake_case column.

use super::{
    DocumentSpec, POSTING_DETAIL_LISTS, PARTY_POSTING_TAIL_LISTS, Posting, batch_allocation,
    old_audit_ids, spaces,
};
use crate::core::{DocumentKind, FieldSpec, NodeTemplate, Row};

const HEADER_PARTY: &[(&str, &str, &str)] = &[
    ("COUNTRYOFRESIDENCE", "country_of_residence", "India"),
    ("PLACEOFSUPPLY", "shipping_address", "Delhi"),
    ("PARTYNAME", "supplier", ""),
    ("PARTYLEDGERNAME", "supplier_name", ""),
    ("VOUCHERTYPENAME", "voucher_type_name", "Purchase Order"),
    ("REFERENCE", "name", ""),
    ("VOUCHERNUMBER", "voucher_number", "1"),
    ("BASICBASEPARTYNAME", "supplier_name", ""),
    ("CSTFORMISSUETYPE", "cst_form_issue_type", ""),
    ("CSTFORMRECVTYPE", "cst_form_recv_type", ""),
    ("FBTPAYMENTTYPE", "fbt_payment_type", "Default"),
    ("PERSISTEDVIEW", "persisted_view", "Invoice Voucher View"),
];

const HEADER_FLAGS: &[(&str, &str, &str)] = &[
    ("VCHGSTCLASS", "vch_gst_class", ""),
    ("DIFFACTUALQTY", "diff_actual_qty", "No"),
    ("ISMSTFROMSYNC", "is_mst_from_sync", "No"),
    ("ASORIGINAL", "as_original", "No"),
    ("AUDITED", "audited", "No"),
    ("FORJOBCOSTING", "for_job_costing", "No"),
    ("ISOPTIONAL", "is_optional", "No"),
];

const HEADER_USAGE: &[(&str, &str, &str)] = &[
    ("USEFOREXCISE", "use_for_excise", "No"),
    ("ISFORJOBWORKIN", "is_for_job_work_in", "No"),
    ("ALLOWCONSUMPTION", "allow_consumption", "No"),
    ("USEFORINTEREST", "use_for_interest", "No"),
    ("USEFORGAINLOSS", "use_for_gain_loss", "No"),
    ("USEFORGODOWNTRANSFER", "use_for_godown_transfer", "No"),
    ("USEFORCOMPOUND", "use_for_compound", "No"),
    ("USEFORSERVICETAX", "use_for_service_tax", "No"),
    ("ISDELETED", "is_deleted", "No"),
    ("ISONHOLD", "is_on_hold", "No"),
    ("ISBOENOTAPPLICABLE", "is_boe_not_applicable", "No"),
    ("ISEXCISEVOUCHER", "is_excise_voucher", "No"),
    ("EXCISETAXOVERRIDE", "excise_tax_override", "No"),
    ("USEFORTAXUNITTRANSFER", "use_for_tax_unit_transfer", "No"),
    ("IGNOREPOSVALIDATION", "ignore_pos_validation", "No"),
    ("EXCISEOPENING", "excise_opening", "No"),
    ("USEFORFINALPRODUCTION", "use_for_final_production", "No"),
    ("ISTDSOVERRIDDEN", "is_tds_overridden", "No"),
    ("ISTCSOVERRIDDEN", "is_tcs_overridden", "No"),
    ("ISTDSTCSCASHVCH", "is_tds_tcs_cash_vch", "No"),
    ("INCLUDEADVPYMTVCH", "include_adv_payment_vch", "No"),
    ("ISSUBWORKSCONTRACT", "is_sub_works_contract", "No"),
    ("ISVATOVERRIDDEN", "is_vat_overridden", "No"),
    ("IGNOREORIGVCHDATE", "ignore_orig_vch_date", "No"),
    ("ISVATPAIDATCUSTOMS", "is_vat_paid_at_customs", "No"),
    ("ISDECLAREDTOCUSTOMS", "is_declared_to_customs", "No"),
    ("ISSERVICETAXOVERRIDDEN", "is_service_tax_overridden", "No"),
    ("ISISDVOUCHER", "is_isd_voucher", "No"),
    ("ISEXCISEOVERRIDDEN", "is_excise_overridden", "No"),
    ("ISEXCISESUPPLYVCH", "is_excise_supply_vch", "No"),
    ("ISGSTOVERRIDDEN", "is_gst_overridden", "No"),
    ("GSTNOTEXPORTED", "gst_not_exported", "No"),
    ("IGNOREGSTINVALIDATION", "ignore_gst_invalidation", "No"),
    ("ISGSTREFUND", "is_gst_refund", "No"),
    ("ISGSTSECSEVENAPPLICABLE", "is_gst_sec_seven_applicable", "No"),
    ("ISVATPRINCIPALACCOUNT", "is_vat_principal_account", "No"),
    ("ISSHIPPINGWITHINSTATE", "is_shipping_within_state", "No"),
    ("ISOVERSEASTOURISTTRANS", "is_overseas_tourist_trans", "No"),
    ("ISDESIGNATEDZONEPARTY", "is_designated_zone_party", "No"),
    ("ISCANCELLED", "is_cancelled", "No"),
    ("HASCASHFLOW", "has_cash_flow", "No"),
    ("ISPOSTDATED", "is_post_dated", "No"),
    ("USETRACKINGNUMBER", "use_tracking_number", "No"),
    ("ISINVOICE", "is_invoice", "Yes"),
    ("ISJOURNAL", "is_journal", "No"),
    ("HASDISCOUNTS", "has_discounts", "No"),
    ("ASPAYSLIP", "as_pay_slip", "No"),
    ("ISCOSTCENTRE", "is_cost_centre", "No"),
    ("ISSTXNONREALIZEDVCH", "is_stx_non_realized_vch", "No"),
    ("ISEXCISEMANUFACTURERON", "is_excise_manufacturer_on", "No"),
    ("ISBLANKCHEQUE", "is_blank_cheque", "No"),
    ("ISVOID", "is_void", "No"),
    ("ORDERLINESTATUS", "order_line_status", "No"),
    ("VATISAGNSTCANCSALES", "vat_is_against_cancel_sales", "No"),
    ("VATISPURCEXEMPTED", "vat_is_purchase_exempted", "No"),
    ("ISVATRESTAXINVOICE", "is_vat_rest_tax_invoice", "No"),
    ("VATISASSESABLECALCVCH", "vat_is_assessable_calc_vch", "No"),
    ("ISVATDUTYPAID", "is_vat_duty_paid", "Yes"),
    ("ISDELIVERYSAMEASCONSIGNEE", "is_delivery_same_as_consignee", "No"),
    ("ISDISPATCHSAMEASCONSIGNOR", "is_dispatch_same_as_consignor", "No"),
    ("CHANGEVCHMODE", "change_vch_mode", "No"),
];

const INVENTORY_FLAGS: &[(&str, &str, &str)] = &[
    ("ISDEEMEDPOSITIVE", "is_deemed_positive", "Yes"),
    ("ISLASTDEEMEDPOSITIVE", "is_last_deemed_positive", "Yes"),
    ("ISAUTONEGATE", "is_auto_negate", "No"),
    ("ISCUSTOMSCLEARANCE", "is_customs_clearance", "No"),
    ("ISTRACKCOMPONENT", "is_track_component", "No"),
    ("ISTRACKPRODUCTION", "is_track_production", "No"),
    ("ISPRIMARYITEM", "is_primary_item", "No"),
    ("ISSCRAP", "is_scrap", "No"),
];

const ALLOCATION_LISTS: &[&str] = &[
    "DUTYHEADDETAILS.LIST",
    "SUPPLEMENTARYDUTYHEADDETAILS.LIST",
    "TAXOBJECTALLOCATIONS.LIST",
    "REFVOUCHERDETAILS.LIST",
    "EXCISEALLOCATIONS.LIST",
    "EXPENSEALLOCATIONS.LIST",
    "INVOICEDELNOTES.LIST",
    "INVOICEORDERLIST.LIST",
    "INVOICEINDENTLIST.LIST",
    "ATTENDANCEENTRIES.LIST",
    "ORIGINVOICEDETAILS.LIST",
    "INVOICEEXPORTLIST.LIST",
];

fn column_or_position(row: &Row<'_>, column: &str) -> Option<String> {
    Some(match row.get(column) {
        Some(value) => value.to_string(),
        None => row.position().to_string(),
    })
}

fn alter_id(row: &Row<'_>) -> Option<String> {
    column_or_position(row, "alter_id")
}

fn master_id(row: &Row<'_>) -> Option<String> {
    column_or_position(row, "master_id")
}

fn inventory_entry() -> NodeTemplate {
    let order_ledger = Posting::ALLOCATION
        .fields(
            NodeTemplate::new("ACCOUNTINGALLOCATIONS.LIST").child(old_audit_ids()),
            FieldSpec::literal("PRCORD"),
        )
        .placeholders(POSTING_DETAIL_LISTS, spaces(8));

    let supplier_ledger = Posting::SUPPLIER
        .fields(
            NodeTemplate::new("LEDGERENTRIES.LIST").child(old_audit_ids()),
            FieldSpec::column("supplier_name"),
        )
        .placeholders(POSTING_DETAIL_LISTS, spaces(8));

    let supplier_allocation = NodeTemplate::new("ACCOUNTINGALLOCATIONS.LIST")
        .placeholders(ALLOCATION_LISTS, spaces(8))
        .child(supplier_ledger)
        .placeholders(PARTY_POSTING_TAIL_LISTS, spaces(8));

    NodeTemplate::new("INVENTORYENTRIES.LIST")
        .field("STOCKITEMNAME", FieldSpec::column("item_name"))
        .column_fields(INVENTORY_FLAGS)
        .field("RATE", FieldSpec::column("base_rate"))
        .field("AMOUNT", FieldSpec::column("amount"))
        .field("ACTUALQTY", FieldSpec::column("qty"))
        .field("BILLEDQTY", FieldSpec::column("qty"))
        .child(batch_allocation("amount", spaces(5)))
        .child(order_ledger)
        .child(supplier_allocation)
}

pub(super) fn spec() -> DocumentSpec {
    let date = FieldSpec::column("transaction_date").compact_date();

    let voucher = NodeTemplate::new("VOUCHER")
        .attr("REMOTEID", FieldSpec::guid("-00000008"))
        .attr("VCHKEY", FieldSpec::guid("-0000b146:00000010"))
        .attr_literal("VCHTYPE", "Purchase Order")
        .attr_literal("ACTION", "Create")
        .attr_literal("OBJVIEW", "Invoice Voucher View")
        .child(old_audit_ids())
        .field("DATE", date.clone())
        .field("GUID", FieldSpec::guid("-00000008"))
        .column_fields(HEADER_PARTY)
        .field("BASICBUYERNAME", FieldSpec::company())
        .column_fields(HEADER_FLAGS)
        .field("EFFECTIVEDATE", date)
        .column_fields(HEADER_USAGE)
        .field("ALTERID", FieldSpec::derived(alter_id))
        .field("MASTERID", FieldSpec::derived(master_id))
        .column_fields(&[("VOUCHERKEY", "voucher_key", "194914205827104")])
        .placeholders(
            &[
                "EWAYBILLDETAILS.LIST",
                "EXCLUDEDTAXATIONS.LIST",
                "OLDAUDITENTRIES.LIST",
                "ACCOUNTAUDITENTRIES.LIST",
                "AUDITENTRIES.LIST",
                "DUTYHEADDETAILS.LIST",
            ],
            spaces(5),
        )
        .child(inventory_entry());

    DocumentSpec::new(DocumentKind::PurchaseOrder, "name").primary(voucher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Table;

    #[test]
    fn ids_fall_back_to_row_position() {
        let t = Table::new(["alter_id"], vec![vec!["77"], vec![""]]);
        assert_eq!(alter_id(&t.row(0).unwrap()).as_deref(), Some("77"));
        assert_eq!(master_id(&t.row(1).unwrap()).as_deref(), Some("2"));
    }
}
