use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::TallyError;

/// The ERPNext entity a CSV export describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    ChartOfAccounts,
    Customer,
    ItemMaster,
    JournalEntry,
    PaymentEntry,
    PurchaseOrder,
    SalesOrder,
}

impl DocumentKind {
    /// All supported kinds, masters first.
    pub const ALL: [DocumentKind; 7] = [
        Self::ChartOfAccounts,
        Self::Customer,
        Self::ItemMaster,
        Self::JournalEntry,
        Self::PaymentEntry,
        Self::PurchaseOrder,
        Self::SalesOrder,
    ];

    /// Snake-case identifier, used as the output filename prefix.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::ChartOfAccounts => "chart_of_accounts",
            Self::Customer => "customer",
            Self::ItemMaster => "item_master",
            Self::JournalEntry => "journal_entry",
            Self::PaymentEntry => "payment_entry",
            Self::PurchaseOrder => "purchase_order",
            Self::SalesOrder => "sales_order",
        }
    }

    /// The label ERPNext shows for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ChartOfAccounts => "Chart of Accounts",
            Self::Customer => "Customer",
            Self::ItemMaster => "Item Master",
            Self::JournalEntry => "Journal Entry",
            Self::PaymentEntry => "Payment Entry",
            Self::PurchaseOrder => "Purchase Order",
            Self::SalesOrder => "Sales Order",
        }
    }

    /// Master data imports into "All Masters", transactions into "Vouchers".
    pub fn is_master(&self) -> bool {
        matches!(
            self,
            Self::ChartOfAccounts | Self::Customer | Self::ItemMaster
        )
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DocumentKind {
    type Err = TallyError;

    /// Accepts the slug (`sales_order`) or the ERPNext label (`Sales Order`).
    /// `Item` is accepted as an alias for the item master.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("item") {
            return Ok(Self::ItemMaster);
        }
        Self::ALL
            .into_iter()
            .find(|k| k.slug() == wanted || k.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TallyError::UnknownDocumentKind(s.to_string()))
    }
}
