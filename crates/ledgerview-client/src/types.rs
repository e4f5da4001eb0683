//! Domain records and wire envelopes for the ledger backend

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Classification group a ledger belongs to (e.g., "Assets")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier
    pub id: i64,
    /// Group name
    pub name: String,
}

/// Debit/credit nature of a ledger account
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryNature {
    /// Debit-natured account
    Debit,
    /// Credit-natured account
    Credit,
}

impl FromStr for EntryNature {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debit" | "dr" => Ok(EntryNature::Debit),
            "credit" | "cr" => Ok(EntryNature::Credit),
            _ => Err(format!("Invalid entry nature: {}", s)),
        }
    }
}

impl std::fmt::Display for EntryNature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryNature::Debit => write!(f, "debit"),
            EntryNature::Credit => write!(f, "credit"),
        }
    }
}

/// Ledger account record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Unique ledger identifier
    pub id: i64,
    /// Account name
    pub name: String,
    /// Contact number attached to the account
    pub mobile_no: String,
    /// Opening balance as a decimal string (e.g., "1500.00")
    pub opening_balance: String,
    /// Embedded group snapshot, not a live reference
    pub group: Group,
    /// Debit/credit nature as stored by the backend
    pub debit_credit: String,
}

impl Ledger {
    /// Parse the opening balance into a decimal
    pub fn opening_balance_value(&self) -> Option<Decimal> {
        Decimal::from_str(self.opening_balance.trim()).ok()
    }

    /// Parse the debit/credit nature field
    pub fn nature(&self) -> Option<EntryNature> {
        self.debit_credit.parse().ok()
    }

    /// Name of the embedded group snapshot
    pub fn group_name(&self) -> &str {
        &self.group.name
    }
}

/// One page of the ledger collection
///
/// Django-REST-style envelope; fields beyond `results` and `total_pages`
/// are tolerated and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerPageResponse {
    /// Records on this page
    pub results: Vec<Ledger>,
    /// Total page count reported by the backend
    pub total_pages: u32,
    /// Total record count, when reported
    #[serde(default)]
    pub count: Option<u64>,
    /// Link to the following page, when any
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the preceding page, when any
    #[serde(default)]
    pub previous: Option<String>,
}

/// One page of the group collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupPageResponse {
    /// Records on this page
    pub results: Vec<Group>,
    /// Link to the following page; `None` means the listing is exhausted
    #[serde(default)]
    pub next: Option<String>,
    /// Total record count, when reported
    #[serde(default)]
    pub count: Option<u64>,
}
