use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A financial record from the expense endpoint, optionally linked to an
/// asset, vendor or subscription. Everything except the id is nullable on
/// the wire; absence means "unknown/unlinked" and a missing `amount`
/// contributes 0 to sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub expense_id: i64,
    pub expense_type_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub asset_id: Option<i64>,
    pub subscription_id: Option<i64>,
    pub amount: Option<f64>,
    pub currency_code: Option<String>,

    /// ISO 8601 date-time string, e.g. `"2023-01-15T10:00:00Z"`.
    pub date_incurred: Option<String>,

    pub payment_status: Option<String>,
    pub payment_date: Option<String>,
    pub budget_allocation_id: Option<i64>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    pub updated_at: Option<String>,
    pub updated_by: Option<String>,
}

impl Expense {
    /// Convenience constructor covering the fields aggregation reads.
    pub fn new(
        expense_id: i64,
        vendor_id: Option<i64>,
        asset_id: Option<i64>,
        amount: Option<f64>,
        date_incurred: Option<String>,
        payment_status: Option<String>,
    ) -> Self {
        Self {
            expense_id,
            expense_type_id: None,
            vendor_id,
            asset_id,
            subscription_id: None,
            amount,
            currency_code: None,
            date_incurred,
            payment_status,
            payment_date: None,
            budget_allocation_id: None,
            description: None,
            created_at: None,
            created_by: None,
            updated_at: None,
            updated_by: None,
        }
    }

    /// Parse `date_incurred` into a naive date-time.
    ///
    /// Accepts RFC 3339 (with offset or `Z`) and plain ISO 8601 without an
    /// offset. Returns `None` for absent or malformed input — a bad date
    /// on one record must never abort aggregation of the rest.
    pub fn incurred_at(&self) -> Option<NaiveDateTime> {
        let raw = self.date_incurred.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}
