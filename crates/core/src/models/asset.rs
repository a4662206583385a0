use serde::{Deserialize, Serialize};

/// An inventoried IT asset as served by the asset endpoint.
///
/// Field names are part of the wire contract (camelCase JSON) and must
/// round-trip exactly. Aggregation only reads `asset_type`, `status`,
/// `personnel` and `asset_value`; everything else is descriptive or audit
/// data carried for list/detail screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub asset_id: i64,
    pub asset_name: String,

    /// Classification string (e.g. "Laptop", "Phone").
    pub asset_type: String,
    pub asset_type_id: i64,

    pub brand: String,
    pub model: String,

    /// Assigned owner. `"Unassigned"` is a sentinel meaning no owner and
    /// is excluded from personnel-based groupings.
    pub personnel: String,

    pub location: String,
    pub serial_number: String,
    pub imei: Option<String>,
    pub sim_code: Option<String>,
    pub mobile_number: Option<String>,
    pub provider: Option<String>,
    pub plan: Option<String>,
    pub plan_type: Option<String>,

    pub purchase_date: String,
    pub purchase_invoice: String,
    pub warranty_expiry: String,

    /// Monetary value, non-negative.
    pub asset_value: f64,

    /// Lifecycle status (e.g. "Active", "Inactive", "Retired").
    pub status: String,

    pub created_at: String,
    pub created_by: String,
    pub updated_at: String,
    pub updated_by: String,

    pub associations: Vec<Association>,

    /// Accessory records have no fixed shape on the wire yet.
    pub asset_accessories: Vec<serde_json::Value>,
}

/// A link between an asset and some other record (personnel, location, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub association_id: i64,
    pub association_type: String,
    pub reference_id: i64,
    pub reference_name: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

impl Asset {
    /// Convenience constructor covering the fields aggregation reads;
    /// the remaining wire fields are filled with empty defaults.
    pub fn new(
        asset_id: i64,
        asset_name: impl Into<String>,
        asset_type: impl Into<String>,
        personnel: impl Into<String>,
        asset_value: f64,
        status: impl Into<String>,
    ) -> Self {
        Self {
            asset_id,
            asset_name: asset_name.into(),
            asset_type: asset_type.into(),
            asset_type_id: 0,
            brand: String::new(),
            model: String::new(),
            personnel: personnel.into(),
            location: String::new(),
            serial_number: String::new(),
            imei: None,
            sim_code: None,
            mobile_number: None,
            provider: None,
            plan: None,
            plan_type: None,
            purchase_date: String::new(),
            purchase_invoice: String::new(),
            warranty_expiry: String::new(),
            asset_value,
            status: status.into(),
            created_at: String::new(),
            created_by: String::new(),
            updated_at: String::new(),
            updated_by: String::new(),
            associations: Vec::new(),
            asset_accessories: Vec::new(),
        }
    }
}
