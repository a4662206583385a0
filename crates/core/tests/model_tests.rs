// ═══════════════════════════════════════════════════════════════════
// Model Tests — Asset, Expense wire contract, chart view enums
// ═══════════════════════════════════════════════════════════════════

use asset_dashboard_core::models::asset::Asset;
use asset_dashboard_core::models::chart::{AssetChartView, ChartSection, ExpenseChartView};
use asset_dashboard_core::models::expense::Expense;
use asset_dashboard_core::models::settings::ApiSettings;
use chrono::{Datelike, Timelike};

const ASSET_JSON: &str = r#"{
    "assetId": 42,
    "assetName": "MacBook Pro 14",
    "assetType": "Laptop",
    "assetTypeId": 1,
    "brand": "Apple",
    "model": "A2779",
    "personnel": "Alice",
    "location": "Sydney HQ",
    "serialNumber": "C02XL0GTJGH5",
    "imei": null,
    "simCode": null,
    "mobileNumber": null,
    "provider": null,
    "plan": null,
    "planType": null,
    "purchaseDate": "2023-02-01",
    "purchaseInvoice": "INV-1001",
    "warrantyExpiry": "2026-02-01",
    "assetValue": 3499.0,
    "status": "Active",
    "createdAt": "2023-02-01T09:00:00Z",
    "createdBy": "admin",
    "updatedAt": "2023-02-01T09:00:00Z",
    "updatedBy": "admin",
    "associations": [
        {
            "associationId": 7,
            "associationType": "Personnel",
            "referenceId": 12,
            "referenceName": "Alice",
            "startDate": "2023-02-02",
            "endDate": null
        }
    ],
    "assetAccessories": []
}"#;

const EXPENSE_JSON: &str = r#"{
    "expenseId": 9,
    "expenseTypeId": null,
    "vendorId": 3,
    "assetId": 42,
    "subscriptionId": null,
    "amount": 120.5,
    "currencyCode": "AUD",
    "dateIncurred": "2023-01-15T10:00:00Z",
    "paymentStatus": "Paid",
    "paymentDate": null,
    "budgetAllocationId": null,
    "description": "Cloud hosting",
    "createdAt": null,
    "createdBy": null,
    "updatedAt": null,
    "updatedBy": null
}"#;

// ═══════════════════════════════════════════════════════════════════
//  Asset
// ═══════════════════════════════════════════════════════════════════

mod asset {
    use super::*;

    #[test]
    fn deserializes_wire_json() {
        let asset: Asset = serde_json::from_str(ASSET_JSON).unwrap();
        assert_eq!(asset.asset_id, 42);
        assert_eq!(asset.asset_type, "Laptop");
        assert_eq!(asset.personnel, "Alice");
        assert_eq!(asset.asset_value, 3499.0);
        assert_eq!(asset.status, "Active");
        assert_eq!(asset.associations.len(), 1);
        assert_eq!(asset.associations[0].reference_name, "Alice");
        assert_eq!(asset.associations[0].end_date, None);
        assert!(asset.imei.is_none());
    }

    #[test]
    fn serializes_back_to_camel_case_field_names() {
        let asset: Asset = serde_json::from_str(ASSET_JSON).unwrap();
        let value = serde_json::to_value(&asset).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "assetId",
            "assetName",
            "assetType",
            "assetTypeId",
            "personnel",
            "serialNumber",
            "assetValue",
            "status",
            "associations",
            "assetAccessories",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert!(!obj.contains_key("asset_id"));
    }

    #[test]
    fn roundtrip_preserves_record() {
        let asset: Asset = serde_json::from_str(ASSET_JSON).unwrap();
        let json = serde_json::to_string(&asset).unwrap();
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(asset, back);
    }

    #[test]
    fn new_fills_unused_fields_with_defaults() {
        let asset = Asset::new(1, "Laptop1", "Laptop", "Alice", 1500.0, "Active");
        assert_eq!(asset.asset_name, "Laptop1");
        assert_eq!(asset.brand, "");
        assert!(asset.associations.is_empty());
        assert!(asset.asset_accessories.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Expense
// ═══════════════════════════════════════════════════════════════════

mod expense {
    use super::*;

    #[test]
    fn deserializes_wire_json() {
        let expense: Expense = serde_json::from_str(EXPENSE_JSON).unwrap();
        assert_eq!(expense.expense_id, 9);
        assert_eq!(expense.vendor_id, Some(3));
        assert_eq!(expense.asset_id, Some(42));
        assert_eq!(expense.amount, Some(120.5));
        assert_eq!(expense.payment_status.as_deref(), Some("Paid"));
        assert_eq!(expense.expense_type_id, None);
    }

    #[test]
    fn all_nullable_fields_accept_null() {
        let json = r#"{
            "expenseId": 1,
            "expenseTypeId": null,
            "vendorId": null,
            "assetId": null,
            "subscriptionId": null,
            "amount": null,
            "currencyCode": null,
            "dateIncurred": null,
            "paymentStatus": null,
            "paymentDate": null,
            "budgetAllocationId": null,
            "description": null,
            "createdAt": null,
            "createdBy": null,
            "updatedAt": null,
            "updatedBy": null
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.vendor_id, None);
        assert_eq!(expense.amount, None);
        assert_eq!(expense.date_incurred, None);
    }

    #[test]
    fn serializes_back_to_camel_case_field_names() {
        let expense: Expense = serde_json::from_str(EXPENSE_JSON).unwrap();
        let value = serde_json::to_value(&expense).unwrap();
        let obj = value.as_object().unwrap();

        for key in ["expenseId", "vendorId", "dateIncurred", "paymentStatus", "amount"] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert!(!obj.contains_key("date_incurred"));
    }

    #[test]
    fn incurred_at_parses_rfc3339() {
        let expense: Expense = serde_json::from_str(EXPENSE_JSON).unwrap();
        let dt = expense.incurred_at().unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn incurred_at_parses_offsetless_iso8601() {
        let expense = Expense::new(1, None, None, None, Some("2024-07-01T08:30:00".into()), None);
        let dt = expense.incurred_at().unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 7);
    }

    #[test]
    fn incurred_at_is_none_for_absent_or_malformed() {
        let absent = Expense::new(1, None, None, None, None, None);
        assert!(absent.incurred_at().is_none());

        let malformed = Expense::new(2, None, None, None, Some("15/01/2023".into()), None);
        assert!(malformed.incurred_at().is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Chart view enums
// ═══════════════════════════════════════════════════════════════════

mod chart_views {
    use super::*;

    #[test]
    fn defaults_match_startup_selection() {
        assert_eq!(AssetChartView::default(), AssetChartView::ByType);
        assert_eq!(ExpenseChartView::default(), ExpenseChartView::ByPaymentStatus);
    }

    #[test]
    fn labels_roundtrip_through_from_str() {
        for view in AssetChartView::ALL {
            assert_eq!(view.label().parse::<AssetChartView>().unwrap(), view);
        }
        for view in ExpenseChartView::ALL {
            assert_eq!(view.label().parse::<ExpenseChartView>().unwrap(), view);
        }
    }

    #[test]
    fn unknown_label_fails_to_parse() {
        assert!("Assets by Vibe".parse::<AssetChartView>().is_err());
        assert!("Expenses by Vibe".parse::<ExpenseChartView>().is_err());
        // Labels are section-specific: an expense label is not an asset view.
        assert!("Expenses by Vendor".parse::<AssetChartView>().is_err());
    }

    #[test]
    fn dropdown_order_is_stable() {
        let labels: Vec<&str> = AssetChartView::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Assets by Type",
                "Assets by Status",
                "Assets by Personnel",
                "Value by Personnel",
                "Value by Assets",
            ]
        );
    }

    #[test]
    fn section_display_names() {
        assert_eq!(ChartSection::Assets.to_string(), "asset");
        assert_eq!(ChartSection::Expenses.to_string(), "expense");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ApiSettings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults_point_at_emulator_loopback() {
        let settings = ApiSettings::default();
        assert_eq!(settings.asset_base_url, "http://10.0.2.2:8011");
        assert_eq!(settings.expense_base_url, "http://10.0.2.2:8002");
    }

    #[test]
    fn new_overrides_both_urls() {
        let settings = ApiSettings::new("http://assets.local", "http://expenses.local");
        assert_eq!(settings.asset_base_url, "http://assets.local");
        assert_eq!(settings.expense_base_url, "http://expenses.local");
    }
}
