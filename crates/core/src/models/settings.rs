use serde::{Deserialize, Serialize};

/// Base addresses of the two REST services the dashboard consumes.
/// These are the only environment-configurable knobs the core has.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the asset service.
    pub asset_base_url: String,

    /// Base URL of the expense service.
    pub expense_base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        // The Android emulator loopback addresses the app ships with.
        Self {
            asset_base_url: "http://10.0.2.2:8011".to_string(),
            expense_base_url: "http://10.0.2.2:8002".to_string(),
        }
    }
}

impl ApiSettings {
    pub fn new(asset_base_url: impl Into<String>, expense_base_url: impl Into<String>) -> Self {
        Self {
            asset_base_url: asset_base_url.into(),
            expense_base_url: expense_base_url.into(),
        }
    }

    /// Defaults overridden by `ASSET_API_URL` / `EXPENSE_API_URL` when set.
    #[must_use]
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(url) = std::env::var("ASSET_API_URL") {
            settings.asset_base_url = url;
        }
        if let Ok(url) = std::env::var("EXPENSE_API_URL") {
            settings.expense_base_url = url;
        }
        settings
    }
}
