use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::{AssetProvider, ExpenseProvider};
use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::expense::Expense;
use crate::models::settings::ApiSettings;

fn build_client() -> Client {
    let builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(Duration::from_secs(30));
    builder.build().unwrap_or_else(|_| Client::new())
}

/// REST client for the asset service.
///
/// GETs `{base}/api/asset/complex` and decodes a JSON array of assets.
pub struct RestAssetProvider {
    client: Client,
    base_url: String,
}

impl RestAssetProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(settings.asset_base_url.clone())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AssetProvider for RestAssetProvider {
    async fn fetch_assets(&self) -> Result<Vec<Asset>, CoreError> {
        let url = format!("{}/api/asset/complex", self.base_url.trim_end_matches('/'));

        let assets: Vec<Asset> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                service: "AssetApi".into(),
                message: format!("Failed to parse asset list: {e}"),
            })?;

        Ok(assets)
    }
}

/// REST client for the expense service.
///
/// GETs `{base}/api/Expense` and decodes a JSON array of expenses.
pub struct RestExpenseProvider {
    client: Client,
    base_url: String,
}

impl RestExpenseProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(settings.expense_base_url.clone())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ExpenseProvider for RestExpenseProvider {
    async fn fetch_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        let url = format!("{}/api/Expense", self.base_url.trim_end_matches('/'));

        let expenses: Vec<Expense> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                service: "ExpenseApi".into(),
                message: format!("Failed to parse expense list: {e}"),
            })?;

        Ok(expenses)
    }
}
