use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::expense::Expense;

/// Source of the asset collection.
///
/// The dashboard depends on this seam, not on any HTTP client, so tests
/// (and an offline frontend) can swap in their own implementation. Each
/// fetch returns the full current collection; there is no pagination or
/// filtering in the contract.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AssetProvider: Send + Sync {
    /// Fetch the full asset collection.
    async fn fetch_assets(&self) -> Result<Vec<Asset>, CoreError>;
}

/// Source of the expense collection.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ExpenseProvider: Send + Sync {
    /// Fetch the full expense collection.
    async fn fetch_expenses(&self) -> Result<Vec<Expense>, CoreError>;
}
