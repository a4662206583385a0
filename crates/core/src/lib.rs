pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    asset::Asset,
    chart::{AssetChartView, ChartSection, ChartSeries, ChartViewport, ExpenseChartView},
    expense::Expense,
    settings::ApiSettings,
};
use providers::rest::{RestAssetProvider, RestExpenseProvider};
use providers::traits::{AssetProvider, ExpenseProvider};
use services::chart_service::ChartService;
use services::vendor_directory::VendorDirectory;

use errors::CoreError;

/// Main entry point for the dashboard core library.
///
/// Owns the latest fetched snapshots of both record collections and the
/// per-section chart selection, and routes everything the frontend draws
/// through the aggregation engine. Collaborators are passed in at
/// construction — there is no hidden default wiring to a process-wide
/// client.
///
/// Snapshots are replaced wholesale on each successful fetch and never
/// mutated in place; before the first successful fetch a section is
/// empty. A failed fetch keeps the last good snapshot.
#[must_use]
pub struct Dashboard {
    assets: Option<Vec<Asset>>,
    expenses: Option<Vec<Expense>>,
    selected_asset_view: AssetChartView,
    selected_expense_view: ExpenseChartView,
    asset_provider: Box<dyn AssetProvider>,
    expense_provider: Box<dyn ExpenseProvider>,
    chart_service: ChartService,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("assets", &self.assets.as_ref().map(Vec::len))
            .field("expenses", &self.expenses.as_ref().map(Vec::len))
            .field("selected_asset_view", &self.selected_asset_view)
            .field("selected_expense_view", &self.selected_expense_view)
            .finish()
    }
}

impl Dashboard {
    /// Create a dashboard over the given record sources, with the default
    /// vendor table.
    pub fn new(
        asset_provider: Box<dyn AssetProvider>,
        expense_provider: Box<dyn ExpenseProvider>,
    ) -> Self {
        Self::with_vendor_directory(asset_provider, expense_provider, VendorDirectory::default())
    }

    /// Create a dashboard with an explicit vendor directory.
    pub fn with_vendor_directory(
        asset_provider: Box<dyn AssetProvider>,
        expense_provider: Box<dyn ExpenseProvider>,
        vendors: VendorDirectory,
    ) -> Self {
        Self {
            assets: None,
            expenses: None,
            selected_asset_view: AssetChartView::default(),
            selected_expense_view: ExpenseChartView::default(),
            asset_provider,
            expense_provider,
            chart_service: ChartService::new(vendors),
        }
    }

    /// Create a dashboard wired to the two REST services.
    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(
            Box::new(RestAssetProvider::from_settings(settings)),
            Box::new(RestExpenseProvider::from_settings(settings)),
        )
    }

    // ── Fetch ───────────────────────────────────────────────────────

    /// Fetch both collections concurrently and replace the snapshots.
    ///
    /// The two fetches are independent: either may fail without rolling
    /// back the other, and completion order is unconstrained. A failure
    /// is logged and swallowed — the prior snapshot (or the empty state,
    /// before the first success) is kept. Call again to re-fetch; there
    /// is no retry or cancellation inside.
    pub async fn initialize(&mut self) {
        let (assets, expenses) = futures::join!(
            self.asset_provider.fetch_assets(),
            self.expense_provider.fetch_expenses(),
        );

        match assets {
            Ok(list) => {
                log::debug!("Assets loaded: {}", list.len());
                self.assets = Some(list);
            }
            Err(e) => log::error!("Error fetching assets: {e}"),
        }

        match expenses {
            Ok(list) => {
                log::debug!("Expenses loaded: {}", list.len());
                self.expenses = Some(list);
            }
            Err(e) => log::error!("Error fetching expenses: {e}"),
        }
    }

    // ── Snapshots ───────────────────────────────────────────────────

    /// The latest asset snapshot (empty before the first successful fetch).
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        self.assets.as_deref().unwrap_or(&[])
    }

    /// The latest expense snapshot (empty before the first successful fetch).
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        self.expenses.as_deref().unwrap_or(&[])
    }

    /// Whether a section has seen at least one successful fetch.
    #[must_use]
    pub fn is_loaded(&self, section: ChartSection) -> bool {
        match section {
            ChartSection::Assets => self.assets.is_some(),
            ChartSection::Expenses => self.expenses.is_some(),
        }
    }

    // ── View selection ──────────────────────────────────────────────

    /// Select a chart view by its display label (the dropdown string).
    ///
    /// An unknown label returns `CoreError::UnknownView` and leaves the
    /// current selection unchanged — never a silently empty chart.
    pub fn select_view(&mut self, section: ChartSection, label: &str) -> Result<(), CoreError> {
        match section {
            ChartSection::Assets => self.selected_asset_view = label.parse()?,
            ChartSection::Expenses => self.selected_expense_view = label.parse()?,
        }
        Ok(())
    }

    pub fn select_asset_view(&mut self, view: AssetChartView) {
        self.selected_asset_view = view;
    }

    pub fn select_expense_view(&mut self, view: ExpenseChartView) {
        self.selected_expense_view = view;
    }

    /// The display label of the currently selected view for a section.
    #[must_use]
    pub fn selected_view_label(&self, section: ChartSection) -> &'static str {
        match section {
            ChartSection::Assets => self.selected_asset_view.label(),
            ChartSection::Expenses => self.selected_expense_view.label(),
        }
    }

    /// The dropdown options for a section, in display order.
    #[must_use]
    pub fn view_options(&self, section: ChartSection) -> Vec<&'static str> {
        match section {
            ChartSection::Assets => AssetChartView::ALL.iter().map(|v| v.label()).collect(),
            ChartSection::Expenses => ExpenseChartView::ALL.iter().map(|v| v.label()).collect(),
        }
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// The series for a section's current snapshot and selected view.
    /// Recomputed fresh on every call; selection changes need no re-fetch.
    #[must_use]
    pub fn chart(&self, section: ChartSection) -> ChartSeries {
        match section {
            ChartSection::Assets => self.asset_chart(),
            ChartSection::Expenses => self.expense_chart(),
        }
    }

    #[must_use]
    pub fn asset_chart(&self) -> ChartSeries {
        self.chart_service
            .asset_chart(self.selected_asset_view, self.assets())
    }

    #[must_use]
    pub fn expense_chart(&self) -> ChartSeries {
        self.chart_service
            .expense_chart(self.selected_expense_view, self.expenses())
    }

    /// The display string for a bar value in a section's current view.
    #[must_use]
    pub fn format_value(&self, section: ChartSection, value: f64) -> String {
        match section {
            ChartSection::Assets => self
                .chart_service
                .format_asset_value(self.selected_asset_view, value),
            ChartSection::Expenses => self.chart_service.format_expense_value(value),
        }
    }

    // ── Viewport ────────────────────────────────────────────────────

    /// Ask the rendering surface to reset pan/zoom. No effect on data.
    pub fn reset_chart_viewport(&self, viewport: &mut dyn ChartViewport) {
        viewport.reset_viewport();
    }
}
