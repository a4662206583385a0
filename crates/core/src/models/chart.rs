use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// A single bar on a chart.
///
/// The core generates these — the frontend just renders. `position` is
/// the category index on the axis (0..n-1 in first-occurrence order of
/// the grouping key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub position: usize,
    pub label: String,
    pub value: f64,
}

/// An ordered series of chart entries for one rendered chart.
///
/// Axis formatters look labels up by position; out-of-range positions
/// fall back to the position rendered as text, so a renderer probing
/// past the data never panics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    entries: Vec<ChartEntry>,
}

impl ChartSeries {
    pub fn new(entries: Vec<ChartEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    /// Resolve the axis label at a category position, or the position as
    /// text when out of range.
    #[must_use]
    pub fn label_at(&self, position: usize) -> String {
        self.entries
            .get(position)
            .map(|e| e.label.clone())
            .unwrap_or_else(|| position.to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two chart sections on the dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartSection {
    Assets,
    Expenses,
}

impl std::fmt::Display for ChartSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartSection::Assets => write!(f, "asset"),
            ChartSection::Expenses => write!(f, "expense"),
        }
    }
}

/// The selectable chart views for the asset section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetChartView {
    ByType,
    ByStatus,
    ByPersonnel,
    ValueByPersonnel,
    ValueByAssets,
}

impl AssetChartView {
    /// Dropdown options in display order.
    pub const ALL: [AssetChartView; 5] = [
        AssetChartView::ByType,
        AssetChartView::ByStatus,
        AssetChartView::ByPersonnel,
        AssetChartView::ValueByPersonnel,
        AssetChartView::ValueByAssets,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AssetChartView::ByType => "Assets by Type",
            AssetChartView::ByStatus => "Assets by Status",
            AssetChartView::ByPersonnel => "Assets by Personnel",
            AssetChartView::ValueByPersonnel => "Value by Personnel",
            AssetChartView::ValueByAssets => "Value by Assets",
        }
    }
}

impl Default for AssetChartView {
    fn default() -> Self {
        AssetChartView::ByType
    }
}

impl std::fmt::Display for AssetChartView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetChartView {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label() == s)
            .ok_or_else(|| CoreError::UnknownView {
                section: ChartSection::Assets.to_string(),
                label: s.to_string(),
            })
    }
}

/// The selectable chart views for the expense section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseChartView {
    ByPaymentStatus,
    ByVendor,
    AmountByMonth,
    AmountByYear,
}

impl ExpenseChartView {
    /// Dropdown options in display order.
    pub const ALL: [ExpenseChartView; 4] = [
        ExpenseChartView::ByPaymentStatus,
        ExpenseChartView::ByVendor,
        ExpenseChartView::AmountByMonth,
        ExpenseChartView::AmountByYear,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseChartView::ByPaymentStatus => "Expenses by Payment Status",
            ExpenseChartView::ByVendor => "Expenses by Vendor",
            ExpenseChartView::AmountByMonth => "Total Amount by Month",
            ExpenseChartView::AmountByYear => "Total Amount by Year",
        }
    }
}

impl Default for ExpenseChartView {
    fn default() -> Self {
        ExpenseChartView::ByPaymentStatus
    }
}

impl std::fmt::Display for ExpenseChartView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseChartView {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label() == s)
            .ok_or_else(|| CoreError::UnknownView {
                section: ChartSection::Expenses.to_string(),
                label: s.to_string(),
            })
    }
}

/// Pan/zoom reset hook implemented by the rendering surface.
///
/// The surface owns its chart widgets directly; the dashboard only ever
/// asks it to reset, never touches widget state itself.
pub trait ChartViewport {
    fn reset_viewport(&mut self);
}
