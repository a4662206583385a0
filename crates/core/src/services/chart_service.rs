use chrono::Datelike;
use std::collections::HashMap;
use std::hash::Hash;

use crate::models::asset::Asset;
use crate::models::chart::{AssetChartView, ChartEntry, ChartSeries, ExpenseChartView};
use crate::models::expense::Expense;
use crate::services::vendor_directory::VendorDirectory;

/// Sentinel grouping key for expenses with no vendor link.
const NO_VENDOR: i64 = -1;

/// Sentinel personnel value meaning "no owner"; excluded from
/// personnel-based groupings.
const UNASSIGNED: &str = "Unassigned";

/// Turns record snapshots into chart-ready (label, value) series.
///
/// The core computes all the numbers — the frontend only renders.
/// Stateless and deterministic apart from the injected vendor directory;
/// no I/O. Entry order always follows the first occurrence of each
/// grouping key in the input, never an alphabetical or numeric sort.
pub struct ChartService {
    vendors: VendorDirectory,
}

impl ChartService {
    pub fn new(vendors: VendorDirectory) -> Self {
        Self { vendors }
    }

    // ── Asset section ───────────────────────────────────────────────

    /// Compute the series for an asset-section view.
    pub fn asset_chart(&self, view: AssetChartView, assets: &[Asset]) -> ChartSeries {
        let entries = match view {
            AssetChartView::ByType => {
                counts(group_by(assets, |a| a.asset_type.clone()))
            }
            AssetChartView::ByStatus => {
                counts(group_by(assets, |a| a.status.clone()))
            }
            AssetChartView::ByPersonnel => {
                counts(group_by_personnel(assets))
            }
            AssetChartView::ValueByPersonnel => {
                // Thousands, deliberately unrounded (7250 → 7.25).
                sums(group_by_personnel(assets), |group| {
                    group.iter().map(|a| a.asset_value).sum::<f64>() / 1000.0
                })
            }
            AssetChartView::ValueByAssets => {
                // Each asset's value rounds to the nearest whole unit
                // before summing, per the original reporting rules.
                sums(group_by(assets, |a| a.asset_type.clone()), |group| {
                    group.iter().map(|a| a.asset_value.round()).sum()
                })
            }
        };
        ChartSeries::new(entries)
    }

    // ── Expense section ─────────────────────────────────────────────

    /// Compute the series for an expense-section view.
    pub fn expense_chart(&self, view: ExpenseChartView, expenses: &[Expense]) -> ChartSeries {
        let entries = match view {
            ExpenseChartView::ByPaymentStatus => {
                counts(group_by(expenses, |e| {
                    e.payment_status.clone().unwrap_or_else(|| "Unknown".into())
                }))
            }
            ExpenseChartView::ByVendor => {
                group_by(expenses, |e| e.vendor_id.unwrap_or(NO_VENDOR))
                    .into_iter()
                    .enumerate()
                    .map(|(position, (vendor_id, group))| ChartEntry {
                        position,
                        label: self.vendors.name_for(vendor_id),
                        value: group.len() as f64,
                    })
                    .collect()
            }
            ExpenseChartView::AmountByMonth => {
                // Absent or malformed dates fall into the "Unknown"
                // bucket; a bad record never aborts the rest.
                sums(
                    group_by(expenses, |e| {
                        e.incurred_at()
                            .map(|dt| dt.format("%b").to_string())
                            .unwrap_or_else(|| "Unknown".into())
                    }),
                    sum_amounts,
                )
            }
            ExpenseChartView::AmountByYear => {
                group_by(expenses, |e| {
                    e.incurred_at().map(|dt| dt.year()).unwrap_or(0)
                })
                .into_iter()
                .enumerate()
                .map(|(position, (year, group))| ChartEntry {
                    position,
                    label: year.to_string(),
                    value: sum_amounts(&group),
                })
                .collect()
            }
        };
        ChartSeries::new(entries)
    }

    // ── Display formatting ──────────────────────────────────────────

    /// The value string the rendering surface should draw on a bar in an
    /// asset chart. Counts and summed values display as whole numbers;
    /// ValueByPersonnel displays as truncated thousands with a "K".
    #[must_use]
    pub fn format_asset_value(&self, view: AssetChartView, value: f64) -> String {
        match view {
            AssetChartView::ValueByPersonnel => format!("{}K", value as i64),
            _ => (value as i64).to_string(),
        }
    }

    /// The value string for a bar in an expense chart: whole numbers.
    #[must_use]
    pub fn format_expense_value(&self, value: f64) -> String {
        (value as i64).to_string()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new(VendorDirectory::default())
    }
}

// ── Grouping helpers ────────────────────────────────────────────────

/// Group items by a key, preserving the order in which each key first
/// appears in the input. This order is the chart's category order.
fn group_by<T, K, F>(items: &[T], mut key_of: F) -> Vec<(K, Vec<&T>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&T>)> = Vec::new();
    for item in items {
        let key = key_of(item);
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }
    groups
}

/// Group assets by personnel, dropping the "Unassigned" sentinel group.
fn group_by_personnel(assets: &[Asset]) -> Vec<(String, Vec<&Asset>)> {
    group_by(assets, |a| a.personnel.clone())
        .into_iter()
        .filter(|(personnel, _)| personnel != UNASSIGNED)
        .collect()
}

fn counts<T>(groups: Vec<(String, Vec<&T>)>) -> Vec<ChartEntry> {
    groups
        .into_iter()
        .enumerate()
        .map(|(position, (label, group))| ChartEntry {
            position,
            label,
            value: group.len() as f64,
        })
        .collect()
}

fn sums<T, F>(groups: Vec<(String, Vec<&T>)>, mut value_of: F) -> Vec<ChartEntry>
where
    F: FnMut(&[&T]) -> f64,
{
    groups
        .into_iter()
        .enumerate()
        .map(|(position, (label, group))| ChartEntry {
            position,
            label,
            value: value_of(&group),
        })
        .collect()
}

/// Missing amounts contribute 0 to sums; they never fail.
fn sum_amounts(group: &[&Expense]) -> f64 {
    group.iter().map(|e| e.amount.unwrap_or(0.0)).sum()
}
