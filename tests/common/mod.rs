#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use spending_chart::{
    chart::PieChartView,
    config::ChartConfig,
    core::services::AggregationService,
    domain::{CategoryData, Color, Transaction},
    utils::persistence,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A fresh directory usable as `SPENDING_CHART_HOME`.
pub fn temp_home() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn categories(amounts: &[(&str, f64)]) -> Vec<CategoryData> {
    amounts
        .iter()
        .map(|(name, amount)| CategoryData::new(*name, *amount, Color::BLACK))
        .collect()
}

pub fn bundled_categories() -> Vec<CategoryData> {
    let transactions: Vec<Transaction> =
        persistence::load_bundled_transactions().expect("bundled dataset parses");
    AggregationService::group_by_category(&transactions)
}

/// A view sized to the default 400x400 frame: center (200, 200), radius 120.
pub fn laid_out_view(data: Vec<CategoryData>) -> PieChartView {
    let mut view = PieChartView::new(ChartConfig::default());
    view.set_data(data);
    view.on_size_changed(400, 400);
    view
}
