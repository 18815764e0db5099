#![doc(test(attr(deny(warnings))))]

//! Spending Chart provides an interactive pie chart of spending by category:
//! aggregation of raw transactions, sector geometry and hit testing, label
//! placement, rendering through a pluggable canvas, and saved view state.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spending chart tracing initialized.");
    });
}
