use std::{fs, path::Path};

use crate::{domain::Transaction, errors::ChartError};

/// The dataset compiled into the binary.
pub const BUNDLED_PAYLOAD: &str = include_str!("../../data/payload.json");

/// Parses a JSON array of `{name, category, amount, time}` records.
pub fn parse_transactions(json: &str) -> Result<Vec<Transaction>, ChartError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads the transactions shipped with the crate.
pub fn load_bundled_transactions() -> Result<Vec<Transaction>, ChartError> {
    parse_transactions(BUNDLED_PAYLOAD)
}

/// Loads a transaction dataset from disk, returning structured errors on failure.
pub fn load_transactions_from_file(path: &Path) -> Result<Vec<Transaction>, ChartError> {
    let data = fs::read_to_string(path)?;
    parse_transactions(&data)
}
