//! A single expense record as it appears in the bundled dataset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Amounted, NamedEntity};

/// One expense. `time` is a unix timestamp in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub name: String,
    pub category: String,
    pub amount: f64,
    pub time: i64,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        time: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount,
            time,
        }
    }

    /// The transaction time as a UTC date-time, or `None` when the timestamp is
    /// outside the representable range.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

impl NamedEntity for Transaction {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}
