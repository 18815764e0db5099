use std::cmp;

use crate::cli::formatting::{format_amount, format_transaction_time};
use crate::domain::{CategoryData, NamedEntity};

const EMPTY_VALUE: &str = "-";
const MIN_RULE_WIDTH: usize = 40;

/// A simple key/value pair for display.
pub struct DetailField {
    pub key: String,
    pub value: String,
}

/// A detail view model: title, aligned fields and optional free-form sections.
pub struct DetailView {
    pub title: String,
    pub fields: Vec<DetailField>,
    pub sections: Vec<DetailView>,
}

impl DetailView {
    /// Creates a new detail view with the provided title.
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Adds a field to the view, returning self for chaining.
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.add_field(key, value);
        self
    }

    /// Adds a field to the view in-place.
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.push(DetailField {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn add_section(&mut self, section: DetailView) {
        self.sections.push(section);
    }

    /// Renders the view as text framed by horizontal rules.
    pub fn render(&self) -> String {
        let mut lines = self.render_fields();
        for section in &self.sections {
            lines.push(String::new());
            lines.push(section.title.clone());
            lines.extend(section.render_fields());
        }

        let max_line_len = cmp::max(
            self.title.chars().count(),
            lines.iter().map(|line| line.chars().count()).max().unwrap_or(0),
        );
        let rule = horizontal_rule(cmp::max(max_line_len, MIN_RULE_WIDTH));

        let mut output = String::new();
        output.push_str(&self.title);
        output.push('\n');
        output.push_str(&rule);
        output.push('\n');
        for line in &lines {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str(&rule);
        output
    }

    fn render_fields(&self) -> Vec<String> {
        let max_key_len = self
            .fields
            .iter()
            .map(|field| field.key.chars().count())
            .max()
            .unwrap_or(0);

        self.fields
            .iter()
            .map(|field| {
                let padding = max_key_len.saturating_sub(field.key.chars().count()) + 2;
                let value = if field.value.is_empty() {
                    EMPTY_VALUE
                } else {
                    field.value.as_str()
                };
                format!("  {}:{}{}", field.key, " ".repeat(padding), value)
            })
            .collect()
    }
}

fn horizontal_rule(len: usize) -> String {
    "─".repeat(len.max(1))
}

/// The details shown when a sector is tapped.
pub fn category_details(category: &CategoryData, currency_suffix: &str) -> DetailView {
    let mut view = DetailView::new(format!("Category: {}", category.category))
        .with_field("Total", format_amount(category.amount, currency_suffix))
        .with_field("Transactions", category.transactions.len().to_string());

    for txn in &category.transactions {
        view.add_section(
            DetailView::new(format!("- {}", txn.name()))
                .with_field("Amount", format_amount(txn.amount, currency_suffix))
                .with_field("Time", format_transaction_time(txn)),
        );
    }
    view
}
