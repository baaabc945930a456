use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use std::collections::BTreeMap;

use crate::amount::Amount;

/// Why a catalogue entry was left out of the price mapping.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CatalogueSkip {
    #[error("Invalid product entry (skipped)")]
    NotARecord,
    #[error("Product without valid title (skipped)")]
    MissingTitle,
    #[error("Product '{title}' has invalid price (skipped)")]
    InvalidPrice { title: String },
}

/// Maps product titles to unit prices.
///
/// Titles are matched exactly. When the catalogue lists the same title more
/// than once, the last price given wins.
#[derive(Debug, Default)]
pub struct Prices(BTreeMap<String, Amount>);

impl Prices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit price for `title`, replacing any earlier price.
    pub fn insert(&mut self, title: impl Into<String>, price: Amount) {
        self.0.insert(title.into(), price);
    }

    #[must_use]
    pub fn get(&self, title: &str) -> Option<Amount> {
        self.0.get(title).copied()
    }
}

/// Validates a single catalogue entry, returning its title and unit price.
///
/// The entry must be a JSON object with a string `title` and a numeric
/// `price`. Integer and floating-point prices are both accepted; strings,
/// booleans and `null` are not.
///
/// # Errors
///
/// Returns the [`CatalogueSkip`] reason for the first check that fails.
pub fn parse_entry(entry: &Value) -> Result<(String, Amount), CatalogueSkip> {
    let Some(record) = entry.as_object() else {
        return Err(CatalogueSkip::NotARecord);
    };
    let Some(title) = record.get("title").and_then(Value::as_str) else {
        return Err(CatalogueSkip::MissingTitle);
    };
    let Some(price) = record.get("price").and_then(Value::as_f64) else {
        return Err(CatalogueSkip::InvalidPrice {
            title: title.to_string(),
        });
    };
    Ok((title.to_string(), Amount::new(price)))
}

/// Builds the price mapping from the catalogue's `entries`.
///
/// Invalid entries are left out; the reason for each is returned alongside
/// the mapping, in catalogue order.
#[must_use]
pub fn index(entries: &[Value]) -> (Prices, Vec<CatalogueSkip>) {
    let mut prices = Prices::new();
    let mut skipped = Vec::new();
    for entry in entries {
        match parse_entry(entry) {
            Ok((title, price)) => prices.insert(title, price),
            Err(skip) => skipped.push(skip),
        }
    }
    debug!(
        entries = entries.len(),
        prices = prices.0.len(),
        skipped = skipped.len(),
        "indexed catalogue"
    );
    (prices, skipped)
}
