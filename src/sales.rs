use serde_json::{Number, Value};
use thiserror::Error;
use tracing::debug;

use crate::{amount::Amount, catalogue::Prices};

/// Why a sale row did not contribute to the total.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SaleSkip {
    #[error("Invalid sale entry (skipped)")]
    NotARecord,
    #[error("Sale without valid product name (skipped)")]
    MissingProduct,
    #[error("Invalid quantity for product '{product}' (skipped)")]
    InvalidQuantity { product: String },
    #[error("Product '{product}' not found in catalogue (skipped)")]
    UnknownProduct { product: String },
}

/// A number of units sold.
///
/// Only integer JSON numbers are quantities: `2.0` and `1e3` are not. Integers
/// of any size are accepted, and negative values reduce the total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity(f64);

impl Quantity {
    /// Returns the quantity held in `number`, if it was written as an integer.
    #[must_use]
    pub fn from_number(number: &Number) -> Option<Self> {
        if number.to_string().contains(['.', 'e', 'E']) {
            return None;
        }
        number.as_f64().map(Self)
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

/// A sale row that has passed shape validation.
#[derive(Debug, PartialEq)]
pub struct Sale {
    pub product: String,
    pub quantity: Quantity,
}

/// Validates the shape of a single sale row.
///
/// The row must be a JSON object with a string `Product` and an integer
/// `Quantity`. Whether the product is in the catalogue is checked by
/// [`aggregate`].
///
/// # Errors
///
/// Returns the [`SaleSkip`] reason for the first check that fails.
pub fn parse_sale(row: &Value) -> Result<Sale, SaleSkip> {
    let Some(record) = row.as_object() else {
        return Err(SaleSkip::NotARecord);
    };
    let Some(product) = record.get("Product").and_then(Value::as_str) else {
        return Err(SaleSkip::MissingProduct);
    };
    let quantity = match record.get("Quantity") {
        Some(Value::Number(n)) => Quantity::from_number(n),
        _ => None,
    };
    let Some(quantity) = quantity else {
        return Err(SaleSkip::InvalidQuantity {
            product: product.to_string(),
        });
    };
    Ok(Sale {
        product: product.to_string(),
        quantity,
    })
}

/// Totals the value of `sales` at the unit prices in `prices`.
///
/// Rows are processed in order. Each valid row adds its product's unit price
/// times its quantity; invalid rows and rows for products missing from the
/// catalogue add nothing, and the reason for each is returned alongside the
/// total.
#[must_use]
pub fn aggregate(sales: &[Value], prices: &Prices) -> (Amount, Vec<SaleSkip>) {
    let mut total = Amount::default();
    let mut skipped = Vec::new();
    for row in sales {
        let sale = match parse_sale(row) {
            Ok(sale) => sale,
            Err(skip) => {
                skipped.push(skip);
                continue;
            }
        };
        let Some(price) = prices.get(&sale.product) else {
            skipped.push(SaleSkip::UnknownProduct {
                product: sale.product,
            });
            continue;
        };
        total += price * sale.quantity;
    }
    debug!(
        rows = sales.len(),
        skipped = skipped.len(),
        %total,
        "aggregated sales"
    );
    (total, skipped)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{catalogue::index, loader::load};

    use super::*;

    fn invalid_quantity(product: &str) -> SaleSkip {
        SaleSkip::InvalidQuantity {
            product: product.to_string(),
        }
    }

    fn unknown_product(product: &str) -> SaleSkip {
        SaleSkip::UnknownProduct {
            product: product.to_string(),
        }
    }

    fn widget_prices() -> Prices {
        let mut prices = Prices::new();
        prices.insert("Widget", Amount::new(2.5));
        prices.insert("Gadget", Amount::new(10.0));
        prices
    }

    #[test]
    fn aggregate_fn_totals_matched_rows_and_skips_unknown_products() {
        let sales = json!([
            {"Product": "Widget", "Quantity": 4},
            {"Product": "Gizmo", "Quantity": 1},
            {"Product": "Gadget", "Quantity": 2},
        ]);
        let (total, skipped) = aggregate(sales.as_array().unwrap(), &widget_prices());
        assert_eq!(total, Amount::new(30.0));
        assert_eq!(skipped, vec![unknown_product("Gizmo")]);
    }

    #[test]
    fn aggregate_fn_correctly_totals_testdata_files() {
        let catalogue = load("testdata/catalogue.json").unwrap();
        let sales = load("testdata/sales.json").unwrap();
        let (prices, _) = index(catalogue.as_array().unwrap());
        let (total, skipped) = aggregate(sales.as_array().unwrap(), &prices);
        assert_eq!(total.to_string(), "30.00");
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn aggregate_fn_skips_malformed_rows_and_counts_the_rest() {
        let sales = json!([
            42,
            {"Quantity": 1},
            {"Product": null, "Quantity": 1},
            {"Product": "Widget", "Quantity": "5"},
            {"Product": "Widget", "Quantity": 2.0},
            {"Product": "Widget", "Quantity": true},
            {"Product": "Widget"},
            {"Product": "Widget", "Quantity": 2},
        ]);
        let (total, skipped) = aggregate(sales.as_array().unwrap(), &widget_prices());
        assert_eq!(total, Amount::new(5.0));
        let invalid_qty = invalid_quantity("Widget");
        assert_eq!(
            skipped,
            vec![
                SaleSkip::NotARecord,
                SaleSkip::MissingProduct,
                SaleSkip::MissingProduct,
                invalid_qty.clone(),
                invalid_qty.clone(),
                invalid_qty.clone(),
                invalid_qty,
            ]
        );
    }

    #[test]
    fn aggregate_fn_reports_invalid_quantity_before_unknown_product() {
        let sales = json!([{"Product": "Gizmo", "Quantity": 1.5}]);
        let (_, skipped) = aggregate(sales.as_array().unwrap(), &widget_prices());
        assert_eq!(skipped, vec![invalid_quantity("Gizmo")]);
    }

    #[test]
    fn aggregate_fn_lets_negative_quantities_reduce_total() {
        let sales = json!([
            {"Product": "Gadget", "Quantity": 3},
            {"Product": "Widget", "Quantity": -2},
        ]);
        let (total, skipped) = aggregate(sales.as_array().unwrap(), &widget_prices());
        assert!(skipped.is_empty());
        assert_eq!(total, Amount::new(25.0));
    }

    #[test]
    fn aggregate_fn_matches_product_names_exactly() {
        let sales = json!([{"Product": "widget", "Quantity": 1}]);
        let (total, skipped) = aggregate(sales.as_array().unwrap(), &widget_prices());
        assert_eq!(total, Amount::default());
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn aggregate_fn_returns_zero_for_empty_sales() {
        let (total, skipped) = aggregate(&[], &widget_prices());
        assert_eq!(total.to_string(), "0.00");
        assert!(skipped.is_empty());
    }

    #[test]
    fn parse_sale_fn_accepts_large_unsigned_quantities() {
        let row = json!({"Product": "Widget", "Quantity": u64::MAX});
        let sale = parse_sale(&row).unwrap();
        assert_eq!(sale.quantity.as_f64(), 18_446_744_073_709_551_615.0);
    }

    #[test]
    fn parse_sale_fn_accepts_quantities_beyond_64_bits() {
        let text = r#"{"Product": "Widget", "Quantity": 100000000000000000000}"#;
        let row: Value = serde_json::from_str(text).unwrap();
        let sale = parse_sale(&row).unwrap();
        assert_eq!(sale.product, "Widget");
        assert_eq!(sale.quantity.as_f64(), 1e20);
    }

    #[test]
    fn parse_sale_fn_rejects_exponent_and_decimal_quantities() {
        for text in [
            r#"{"Product": "Widget", "Quantity": 1e3}"#,
            r#"{"Product": "Widget", "Quantity": 1E3}"#,
            r#"{"Product": "Widget", "Quantity": 3.0}"#,
        ] {
            let row: Value = serde_json::from_str(text).unwrap();
            let err = parse_sale(&row).unwrap_err();
            assert_eq!(err, invalid_quantity("Widget"), "{text}");
        }
    }

    #[test]
    fn skip_reasons_display_as_diagnostics() {
        assert_eq!(
            SaleSkip::NotARecord.to_string(),
            "Invalid sale entry (skipped)"
        );
        assert_eq!(
            SaleSkip::MissingProduct.to_string(),
            "Sale without valid product name (skipped)"
        );
        assert_eq!(
            invalid_quantity("Widget").to_string(),
            "Invalid quantity for product 'Widget' (skipped)"
        );
        assert_eq!(
            unknown_product("Gizmo").to_string(),
            "Product 'Gizmo' not found in catalogue (skipped)"
        );
    }
}
