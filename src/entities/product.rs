//! Product entity - an item held in stock.

use super::Record;

/// A stocked product, keyed by its user-supplied ID.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// Unique identifier chosen by the user (e.g., "P1")
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price, finite and non-negative
    pub price: f64,
    /// Units currently in stock
    pub quantity: u32,
}

impl Product {
    /// Creates a product record. The price is stored as given; validation happens in
    /// [`crate::core::product`].
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Formats a price the way it is stored: shortest round-trip form, always with a
/// fractional part (`20.0`, `9.99`).
#[must_use]
pub fn format_stored_price(price: f64) -> String {
    format!("{price:?}")
}

/// Checks a price is finite and non-negative; `-0.0` comes back as `0.0`.
#[must_use]
pub fn checked_price(price: f64) -> Option<f64> {
    (price.is_finite() && price >= 0.0).then_some(price + 0.0)
}

/// Parses a price, accepting only finite, non-negative decimals.
#[must_use]
pub fn parse_price(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().and_then(checked_price)
}

impl Record for Product {
    const KIND: &'static str = "product";
    const FIELD_COUNT: usize = 4;

    fn key(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format_stored_price(self.price),
            self.quantity.to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let [id, name, price, quantity] = fields else {
            return Err(format!("expected 4 fields, found {}", fields.len()));
        };
        let price = parse_price(price).ok_or_else(|| format!("invalid price '{price}'"))?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid quantity '{quantity}'"))?;
        Ok(Self::new(*id, *name, price, quantity))
    }
}
