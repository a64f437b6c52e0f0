//! Order entity - an immutable record of stock leaving the inventory.

use super::Record;

/// A placed order. Orders are append-only and never edited after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    /// Sequential identifier ("1", "2", ...)
    pub id: String,
    /// Product the stock was taken from
    pub product_id: String,
    /// Units ordered
    pub quantity: u32,
    /// Supplier the order was placed with
    pub supplier_id: String,
}

impl Order {
    /// Creates an order record.
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        quantity: u32,
        supplier_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            quantity,
            supplier_id: supplier_id.into(),
        }
    }
}

impl Record for Order {
    const KIND: &'static str = "order";
    const FIELD_COUNT: usize = 4;

    fn key(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.product_id.clone(),
            self.quantity.to_string(),
            self.supplier_id.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let [id, product_id, quantity, supplier_id] = fields else {
            return Err(format!("expected 4 fields, found {}", fields.len()));
        };
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid quantity '{quantity}'"))?;
        Ok(Self::new(*id, *product_id, quantity, *supplier_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_line_format() {
        let order = Order::new("1", "P1", 5, "S1");
        assert_eq!(order.to_line(), "1|P1|5|S1");
    }

    #[test]
    fn test_from_fields_rejects_non_numeric_quantity() {
        assert_eq!(
            Order::from_fields(&["1", "P1", "five", "S1"]),
            Err("invalid quantity 'five'".to_string())
        );
    }
}
