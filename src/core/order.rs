//! Order placement.
//!
//! Placing an order checks, in this order: the product exists, the supplier exists,
//! the quantity is a positive integer, and the product has at least that many units in
//! stock. Nothing is mutated until every check has passed.

use crate::{
    core::Inventory,
    entities::Order,
    errors::{Error, Result},
};
use tracing::{info, instrument, warn};

/// Parses an order quantity: a positive base-10 integer.
///
/// # Errors
/// Returns `Error::InvalidQuantity` for anything else, including zero.
pub fn parse_order_quantity(input: &str) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&quantity| quantity > 0)
        .ok_or_else(|| Error::InvalidQuantity {
            input: input.to_string(),
        })
}

/// Identifier the next order will receive: one more than the number of orders so far.
#[must_use]
pub fn next_order_id(inventory: &Inventory) -> String {
    (inventory.orders.len() + 1).to_string()
}

/// Places an order, taking `quantity` units out of stock, and persists both the order
/// and product files.
///
/// # Errors
/// Returns `Error::ProductNotFound`, `Error::SupplierNotFound`,
/// `Error::InvalidQuantity` (zero) or `Error::InsufficientStock` without changing
/// anything, or `Error::Io` if a file cannot be written.
#[instrument(skip(inventory))]
pub fn place_order(
    inventory: &mut Inventory,
    product_id: &str,
    supplier_id: &str,
    quantity: u32,
) -> Result<Order> {
    let available = inventory
        .products
        .get(product_id)
        .ok_or_else(|| Error::ProductNotFound {
            id: product_id.to_string(),
        })?
        .quantity;
    if !inventory.suppliers.contains(supplier_id) {
        return Err(Error::SupplierNotFound {
            id: supplier_id.to_string(),
        });
    }
    if quantity == 0 {
        return Err(Error::InvalidQuantity {
            input: quantity.to_string(),
        });
    }
    if quantity > available {
        warn!(available, "Rejected order exceeding stock");
        return Err(Error::InsufficientStock {
            product_id: product_id.to_string(),
            requested: quantity,
            available,
        });
    }

    let order = Order::new(next_order_id(inventory), product_id, quantity, supplier_id);
    inventory.orders.push(order.clone());
    if let Some(product) = inventory.products.get_mut(product_id) {
        product.quantity -= quantity;
    }

    inventory.save_orders()?;
    inventory.save_products()?;
    info!(order_id = %order.id, "Order placed");

    Ok(order)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_parse_order_quantity() {
        assert_eq!(parse_order_quantity(" 5 ").unwrap(), 5);
        assert!(matches!(
            parse_order_quantity("0"),
            Err(Error::InvalidQuantity { .. })
        ));
        assert!(parse_order_quantity("-2").is_err());
        assert!(parse_order_quantity("five").is_err());
    }

    #[test]
    fn test_place_order_decrements_stock_and_persists() -> Result<()> {
        let (_dir, mut inventory) = setup_with_product_and_supplier()?;

        let order = place_order(&mut inventory, "P1", "S1", 5)?;

        assert_eq!(order, Order::new("1", "P1", 5, "S1"));
        assert_eq!(inventory.products().get("P1").unwrap().quantity, 15);
        assert_eq!(read_orders_file(&inventory)?, "1|P1|5|S1\n");
        assert_eq!(read_products_file(&inventory)?, "P1|Widget|9.99|15\n");
        Ok(())
    }

    #[test]
    fn test_order_ids_are_sequential() -> Result<()> {
        let (_dir, mut inventory) = setup_with_product_and_supplier()?;

        place_order(&mut inventory, "P1", "S1", 1)?;
        place_order(&mut inventory, "P1", "S1", 2)?;
        let third = place_order(&mut inventory, "P1", "S1", 3)?;

        assert_eq!(third.id, "3");
        assert_eq!(inventory.orders().len(), 3);
        assert_eq!(inventory.products().get("P1").unwrap().quantity, 14);
        Ok(())
    }

    #[test]
    fn test_ordering_entire_stock_is_allowed() -> Result<()> {
        let (_dir, mut inventory) = setup_with_product_and_supplier()?;

        place_order(&mut inventory, "P1", "S1", 20)?;

        assert_eq!(inventory.products().get("P1").unwrap().quantity, 0);
        Ok(())
    }

    #[test]
    fn test_insufficient_stock_changes_nothing() -> Result<()> {
        let (_dir, mut inventory) = setup_with_product_and_supplier()?;
        let products_before = read_products_file(&inventory)?;

        let result = place_order(&mut inventory, "P1", "S1", 21);

        assert!(matches!(
            result,
            Err(Error::InsufficientStock {
                requested: 21,
                available: 20,
                ..
            })
        ));
        assert!(inventory.orders().is_empty());
        assert_eq!(inventory.products().get("P1").unwrap().quantity, 20);
        assert_eq!(read_products_file(&inventory)?, products_before);
        assert!(!inventory.config().orders_path().exists());
        Ok(())
    }

    #[test]
    fn test_unknown_product_checked_before_supplier() -> Result<()> {
        let (_dir, mut inventory) = setup_test_inventory()?;

        let result = place_order(&mut inventory, "P404", "S404", 1);

        assert!(matches!(result, Err(Error::ProductNotFound { .. })));
        Ok(())
    }

    #[test]
    fn test_unknown_supplier_is_rejected() -> Result<()> {
        let (_dir, mut inventory) = setup_with_product()?;

        let result = place_order(&mut inventory, "P1", "S404", 1);

        assert!(matches!(result, Err(Error::SupplierNotFound { ref id }) if id == "S404"));
        assert_eq!(inventory.products().get("P1").unwrap().quantity, 20);
        Ok(())
    }

    #[test]
    fn test_zero_quantity_is_rejected() -> Result<()> {
        let (_dir, mut inventory) = setup_with_product_and_supplier()?;

        assert!(matches!(
            place_order(&mut inventory, "P1", "S1", 0),
            Err(Error::InvalidQuantity { .. })
        ));
        assert!(inventory.orders().is_empty());
        Ok(())
    }
}
