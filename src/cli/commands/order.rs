//! Order command.

use crate::{
    cli::{Console, report_rejection},
    core::{
        self, Inventory,
        order::parse_order_quantity,
    },
    errors::Result,
};
use std::io::{BufRead, Write};
use tracing::warn;

/// Menu option 4.
///
/// Prompts are checked one at a time, so an unknown product is reported before the
/// supplier is asked for.
pub fn place_order<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(product_id) = console.prompt("Enter the Product ID you want to order: ")? else {
        return Ok(());
    };
    let Some(product_name) = inventory
        .products()
        .get(&product_id)
        .map(|product| product.name.clone())
    else {
        warn!(%product_id, "Order rejected: unknown product");
        console.say("Product not found. Please add it first.")?;
        return Ok(());
    };

    let Some(supplier_id) = console.prompt("Enter the Supplier ID: ")? else {
        return Ok(());
    };
    if !inventory.suppliers().contains(&supplier_id) {
        warn!(%supplier_id, "Order rejected: unknown supplier");
        console.say("Supplier not found. Please add the supplier first.")?;
        return Ok(());
    }

    let Some(quantity) =
        console.prompt(&format!("Enter the quantity of {product_name} to order: "))?
    else {
        return Ok(());
    };
    let quantity = match parse_order_quantity(&quantity) {
        Ok(quantity) => quantity,
        Err(e) => return report_rejection(console, e),
    };

    match core::order::place_order(inventory, &product_id, &supplier_id, quantity) {
        Ok(order) => console.say(format!(
            "Order placed successfully for {} of {product_name}!",
            order.quantity
        )),
        Err(e) => report_rejection(console, e),
    }
}
