//! Product commands - add, update and list products.

use crate::{
    cli::{Console, report_rejection},
    core::{
        self, Inventory,
        field::{FieldInput, parse_quantity},
        product::ProductPatch,
        report::format_product_line,
    },
    entities::{Product, product::parse_price},
    errors::{Error, Result},
};
use std::io::{BufRead, Write};
use tracing::warn;

/// Menu option 1.
///
/// A duplicate ID is reported before name, price and quantity are asked for.
pub fn add_product<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(id) = console.prompt("Enter Product ID: ")? else {
        return Ok(());
    };
    if inventory.products().contains(&id) {
        warn!(product_id = %id, "Rejected duplicate product");
        console.say("This product ID already exists. Please try updating the product instead.")?;
        return Ok(());
    }
    let Some(name) = console.prompt("Enter Product Name: ")? else {
        return Ok(());
    };
    let Some(price) = console.prompt("Enter Product Price: ")? else {
        return Ok(());
    };
    let Some(price) = parse_price(&price) else {
        warn!(product_id = %id, input = %price, "Product add rejected: invalid price");
        console.say("Invalid price or quantity input. Please try again.")?;
        return Ok(());
    };
    let Some(quantity) = console.prompt("Enter Product Quantity: ")? else {
        return Ok(());
    };
    let Some(quantity) = parse_quantity(&quantity) else {
        warn!(product_id = %id, input = %quantity, "Product add rejected: invalid quantity");
        console.say("Invalid price or quantity input. Please try again.")?;
        return Ok(());
    };

    match core::product::add_product(inventory, Product::new(id, name, price, quantity)) {
        Ok(product) => {
            let message = format!("Product '{}' added successfully!", product.name);
            console.say(message)
        }
        Err(e) => report_rejection(console, e),
    }
}

/// Menu option 2.
pub fn update_product<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(id) = console.prompt("Enter Product ID to update: ")? else {
        return Ok(());
    };
    let Some(current) = inventory.products().get(&id) else {
        warn!(product_id = %id, "Update rejected: unknown product");
        console.say("Product not found. Please add it first.")?;
        return Ok(());
    };
    let current = format_product_line(current, &inventory.config().currency);
    console.say("Current product details:")?;
    console.say(current)?;

    let Some(name) =
        console.prompt("Enter New Product Name (or press Enter to keep it the same): ")?
    else {
        return Ok(());
    };
    let Some(price) =
        console.prompt("Enter New Product Price (or press Enter to keep it the same): ")?
    else {
        return Ok(());
    };
    let Some(quantity) =
        console.prompt("Enter New Product Quantity (or press Enter to keep it the same): ")?
    else {
        return Ok(());
    };

    let patch = ProductPatch {
        name: FieldInput::parse_with(&name, |s| Some(s.to_string())),
        price: FieldInput::parse_with(&price, parse_price),
        quantity: FieldInput::parse_with(&quantity, parse_quantity),
    };

    match core::product::update_product(inventory, &id, patch) {
        Ok(outcome) => {
            for rejected in &outcome.rejected {
                console.say(keep_message(rejected))?;
            }
            console.say("Product details updated successfully!")
        }
        Err(e) => report_rejection(console, e),
    }
}

fn keep_message(rejected: &Error) -> String {
    match rejected {
        Error::InvalidPrice { .. } => "Invalid price input. Keeping the old price.".to_string(),
        Error::InvalidQuantity { .. } => {
            "Invalid quantity input. Keeping the old quantity.".to_string()
        }
        Error::InvalidText { field, .. } => {
            format!("Invalid {field} input. Keeping the old {field}.")
        }
        other => other.to_string(),
    }
}

/// Menu option 5.
pub fn display_products<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    let currency = &inventory.config().currency;
    console.say("Products Inventory")?;
    console.rule()?;
    for product in inventory.products() {
        console.say(format_product_line(product, currency))?;
    }
    console.rule()
}
