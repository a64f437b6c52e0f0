//! Report commands - print the aggregate views from [`crate::core::report`].

use crate::{
    cli::Console,
    core::{
        Inventory,
        report::{
            format_low_stock_line, format_sales_line, format_supplier_orders_line, low_stock,
            orders_by_supplier, sales_by_product,
        },
    },
    errors::Result,
};
use std::io::{BufRead, Write};

const NO_ORDERS: &str = "No orders have been placed yet.";

/// Menu option 7. Uses the configured low stock threshold.
pub fn low_stock_report<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    let rows = low_stock(inventory.products(), inventory.config().low_stock_threshold);

    console.say("Low Stock Report")?;
    console.rule()?;
    if rows.is_empty() {
        console.say("No products are running low on stock.")?;
    }
    for product in rows {
        console.say(format_low_stock_line(product))?;
    }
    console.rule()
}

/// Menu option 8.
pub fn sales_report<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    let rows = sales_by_product(inventory.orders(), inventory.products());

    console.say("Sales Report")?;
    console.rule()?;
    if rows.is_empty() {
        console.say(NO_ORDERS)?;
    }
    for line in &rows {
        console.say(format_sales_line(line))?;
    }
    console.rule()
}

/// Menu option 9.
pub fn supplier_orders_report<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    let rows = orders_by_supplier(inventory.orders(), inventory.suppliers());

    console.say("Supplier Orders Report")?;
    console.rule()?;
    if rows.is_empty() {
        console.say(NO_ORDERS)?;
    }
    for line in &rows {
        console.say(format_supplier_orders_line(line))?;
    }
    console.rule()
}
