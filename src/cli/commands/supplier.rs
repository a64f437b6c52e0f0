//! Supplier commands.

use crate::{
    cli::{Console, report_rejection},
    core::{self, Inventory, report::format_supplier_line},
    entities::Supplier,
    errors::Result,
};
use std::io::{BufRead, Write};
use tracing::warn;

/// Menu option 3.
pub fn add_supplier<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(id) = console.prompt("Enter Supplier ID: ")? else {
        return Ok(());
    };
    if inventory.suppliers().contains(&id) {
        warn!(supplier_id = %id, "Rejected duplicate supplier");
        console.say("This supplier ID already exists.")?;
        return Ok(());
    }
    let Some(name) = console.prompt("Enter Supplier Name: ")? else {
        return Ok(());
    };
    let Some(contact_info) = console.prompt("Enter Supplier Contact Information: ")? else {
        return Ok(());
    };

    match core::supplier::add_supplier(inventory, Supplier::new(id, name, contact_info)) {
        Ok(supplier) => {
            let message = format!("Supplier '{}' added successfully!", supplier.name);
            console.say(message)
        }
        Err(e) => report_rejection(console, e),
    }
}

/// Menu option 6.
pub fn display_suppliers<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("Suppliers Information")?;
    console.rule()?;
    for supplier in inventory.suppliers() {
        console.say(format_supplier_line(supplier))?;
    }
    console.rule()
}
