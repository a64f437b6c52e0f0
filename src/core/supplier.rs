//! Supplier business logic.

use crate::{
    core::Inventory,
    entities::{Supplier, validate_text},
    errors::{Error, Result},
};
use tracing::{info, instrument, warn};

/// Registers a new supplier and persists the supplier file.
///
/// # Errors
/// Returns `Error::DuplicateSupplier` if the ID is taken, `Error::InvalidText` if a field
/// contains `|` or a line break, or `Error::Io` if the file cannot be written.
#[instrument(skip(inventory), fields(supplier_id = %supplier.id))]
pub fn add_supplier(inventory: &mut Inventory, supplier: Supplier) -> Result<&Supplier> {
    if inventory.suppliers.contains(&supplier.id) {
        warn!("Rejected duplicate supplier");
        return Err(Error::DuplicateSupplier { id: supplier.id });
    }
    validate_text("supplier ID", &supplier.id)?;
    validate_text("name", &supplier.name)?;
    validate_text("contact information", &supplier.contact_info)?;

    let id = supplier.id.clone();
    inventory.suppliers.insert(supplier);
    inventory.save_suppliers()?;
    info!("Supplier added");

    inventory
        .suppliers
        .get(&id)
        .ok_or(Error::SupplierNotFound { id })
}
