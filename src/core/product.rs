//! Product business logic - adding and editing stocked products.
//!
//! Both operations validate before touching the store, so a rejected call leaves the
//! inventory and its file exactly as they were.

use crate::{
    core::{Inventory, field::FieldInput},
    entities::{Product, product::checked_price, validate_text},
    errors::{Error, Result},
};
use tracing::{info, instrument, warn};

/// Adds a new product and persists the product file.
///
/// # Errors
/// Returns:
/// - `Error::DuplicateProduct` if `product.id` is already stocked
/// - `Error::InvalidText` if the ID or name contains `|` or a line break
/// - `Error::InvalidPrice` if the price is negative or not finite
/// - `Error::Io` if the product file cannot be written
#[instrument(skip(inventory), fields(product_id = %product.id))]
pub fn add_product(inventory: &mut Inventory, mut product: Product) -> Result<&Product> {
    if inventory.products.contains(&product.id) {
        warn!("Rejected duplicate product");
        return Err(Error::DuplicateProduct { id: product.id });
    }
    validate_text("product ID", &product.id)?;
    validate_text("name", &product.name)?;
    product.price = checked_price(product.price).ok_or_else(|| Error::InvalidPrice {
        input: product.price.to_string(),
    })?;

    let id = product.id.clone();
    inventory.products.insert(product);
    inventory.save_products()?;
    info!("Product added");

    inventory
        .products
        .get(&id)
        .ok_or(Error::ProductNotFound { id })
}

/// Requested changes to a product. Each field is applied independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPatch {
    /// New display name
    pub name: FieldInput<String>,
    /// New unit price; a finite, non-negative value is still required
    pub price: FieldInput<f64>,
    /// New stock level
    pub quantity: FieldInput<u32>,
}

impl ProductPatch {
    /// A patch that changes nothing.
    #[must_use]
    pub const fn keep_all() -> Self {
        Self {
            name: FieldInput::Keep,
            price: FieldInput::Keep,
            quantity: FieldInput::Keep,
        }
    }
}

/// Result of a partial update: the product as saved, plus the fields that were refused.
#[derive(Debug)]
pub struct UpdateOutcome {
    /// The product after the accepted changes
    pub product: Product,
    /// One `InvalidText`, `InvalidPrice` or `InvalidQuantity` per refused field
    pub rejected: Vec<Error>,
}

/// Applies `patch` to the product `id` and persists the product file.
///
/// Invalid fields keep their old value and are listed in
/// [`UpdateOutcome::rejected`]; valid fields are still applied.
///
/// # Errors
/// Returns `Error::ProductNotFound` if `id` is unknown, or `Error::Io` if the product
/// file cannot be written.
#[instrument(skip(inventory, patch))]
pub fn update_product(
    inventory: &mut Inventory,
    id: &str,
    patch: ProductPatch,
) -> Result<UpdateOutcome> {
    let product = inventory
        .products
        .get_mut(id)
        .ok_or_else(|| Error::ProductNotFound { id: id.to_string() })?;

    let mut rejected = Vec::new();

    let name = match patch.name {
        FieldInput::Set(name) if validate_text("name", &name).is_err() => {
            FieldInput::Invalid(name)
        }
        other => other,
    };
    if let Some(input) = name.apply_to(&mut product.name) {
        rejected.push(Error::InvalidText {
            field: "name",
            input,
        });
    }
    let price = match patch.price {
        FieldInput::Set(price) => checked_price(price)
            .map_or_else(|| FieldInput::Invalid(price.to_string()), FieldInput::Set),
        other => other,
    };
    if let Some(input) = price.apply_to(&mut product.price) {
        rejected.push(Error::InvalidPrice { input });
    }
    if let Some(input) = patch.quantity.apply_to(&mut product.quantity) {
        rejected.push(Error::InvalidQuantity { input });
    }

    if !rejected.is_empty() {
        warn!(rejected = ?rejected, "Kept old values for refused fields");
    }
    let product = product.clone();
    inventory.save_products()?;
    info!(rejected = rejected.len(), "Product updated");

    Ok(UpdateOutcome { product, rejected })
}
