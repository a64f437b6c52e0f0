//! The process-wide inventory context.
//!
//! [`Inventory`] owns the three stores for the lifetime of the process. It is loaded
//! once at startup and every mutating operation writes the affected collection back to
//! disk before returning.

use crate::{
    config::AppConfig,
    entities::{Order, Product, Record, Supplier},
    errors::Result,
    storage::{self, Store},
};
use std::path::Path;
use tracing::{info, warn};

/// Products, suppliers and orders held in memory, plus where they are persisted.
#[derive(Debug)]
pub struct Inventory {
    config: AppConfig,
    pub(crate) products: Store<Product>,
    pub(crate) suppliers: Store<Supplier>,
    pub(crate) orders: Vec<Order>,
    missing_files: Vec<&'static str>,
}

impl Inventory {
    /// Loads all three collections from the files named in `config`.
    ///
    /// Absent files start out empty and are remembered in [`Inventory::missing_files`].
    ///
    /// # Errors
    /// Returns `Error::Io` or `Error::MalformedRecord` if an existing file cannot be read
    /// or parsed.
    pub fn open(config: AppConfig) -> Result<Self> {
        let mut missing_files = Vec::new();
        let products = load_or_empty::<Product>(&config.products_path(), &mut missing_files)?;
        let suppliers = load_or_empty::<Supplier>(&config.suppliers_path(), &mut missing_files)?;
        let orders = load_or_empty::<Order>(&config.orders_path(), &mut missing_files)?;

        let inventory = Self {
            config,
            products: Store::from_records(products),
            suppliers: Store::from_records(suppliers),
            orders,
            missing_files,
        };
        inventory.warn_dangling_references();

        info!(
            products = inventory.products.len(),
            suppliers = inventory.suppliers.len(),
            orders = inventory.orders.len(),
            "Inventory loaded"
        );
        Ok(inventory)
    }

    /// Settings the inventory was opened with.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Products in insertion order.
    #[must_use]
    pub const fn products(&self) -> &Store<Product> {
        &self.products
    }

    /// Suppliers in insertion order.
    #[must_use]
    pub const fn suppliers(&self) -> &Store<Supplier> {
        &self.suppliers
    }

    /// Orders in the order they were placed.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Record kinds ("product", "supplier", "order") whose file did not exist at open.
    #[must_use]
    pub fn missing_files(&self) -> &[&'static str] {
        &self.missing_files
    }

    pub(crate) fn save_products(&self) -> Result<()> {
        storage::save(&self.config.products_path(), &self.products)
    }

    pub(crate) fn save_suppliers(&self) -> Result<()> {
        storage::save(&self.config.suppliers_path(), &self.suppliers)
    }

    pub(crate) fn save_orders(&self) -> Result<()> {
        storage::save(&self.config.orders_path(), &self.orders)
    }

    /// Orders are only checked against products and suppliers when placed; files edited
    /// by hand can leave them pointing nowhere.
    fn warn_dangling_references(&self) {
        for order in &self.orders {
            if !self.products.contains(&order.product_id) {
                warn!(order_id = %order.id, product_id = %order.product_id, "Order references unknown product");
            }
            if !self.suppliers.contains(&order.supplier_id) {
                warn!(order_id = %order.id, supplier_id = %order.supplier_id, "Order references unknown supplier");
            }
        }
    }
}

fn load_or_empty<T: Record>(path: &Path, missing: &mut Vec<&'static str>) -> Result<Vec<T>> {
    Ok(storage::load(path)?.unwrap_or_else(|| {
        missing.push(T::KIND);
        Vec::new()
    }))
}
