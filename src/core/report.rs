//! Report generation business logic.
//!
//! Reports are read-only folds over the in-memory stores. They return structured rows in
//! first-appearance order; the `format_*` helpers turn rows into the lines the console
//! prints.

use crate::{
    entities::{Order, Product, Supplier},
    storage::Store,
};
use std::collections::HashMap;

/// Placeholder for a name that cannot be resolved (order referencing a missing record).
pub const UNKNOWN_NAME: &str = "<unknown>";

/// Products whose quantity is at or below `threshold`, in store order.
#[must_use]
pub fn low_stock(products: &Store<Product>, threshold: u32) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.quantity <= threshold)
        .collect()
}

/// Total units ordered for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesLine<'a> {
    /// Product named by the orders
    pub product_id: &'a str,
    /// `None` when the product is no longer in the store
    pub product_name: Option<&'a str>,
    /// Sum of order quantities
    pub units_sold: u64,
}

/// Number of orders placed with one supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierOrdersLine<'a> {
    /// Supplier named by the orders
    pub supplier_id: &'a str,
    /// `None` when the supplier is no longer in the store
    pub supplier_name: Option<&'a str>,
    /// Number of orders, regardless of quantity
    pub order_count: u64,
}

/// Sums `amount` per key, keeping keys in the order they first appear.
fn tally<'a>(
    orders: &'a [Order],
    key: impl Fn(&'a Order) -> &'a str,
    amount: impl Fn(&Order) -> u64,
) -> Vec<(&'a str, u64)> {
    let mut totals: Vec<(&str, u64)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for order in orders {
        let id = key(order);
        let slot = *slots.entry(id).or_insert_with(|| {
            totals.push((id, 0));
            totals.len() - 1
        });
        totals[slot].1 += amount(order);
    }
    totals
}

/// Units sold per product, for every product with at least one order.
#[must_use]
pub fn sales_by_product<'a>(
    orders: &'a [Order],
    products: &'a Store<Product>,
) -> Vec<SalesLine<'a>> {
    tally(
        orders,
        |order| order.product_id.as_str(),
        |order| u64::from(order.quantity),
    )
    .into_iter()
    .map(|(product_id, units_sold)| SalesLine {
        product_id,
        product_name: products.get(product_id).map(|p| p.name.as_str()),
        units_sold,
    })
    .collect()
}

/// Orders placed per supplier, for every supplier with at least one order.
#[must_use]
pub fn orders_by_supplier<'a>(
    orders: &'a [Order],
    suppliers: &'a Store<Supplier>,
) -> Vec<SupplierOrdersLine<'a>> {
    tally(orders, |order| order.supplier_id.as_str(), |_| 1)
        .into_iter()
        .map(|(supplier_id, order_count)| SupplierOrdersLine {
            supplier_id,
            supplier_name: suppliers.get(supplier_id).map(|s| s.name.as_str()),
            order_count,
        })
        .collect()
}

/// Formats a product for the inventory listing, e.g. `P1: Widget - RM9.99, 20 units`.
#[must_use]
pub fn format_product_line(product: &Product, currency: &str) -> String {
    format!(
        "{}: {} - {currency}{:.2}, {} units",
        product.id, product.name, product.price, product.quantity
    )
}

/// Formats a supplier for the supplier listing, e.g. `S1: Acme - Contact: 555-1234`.
#[must_use]
pub fn format_supplier_line(supplier: &Supplier) -> String {
    format!(
        "{}: {} - Contact: {}",
        supplier.id, supplier.name, supplier.contact_info
    )
}

/// Formats one low stock report entry.
#[must_use]
pub fn format_low_stock_line(product: &Product) -> String {
    format!(
        "{} (ID: {}) - {} units left.",
        product.name, product.id, product.quantity
    )
}

/// Formats one sales report entry; a product missing from the store prints as `<unknown>`.
#[must_use]
pub fn format_sales_line(line: &SalesLine<'_>) -> String {
    format!(
        "Product {} (ID: {}) - {} units sold.",
        line.product_name.unwrap_or(UNKNOWN_NAME),
        line.product_id,
        line.units_sold
    )
}

/// Formats one supplier orders report entry.
#[must_use]
pub fn format_supplier_orders_line(line: &SupplierOrdersLine<'_>) -> String {
    format!(
        "Supplier {} (ID: {}) - {} orders placed.",
        line.supplier_name.unwrap_or(UNKNOWN_NAME),
        line.supplier_id,
        line.order_count
    )
}
