/// Tri-state parsing of optional user input fields
pub mod field;
/// The in-memory inventory and its write-through persistence
pub mod inventory;
/// Order placement
pub mod order;
/// Product add/update
pub mod product;
/// Aggregate reports and display formatting
pub mod report;
/// Supplier add
pub mod supplier;

pub use inventory::Inventory;
