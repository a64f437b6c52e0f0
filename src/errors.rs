//! Unified error type for inventory operations.
//!
//! Rejections of user input (duplicate IDs, unknown references, unparsable numbers,
//! insufficient stock) and genuine faults (I/O failures, corrupt record files) share
//! one enum so that `?` works everywhere; [`Error::is_user_error`] tells them apart.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in the inventory.
#[derive(Debug, Error)]
#[allow(missing_docs)] // variant fields are named after what they hold
pub enum Error {
    /// Unreadable or invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Reading or writing a record file or the console failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A product with this ID already exists
    #[error("Product '{id}' already exists")]
    DuplicateProduct { id: String },

    /// No product with this ID
    #[error("Product '{id}' not found")]
    ProductNotFound { id: String },

    /// A supplier with this ID already exists
    #[error("Supplier '{id}' already exists")]
    DuplicateSupplier { id: String },

    /// No supplier with this ID
    #[error("Supplier '{id}' not found")]
    SupplierNotFound { id: String },

    /// Not a finite, non-negative decimal
    #[error("Invalid price: '{input}'")]
    InvalidPrice { input: String },

    /// Not a valid quantity for the operation
    #[error("Invalid quantity: '{input}'")]
    InvalidQuantity { input: String },

    /// Text containing `|` or a line break, which the record files cannot hold
    #[error("Invalid {field}: '{input}' contains a reserved character")]
    InvalidText { field: &'static str, input: String },

    /// An order asked for more units than are in stock
    #[error(
        "Insufficient stock for product '{product_id}': requested {requested}, available {available}"
    )]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// A record file line could not be parsed (`line` is 1-based)
    #[error("Malformed record in {} at line {line}: {reason}", .file.display())]
    MalformedRecord {
        file: PathBuf,
        line: usize,
        reason: String,
    },
}

impl Error {
    /// Returns true for rejections caused by user input, which leave all state untouched.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::Config { .. } | Self::Io(_) | Self::MalformedRecord { .. }
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
