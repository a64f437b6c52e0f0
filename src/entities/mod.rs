//! Entity module - record types for the three persisted collections.
//!
//! Each entity is a plain struct plus a [`Record`] implementation describing how it
//! maps onto one pipe-delimited line of its backing file.

pub mod order;
pub mod product;
pub mod supplier;

pub use order::Order;
pub use product::Product;
pub use supplier::Supplier;

use crate::errors::{Error, Result};

/// Field separator used by every record file.
pub const DELIMITER: char = '|';

/// A type that is persisted as one delimited line per instance.
pub trait Record: Sized {
    /// Human-readable kind, used in load notices ("product", "supplier", "order").
    const KIND: &'static str;
    /// Number of fields on a well-formed line.
    const FIELD_COUNT: usize;

    /// The identity of the record within its store.
    fn key(&self) -> &str;

    /// Fields in file order, not yet joined.
    fn to_fields(&self) -> Vec<String>;

    /// Rebuilds a record from exactly `FIELD_COUNT` fields.
    ///
    /// # Errors
    /// Returns a short reason when a typed field does not parse.
    fn from_fields(fields: &[&str]) -> std::result::Result<Self, String>;

    /// Serializes the record as one line, without the trailing newline.
    fn to_line(&self) -> String {
        self.to_fields().join(DELIMITER.to_string().as_str())
    }
}

/// Rejects text that would break the line format if written verbatim.
///
/// # Errors
/// Returns `Error::InvalidText` if `value` contains the delimiter or a line break.
pub fn validate_text(field: &'static str, value: &str) -> Result<()> {
    if value.contains([DELIMITER, '\n', '\r']) {
        return Err(Error::InvalidText {
            field,
            input: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_accepts_plain_values() {
        assert!(validate_text("name", "Widget 3000").is_ok());
        assert!(validate_text("contact", "").is_ok());
    }

    #[test]
    fn test_validate_text_rejects_delimiter_and_newlines() {
        assert!(matches!(
            validate_text("name", "a|b"),
            Err(Error::InvalidText { field: "name", .. })
        ));
        assert!(validate_text("contact", "line\nbreak").is_err());
        assert!(validate_text("contact", "carriage\r").is_err());
    }
}
