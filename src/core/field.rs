//! Parsing of editable fields.
//!
//! An edit prompt can be left blank (keep the stored value), filled with something
//! usable, or filled with garbage. [`FieldInput`] keeps those three cases apart so the
//! caller decides what each one means instead of catching parse failures.

/// Outcome of parsing one optional input field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput<T> {
    /// Blank input: leave the current value alone.
    Keep,
    /// A valid new value.
    Set(T),
    /// Non-blank input that did not parse; carries the raw text.
    Invalid(String),
}

impl<T> FieldInput<T> {
    /// Classifies `raw`, using `parse` for non-blank input.
    pub fn parse_with(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        if raw.is_empty() {
            return Self::Keep;
        }
        parse(raw).map_or_else(|| Self::Invalid(raw.to_string()), Self::Set)
    }

    /// Applies a `Set` value to `target`. Returns the raw text of an `Invalid` input.
    pub fn apply_to(self, target: &mut T) -> Option<String> {
        match self {
            Self::Keep => None,
            Self::Set(value) => {
                *target = value;
                None
            }
            Self::Invalid(raw) => Some(raw),
        }
    }
}

/// Parses a stock quantity: a non-negative base-10 integer.
#[must_use]
pub fn parse_quantity(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}
