//! Supplier entity.

use super::Record;

/// A supplier orders can be placed against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Supplier {
    /// Unique identifier chosen by the user (e.g., "S1")
    pub id: String,
    /// Company or contact name
    pub name: String,
    /// Free-text contact details (phone, email, address)
    pub contact_info: String,
}

impl Supplier {
    /// Creates a supplier record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact_info: contact_info.into(),
        }
    }
}

impl Record for Supplier {
    const KIND: &'static str = "supplier";
    const FIELD_COUNT: usize = 3;

    fn key(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.contact_info.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let [id, name, contact_info] = fields else {
            return Err(format!("expected 3 fields, found {}", fields.len()));
        };
        Ok(Self::new(*id, *name, *contact_info))
    }
}
