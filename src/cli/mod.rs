//! Interactive text interface.
//!
//! The menu loop reads a numbered choice, dispatches to a command handler, and repeats
//! until the user exits or input ends. Handlers print rejections and carry on; only
//! faults (I/O errors) propagate out of [`run_session`].

/// Menu handlers grouped by entity
pub mod commands;
/// Prompt/response console abstraction
pub mod console;
/// Menu choices and the dispatch loop
pub mod menu;

pub use console::Console;
pub use menu::{MenuChoice, run_menu};

use crate::{core::Inventory, errors::Error, errors::Result};
use std::io::{BufRead, Write};
use tracing::warn;

/// Prints first-run notices, then runs the menu until exit.
///
/// # Errors
/// Propagates I/O failures from the console or the record files.
pub fn run_session<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    for kind in inventory.missing_files() {
        console.say(format!(
            "No {kind}s file found. Starting with an empty {kind} list."
        ))?;
    }
    run_menu(inventory, console)
}

/// Console message for a rejected operation.
#[must_use]
pub fn rejection_message(err: &Error) -> String {
    match err {
        Error::DuplicateProduct { .. } => {
            "This product ID already exists. Please try updating the product instead.".to_string()
        }
        Error::ProductNotFound { .. } => "Product not found. Please add it first.".to_string(),
        Error::DuplicateSupplier { .. } => "This supplier ID already exists.".to_string(),
        Error::SupplierNotFound { .. } => {
            "Supplier not found. Please add the supplier first.".to_string()
        }
        Error::InvalidQuantity { .. } => "Invalid quantity input. Please try again.".to_string(),
        Error::InvalidPrice { .. } => "Invalid price input. Please try again.".to_string(),
        Error::InvalidText { field, .. } => {
            format!("Invalid {field}: '|' and line breaks are not allowed.")
        }
        Error::InsufficientStock { .. } => {
            "Not enough stock available to fulfill this order.".to_string()
        }
        other => other.to_string(),
    }
}

/// Prints the message for a user error, or hands a fault back to the caller.
pub(crate) fn report_rejection<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: Error,
) -> Result<()> {
    if err.is_user_error() {
        warn!(error = %err, "Operation rejected");
        console.say(rejection_message(&err))
    } else {
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::AppConfig;
    use crate::test_utils::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            rejection_message(&Error::InsufficientStock {
                product_id: "P1".into(),
                requested: 9,
                available: 1,
            }),
            "Not enough stock available to fulfill this order."
        );
        assert_eq!(
            rejection_message(&Error::InvalidText {
                field: "name",
                input: "a|b".into(),
            }),
            "Invalid name: '|' and line breaks are not allowed."
        );
    }

    #[test]
    fn test_faults_are_not_swallowed() {
        let mut console = Console::new(std::io::Cursor::new(""), Vec::new());
        let result = report_rejection(&mut console, Error::Io(std::io::Error::other("disk full")));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_first_run_scenario() -> Result<()> {
        let (dir, mut inventory) = setup_test_inventory()?;
        let script = "1\nP1\nWidget\n9.99\n20\n\
                      3\nS1\nAcme\n555-1234\n\
                      4\nP1\nS1\n5\n\
                      8\n\
                      10\n";

        let output = run_handler(&mut inventory, script, run_session)?;

        assert!(output.starts_with(
            "No products file found. Starting with an empty product list.\n\
             No suppliers file found. Starting with an empty supplier list.\n\
             No orders file found. Starting with an empty order list.\n"
        ));
        assert!(output.contains("Product 'Widget' added successfully!\n"));
        assert!(output.contains("Supplier 'Acme' added successfully!\n"));
        assert!(output.contains("Order placed successfully for 5 of Widget!\n"));
        assert!(output.contains("Product Widget (ID: P1) - 5 units sold.\n"));
        assert!(output.ends_with("Exiting. Goodbye!\n"));

        assert_eq!(read_products_file(&inventory)?, "P1|Widget|9.99|15\n");
        assert_eq!(read_suppliers_file(&inventory)?, "S1|Acme|555-1234\n");
        assert_eq!(read_orders_file(&inventory)?, "1|P1|5|S1\n");

        // A fresh process sees the same state.
        let reopened = Inventory::open(AppConfig::with_data_dir(dir.path()))?;
        assert_eq!(reopened.products().get("P1").unwrap().quantity, 15);
        assert_eq!(reopened.orders().len(), 1);
        assert!(reopened.missing_files().is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_choice_then_end_of_input() -> Result<()> {
        let (_dir, mut inventory) = setup_with_product()?;

        let output = run_handler(&mut inventory, "42\n", run_menu)?;

        assert!(output.contains("Invalid choice. Please try again.\n"));
        assert_eq!(output.matches("\nMenu:\n").count(), 2);
        assert!(output.ends_with("Exiting. Goodbye!\n"));
        Ok(())
    }

    #[test]
    fn test_stray_bytes_at_menu_prompt_do_not_end_session() -> Result<()> {
        let (_dir, mut inventory) = setup_with_product()?;
        let mut console = Console::new(std::io::Cursor::new(b"\xff\n5\n10\n".to_vec()), Vec::new());

        run_menu(&mut inventory, &mut console)?;

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Invalid choice. Please try again.\n"));
        assert!(output.contains("P1: Widget - RM9.99, 20 units\n"));
        assert!(output.ends_with("Exiting. Goodbye!\n"));
        Ok(())
    }

    #[test]
    fn test_menu_lists_ten_options() -> Result<()> {
        let (_dir, mut inventory) = setup_with_product()?;

        let output = run_handler(&mut inventory, "10\n", run_menu)?;

        assert!(output.contains("1. Add a new product\n"));
        assert!(output.contains("9. Generate supplier orders report\n"));
        assert!(output.contains("10. Exit\nEnter your choice (1-10): "));
        Ok(())
    }
}
