//! Main menu.

use crate::{
    cli::{
        Console,
        commands::{order, product, report, supplier},
    },
    core::Inventory,
    errors::Result,
};
use std::io::{BufRead, Write};
use tracing::debug;

/// One entry of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1
    AddProduct,
    /// 2
    UpdateProduct,
    /// 3
    AddSupplier,
    /// 4
    PlaceOrder,
    /// 5
    DisplayProducts,
    /// 6
    DisplaySuppliers,
    /// 7
    LowStockReport,
    /// 8
    SalesReport,
    /// 9
    SupplierOrdersReport,
    /// 10, also taken at end of input
    Exit,
}

impl MenuChoice {
    /// All choices in menu order; option `n` is `ALL[n - 1]`.
    pub const ALL: [Self; 10] = [
        Self::AddProduct,
        Self::UpdateProduct,
        Self::AddSupplier,
        Self::PlaceOrder,
        Self::DisplayProducts,
        Self::DisplaySuppliers,
        Self::LowStockReport,
        Self::SalesReport,
        Self::SupplierOrdersReport,
        Self::Exit,
    ];

    /// Parses the number typed at the menu prompt.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    /// Text shown next to the option number.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddProduct => "Add a new product",
            Self::UpdateProduct => "Update product details",
            Self::AddSupplier => "Add a new supplier",
            Self::PlaceOrder => "Place an order",
            Self::DisplayProducts => "Display products inventory",
            Self::DisplaySuppliers => "Display suppliers inventory",
            Self::LowStockReport => "Generate low stock report",
            Self::SalesReport => "Generate sales report",
            Self::SupplierOrdersReport => "Generate supplier orders report",
            Self::Exit => "Exit",
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("\nMenu:")?;
    for (index, choice) in MenuChoice::ALL.iter().enumerate() {
        console.say(format!("{}. {}", index + 1, choice.label()))?;
    }
    Ok(())
}

/// Shows the menu and dispatches choices until Exit or end of input.
///
/// # Errors
/// Propagates I/O failures from the console or the record files.
pub fn run_menu<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        print_menu(console)?;
        let Some(input) = console.prompt("Enter your choice (1-10): ")? else {
            console.say("")?;
            break;
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            console.say("Invalid choice. Please try again.")?;
            continue;
        };
        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::AddProduct => product::add_product(inventory, console)?,
            MenuChoice::UpdateProduct => product::update_product(inventory, console)?,
            MenuChoice::AddSupplier => supplier::add_supplier(inventory, console)?,
            MenuChoice::PlaceOrder => order::place_order(inventory, console)?,
            MenuChoice::DisplayProducts => product::display_products(inventory, console)?,
            MenuChoice::DisplaySuppliers => supplier::display_suppliers(inventory, console)?,
            MenuChoice::LowStockReport => report::low_stock_report(inventory, console)?,
            MenuChoice::SalesReport => report::sales_report(inventory, console)?,
            MenuChoice::SupplierOrdersReport => {
                report::supplier_orders_report(inventory, console)?;
            }
            MenuChoice::Exit => break,
        }
    }

    console.say("Exiting. Goodbye!")
}
