//! Shared test utilities.
//!
//! Every helper builds an [`Inventory`] rooted in a fresh temporary directory. Keep the
//! returned `TempDir` alive for the duration of the test; dropping it deletes the files.

use crate::{
    cli::Console,
    config::AppConfig,
    core::{self, Inventory},
    entities::{Product, Supplier},
    errors::Result,
};
use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Console reading from a scripted input and capturing output.
pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Installs a test-writer subscriber. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// Opens an empty inventory in a new temporary directory.
pub fn setup_test_inventory() -> Result<(TempDir, Inventory)> {
    init_test_tracing();
    let dir = tempfile::tempdir()?;
    let inventory = Inventory::open(AppConfig::with_data_dir(dir.path()))?;
    Ok((dir, inventory))
}

/// Inventory holding product `P1|Widget|9.99|20`.
pub fn setup_with_product() -> Result<(TempDir, Inventory)> {
    let (dir, mut inventory) = setup_test_inventory()?;
    core::product::add_product(&mut inventory, Product::new("P1", "Widget", 9.99, 20))?;
    Ok((dir, inventory))
}

/// Inventory holding supplier `S1|Acme|555-1234`.
pub fn setup_with_supplier() -> Result<(TempDir, Inventory)> {
    let (dir, mut inventory) = setup_test_inventory()?;
    core::supplier::add_supplier(&mut inventory, Supplier::new("S1", "Acme", "555-1234"))?;
    Ok((dir, inventory))
}

/// Inventory holding both `P1` and `S1`.
pub fn setup_with_product_and_supplier() -> Result<(TempDir, Inventory)> {
    let (dir, mut inventory) = setup_with_product()?;
    core::supplier::add_supplier(&mut inventory, Supplier::new("S1", "Acme", "555-1234"))?;
    Ok((dir, inventory))
}

/// Runs one command handler against scripted `input`, returning everything it printed.
pub fn run_handler<F>(inventory: &mut Inventory, input: &str, handler: F) -> Result<String>
where
    F: FnOnce(&mut Inventory, &mut TestConsole) -> Result<()>,
{
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    handler(inventory, &mut console)?;
    Ok(String::from_utf8_lossy(&console.into_output()).into_owned())
}

/// Raw contents of the product file.
pub fn read_products_file(inventory: &Inventory) -> Result<String> {
    Ok(std::fs::read_to_string(inventory.config().products_path())?)
}

/// Raw contents of the supplier file.
pub fn read_suppliers_file(inventory: &Inventory) -> Result<String> {
    Ok(std::fs::read_to_string(inventory.config().suppliers_path())?)
}

/// Raw contents of the order file.
pub fn read_orders_file(inventory: &Inventory) -> Result<String> {
    Ok(std::fs::read_to_string(inventory.config().orders_path())?)
}

/// Log sink shared between a test and the subscriber installed by [`capture_logs`].
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Everything logged so far.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `body` with a thread-local subscriber that records `warn` and above.
pub fn capture_logs<T>(body: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, body);
    (result, buffer.contents())
}
