use dotenvy::dotenv;
use inventory_buddy::{
    cli::{self, Console},
    config,
    core::Inventory,
    errors::Result,
};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Load .env first so RUST_LOG and INVENTORY_* can come from it
    dotenv().ok();

    // 2. Initialize tracing on stderr; stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // 3. Resolve configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Load the three record files
    let mut inventory = Inventory::open(app_config)
        .inspect(|_| info!("Inventory opened."))
        .inspect_err(|e| error!("Failed to load inventory: {}", e))?;

    // 5. Run the menu until exit or end of input
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    cli::run_session(&mut inventory, &mut console)
        .inspect_err(|e| error!("Session aborted: {}", e))
}
