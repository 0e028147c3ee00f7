use std::path::Path;

use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::property_store::PropertyStore;

/// Execute the `jaeger init` command.
///
/// Creates an empty store document, refusing to overwrite one that
/// already exists.
pub fn execute(store_path: &Path) -> Result<()> {
    PropertyStore::init(store_path)?;

    output::success(&format!("Created empty store {}", store_path.display()));
    println!("\n  Add a property with 'jaeger add {} <name> <value>'.", store_path.display());

    Ok(())
}
