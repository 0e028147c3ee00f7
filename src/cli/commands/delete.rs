use std::path::Path;

use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::property_store::PropertyStore;

/// Execute the `jaeger delete` command.
///
/// No keyring is needed; deletion never touches ciphertext.
pub fn execute(store_path: &Path, name: &str) -> Result<()> {
    let mut store = PropertyStore::load(store_path)?;
    store.delete(name)?;
    store.save(store_path)?;

    output::success(&format!("Deleted '{name}'"));
    output::success(&format!("Saved to {}", store_path.display()));

    Ok(())
}
