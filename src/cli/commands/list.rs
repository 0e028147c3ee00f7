use std::path::Path;

use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::property_store::PropertyStore;

/// Execute the `jaeger list` command.
///
/// Prints property names only; values stay sealed.
pub fn execute(store_path: &Path) -> Result<()> {
    let store = PropertyStore::load(store_path)?;

    output::header(&format!(
        "{} — {} propert{}",
        store_path.display(),
        store.len(),
        if store.len() == 1 { "y" } else { "ies" }
    ));

    for property in store.properties() {
        println!("  {}", property.name);
    }

    Ok(())
}
