use std::path::Path;

use crate::adapters::cipher::age_backend::AgeBackend;
use crate::cli::commands::keyring_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::codec::PropertyCodec;
use crate::core::services::property_store::PropertyStore;

/// Execute the `jaeger change` command.
///
/// Seals the new value and replaces the existing property in place;
/// fails if the name is absent.
pub fn execute(
    store_path: &Path,
    name: &str,
    value: &str,
    keyring: Option<&Path>,
    passphrase: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let mut store = PropertyStore::load(store_path)?;
    let ring = keyring_helpers::load_keyring(keyring, passphrase, verbose)?;

    let backend = AgeBackend;
    let codec = PropertyCodec::new(&backend);
    let blob = codec.seal(value, &ring)?;

    store.update(name, blob)?;
    store.save(store_path)?;

    output::success(&format!("Changed '{name}'"));
    output::success(&format!("Saved to {}", store_path.display()));

    Ok(())
}
