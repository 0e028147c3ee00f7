use std::path::Path;

use crate::adapters::cipher::age_backend::AgeBackend;
use crate::cli::commands::keyring_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::codec::PropertyCodec;
use crate::core::services::property_store::{DuplicatePolicy, PropertyStore};

/// Execute the `jaeger add` command.
///
/// Seals the value for every recipient in the keyring, appends the
/// property, and persists the store.
pub fn execute(
    store_path: &Path,
    name: &str,
    value: &str,
    shadow: bool,
    keyring: Option<&Path>,
    passphrase: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let mut store = PropertyStore::load(store_path)?;
    let ring = keyring_helpers::load_keyring(keyring, passphrase, verbose)?;

    let backend = AgeBackend;
    let codec = PropertyCodec::new(&backend);
    let blob = codec.seal(value, &ring)?;

    let policy = if shadow {
        DuplicatePolicy::Shadow
    } else {
        DuplicatePolicy::Reject
    };
    store.add(name, blob, policy)?;
    store.save(store_path)?;

    output::success(&format!(
        "Added '{name}', sealed for {} recipient(s)",
        ring.recipients.len()
    ));
    output::success(&format!("Saved to {}", store_path.display()));

    Ok(())
}
