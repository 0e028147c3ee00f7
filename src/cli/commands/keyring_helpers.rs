use std::path::Path;

use crate::adapters::keyrings::file_key_source::FileKeySource;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::keyring::KeyRing;
use crate::core::traits::key_source::KeySource;

/// Load (and unlock) the keyring for one operation.
///
/// An explicit `--keyring` path wins; otherwise the platform default
/// location is searched. The returned ring is fully unlocked.
pub fn load_keyring(
    keyring: Option<&Path>,
    passphrase: Option<&str>,
    verbose: bool,
) -> Result<KeyRing> {
    let source = match keyring {
        Some(path) => FileKeySource::ExplicitFile(path.to_path_buf()),
        None => FileKeySource::DefaultLocation,
    };

    let ring = source.load(passphrase)?;

    if verbose {
        output::detail(&format!(
            "Keyring: {} recipient(s), {} identity(ies)",
            ring.recipients.len(),
            ring.identities.len()
        ));
    }

    Ok(ring)
}
