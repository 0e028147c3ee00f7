use crate::core::errors::Result;
use crate::core::models::keyring::KeyRing;

/// Port for keyring discovery and loading.
///
/// Unlocking is part of loading: a passphrase-protected keyring either
/// comes back fully unlocked or the load fails. The core never touches
/// filesystem defaults or environment state directly.
pub trait KeySource {
    /// Load (and if necessary unlock) a keyring.
    ///
    /// `passphrase` of `None` means an empty-passphrase attempt is made
    /// against a protected keyring rather than prompting.
    fn load(&self, passphrase: Option<&str>) -> Result<KeyRing>;
}
