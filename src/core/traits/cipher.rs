use crate::core::errors::Result;
use crate::core::models::keyring::KeyRing;

/// Port for encryption/decryption backends.
///
/// Implementations live in `adapters::cipher`. The core layer only
/// depends on this trait, never on a concrete backend.
pub trait CipherBackend: Send + Sync {
    /// Encrypt plaintext to every recipient in the keyring.
    fn encrypt(&self, plaintext: &[u8], keyring: &KeyRing) -> Result<Vec<u8>>;

    /// Decrypt ciphertext using whichever identity in the keyring
    /// matches the message. The keyring must already be unlocked.
    fn decrypt(&self, ciphertext: &[u8], keyring: &KeyRing) -> Result<Vec<u8>>;

    /// Human-readable name of this backend (e.g. "age").
    fn name(&self) -> &str;
}
