use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::core::errors::{JaegerError, Result};
use crate::core::models::keyring::KeyRing;
use crate::core::traits::cipher::CipherBackend;

/// Converts between plaintext secret values and the stored ciphertext
/// blob: encrypt-then-base64 on the way in, decode-then-decrypt on the
/// way out.
///
/// Keyring unlocking is a precondition of `open`, handled by the
/// caller's `KeySource`; the codec never sees a passphrase.
pub struct PropertyCodec<'a, C: CipherBackend> {
    cipher: &'a C,
}

impl<'a, C: CipherBackend> PropertyCodec<'a, C> {
    pub fn new(cipher: &'a C) -> Self {
        Self { cipher }
    }

    /// Encrypt `plaintext` to every recipient in the keyring and
    /// base64-encode the resulting binary message.
    pub fn seal(&self, plaintext: &str, keyring: &KeyRing) -> Result<String> {
        let message = self.cipher.encrypt(plaintext.as_bytes(), keyring)?;
        Ok(STANDARD.encode(message))
    }

    /// Base64-decode `blob` and decrypt it with the keyring's
    /// identities. `name` is only used for diagnostics.
    pub fn open(&self, name: &str, blob: &str, keyring: &KeyRing) -> Result<String> {
        let message = STANDARD
            .decode(blob.trim())
            .map_err(|e| JaegerError::CiphertextDecode {
                name: name.to_string(),
                detail: e.to_string(),
            })?;

        let plaintext = self.cipher.decrypt(&message, keyring)?;

        String::from_utf8(plaintext).map_err(|_| JaegerError::DecryptionFailed {
            reason: format!("property '{name}' decrypted to non-UTF-8 data"),
        })
    }
}
