use std::io::{Read, Write};

use crate::core::errors::{JaegerError, Result};
use crate::core::models::keyring::KeyRing;
use crate::core::traits::cipher::CipherBackend;

/// Age encryption backend using X25519 + ChaCha20-Poly1305.
///
/// Produces the binary age message format; the property codec base64s
/// it for storage, so no ASCII armor is involved here.
pub struct AgeBackend;

impl AgeBackend {
    /// Parse the keyring's recipient strings into age X25519 recipients.
    fn parse_recipients(keyring: &KeyRing) -> Result<Vec<age::x25519::Recipient>> {
        keyring
            .recipients
            .iter()
            .map(|r| {
                r.parse::<age::x25519::Recipient>().map_err(|e: &str| {
                    JaegerError::EncryptionFailed {
                        reason: format!("Invalid recipient key '{r}': {e}"),
                    }
                })
            })
            .collect()
    }

    /// Parse the keyring's identity strings into age X25519 identities.
    fn parse_identities(keyring: &KeyRing) -> Result<Vec<age::x25519::Identity>> {
        keyring
            .identities
            .iter()
            .map(|i| {
                i.parse::<age::x25519::Identity>().map_err(|e: &str| {
                    JaegerError::DecryptionFailed {
                        reason: format!("Invalid identity in keyring: {e}"),
                    }
                })
            })
            .collect()
    }
}

impl CipherBackend for AgeBackend {
    fn encrypt(&self, plaintext: &[u8], keyring: &KeyRing) -> Result<Vec<u8>> {
        if !keyring.has_recipients() {
            return Err(JaegerError::EncryptionFailed {
                reason: "keyring contains no usable public key material".into(),
            });
        }

        let recipients = Self::parse_recipients(keyring)?;

        let encryptor =
            age::Encryptor::with_recipients(recipients.iter().map(|r| r as &dyn age::Recipient))
                .map_err(|e| JaegerError::EncryptionFailed {
                    reason: format!("{e}"),
                })?;

        let mut output = Vec::new();
        let mut writer =
            encryptor
                .wrap_output(&mut output)
                .map_err(|e| JaegerError::EncryptionFailed {
                    reason: format!("Encryption stream failed: {e}"),
                })?;

        writer
            .write_all(plaintext)
            .map_err(|e| JaegerError::EncryptionFailed {
                reason: format!("Write failed: {e}"),
            })?;

        writer.finish().map_err(|e| JaegerError::EncryptionFailed {
            reason: format!("Encryption finish failed: {e}"),
        })?;

        Ok(output)
    }

    fn decrypt(&self, ciphertext: &[u8], keyring: &KeyRing) -> Result<Vec<u8>> {
        if !keyring.has_identities() {
            return Err(JaegerError::DecryptionFailed {
                reason: "keyring contains no private key material".into(),
            });
        }

        let identities = Self::parse_identities(keyring)?;

        let decryptor =
            age::Decryptor::new(ciphertext).map_err(|e| JaegerError::DecryptionFailed {
                reason: format!("not a valid encrypted message: {e}"),
            })?;

        let mut reader = decryptor
            .decrypt(identities.iter().map(|i| i as &dyn age::Identity))
            .map_err(|e| JaegerError::DecryptionFailed {
                reason: format!("{e}"),
            })?;

        let mut plaintext = Vec::new();
        reader
            .read_to_end(&mut plaintext)
            .map_err(|e| JaegerError::DecryptionFailed {
                reason: format!("Read decrypted data failed: {e}"),
            })?;

        Ok(plaintext)
    }

    fn name(&self) -> &str {
        "age"
    }
}
