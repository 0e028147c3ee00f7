use std::io::Read;
use std::path::{Path, PathBuf};

use age::secrecy::SecretString;

use crate::core::errors::{JaegerError, Result};
use crate::core::models::keyring::KeyRing;
use crate::core::traits::key_source::KeySource;

/// Armor header marking a passphrase-protected keyring.
const ARMOR_HEADER: &str = "-----BEGIN AGE ENCRYPTED FILE-----";
/// Binary age header, same meaning.
const BINARY_HEADER: &[u8] = b"age-encryption.org/v1";

/// Loads a keyring from a file on disk.
///
/// The plaintext format is one key per line: `age1...` recipient
/// lines, `AGE-SECRET-KEY-...` identity lines, `#` comments. A
/// passphrase-protected keyring is the same file age-encrypted with a
/// passphrase; `load` unlocks it before parsing, so the rest of the
/// pipeline only ever sees an unlocked ring.
pub enum FileKeySource {
    /// A keyring file named on the command line.
    ExplicitFile(PathBuf),
    /// Platform-default discovery: `{config_dir}/jaeger/keyring.txt`,
    /// falling back to `{config_dir}/age/keys.txt`.
    DefaultLocation,
}

impl FileKeySource {
    /// Resolve the file this source reads from.
    fn resolve_path(&self) -> Result<PathBuf> {
        match self {
            Self::ExplicitFile(path) => Ok(path.clone()),
            Self::DefaultLocation => {
                let config_dir = dirs::config_dir().ok_or_else(|| JaegerError::InvalidKeyring {
                    path: PathBuf::from("<default>"),
                    detail: "could not determine the platform config directory".into(),
                })?;

                let preferred = config_dir.join("jaeger").join("keyring.txt");
                if preferred.exists() {
                    return Ok(preferred);
                }

                let fallback = config_dir.join("age").join("keys.txt");
                if fallback.exists() {
                    return Ok(fallback);
                }

                Err(JaegerError::FileNotFound { path: preferred })
            }
        }
    }

    /// Decrypt a passphrase-protected keyring file.
    ///
    /// An absent passphrase becomes an empty-passphrase attempt; a
    /// wrong one fails here, before any property is touched.
    fn unlock(path: &Path, bytes: &[u8], passphrase: Option<&str>) -> Result<String> {
        let secret = SecretString::from(passphrase.unwrap_or("").to_owned());
        let identity = age::scrypt::Identity::new(secret);

        let armored = age::armor::ArmoredReader::new(bytes);
        let decryptor =
            age::Decryptor::new(armored).map_err(|e| JaegerError::InvalidKeyring {
                path: path.to_path_buf(),
                detail: format!("unreadable protected keyring: {e}"),
            })?;

        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn age::Identity))
            .map_err(|_| JaegerError::DecryptionFailed {
                reason: format!(
                    "could not unlock keyring {} (wrong passphrase?)",
                    path.display()
                ),
            })?;

        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| JaegerError::InvalidKeyring {
                path: path.to_path_buf(),
                detail: format!("unlocked keyring is not text: {e}"),
            })?;

        Ok(content)
    }

    /// Parse the plaintext keyring format into a `KeyRing`.
    fn parse(path: &Path, content: &str) -> Result<KeyRing> {
        let mut ring = KeyRing::default();

        for (line_number, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Strip an optional inline "# label" comment.
            let key = match line.split_once('#') {
                Some((k, _)) => k.trim(),
                None => line,
            };

            if key.starts_with("AGE-SECRET-KEY-") {
                ring.identities.push(key.to_string());
            } else if key.starts_with("age1") {
                ring.recipients.push(key.to_string());
            } else {
                return Err(JaegerError::InvalidKeyring {
                    path: path.to_path_buf(),
                    detail: format!("line {}: unrecognized key material", line_number + 1),
                });
            }
        }

        if !ring.has_recipients() && !ring.has_identities() {
            return Err(JaegerError::InvalidKeyring {
                path: path.to_path_buf(),
                detail: "no key material found".into(),
            });
        }

        // An identity implies its public half; derive recipients when
        // the file lists none explicitly.
        if !ring.has_recipients() {
            for identity_str in &ring.identities {
                let identity = identity_str
                    .parse::<age::x25519::Identity>()
                    .map_err(|e: &str| JaegerError::InvalidKeyring {
                        path: path.to_path_buf(),
                        detail: format!("invalid identity: {e}"),
                    })?;
                ring.recipients.push(identity.to_public().to_string());
            }
        }

        Ok(ring)
    }
}

impl KeySource for FileKeySource {
    fn load(&self, passphrase: Option<&str>) -> Result<KeyRing> {
        let path = self.resolve_path()?;

        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => JaegerError::FileNotFound { path: path.clone() },
            _ => JaegerError::Io(e),
        })?;

        let locked = bytes.starts_with(BINARY_HEADER)
            || std::str::from_utf8(&bytes)
                .map(|s| s.trim_start().starts_with(ARMOR_HEADER))
                .unwrap_or(false);

        let content = if locked {
            Self::unlock(&path, &bytes, passphrase)?
        } else {
            String::from_utf8(bytes).map_err(|_| JaegerError::InvalidKeyring {
                path: path.clone(),
                detail: "keyring is neither text nor an encrypted age file".into(),
            })?
        };

        Self::parse(&path, &content)
    }
}
