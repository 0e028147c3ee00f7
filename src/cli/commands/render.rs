use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::cipher::age_backend::AgeBackend;
use crate::cli::commands::keyring_helpers;
use crate::cli::output;
use crate::core::errors::{JaegerError, Result};
use crate::core::services::codec::PropertyCodec;
use crate::core::services::property_store::PropertyStore;
use crate::core::services::template_renderer::{MissingKeyPolicy, TemplateRenderer};

/// Template file extension used for base-name derivation.
pub const TEMPLATE_EXTENSION: &str = ".jgrt";
/// Store file extension paired with a template by naming convention.
pub const STORE_EXTENSION: &str = ".jgrdb";

/// Execute the `jaeger render` command.
///
/// Decrypts every property in the store, substitutes the plaintexts
/// into the template, and writes the rendered file.
pub fn execute(
    template_path: &Path,
    store_path: Option<&Path>,
    output_path: Option<&Path>,
    allow_missing: bool,
    keyring: Option<&Path>,
    passphrase: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let (store_path, output_path) = resolve_paths(template_path, store_path, output_path)?;

    let template =
        std::fs::read_to_string(template_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => JaegerError::FileNotFound {
                path: template_path.to_path_buf(),
            },
            _ => JaegerError::Io(e),
        })?;

    let store = PropertyStore::load(&store_path)?;
    let ring = keyring_helpers::load_keyring(keyring, passphrase, verbose)?;

    if !ring.has_identities() {
        return Err(JaegerError::DecryptionFailed {
            reason: "keyring contains no private key material to render with".into(),
        });
    }

    if verbose {
        output::detail(&format!("Store: {}", store_path.display()));
        output::detail(&format!("Output: {}", output_path.display()));
    }

    let backend = AgeBackend;
    let codec = PropertyCodec::new(&backend);

    // Decrypt every property into a name → plaintext mapping. First
    // match wins, so a shadowed duplicate never overrides the entry in
    // front of it.
    let sp = output::spinner(&format!("Decrypting {} properties...", store.len()));
    let mut mapping: HashMap<String, String> = HashMap::new();
    for property in store.properties() {
        if !mapping.contains_key(&property.name) {
            let plaintext = codec.open(&property.name, &property.encrypted_value, &ring)?;
            mapping.insert(property.name.clone(), plaintext);
        }
    }
    output::finish_spinner(sp, &format!("Decrypted {} properties", mapping.len()));

    let policy = if allow_missing {
        MissingKeyPolicy::Empty
    } else {
        MissingKeyPolicy::Fail
    };
    let rendered = TemplateRenderer::new(policy).render(&template, &mapping)?;

    std::fs::write(&output_path, rendered)?;
    output::success(&format!("Rendered to {}", output_path.display()));

    Ok(())
}

/// Apply the file-naming convention: a `.jgrt` template pairs with a
/// `.jgrdb` store and an output file sharing its base name.
fn resolve_paths(
    template: &Path,
    store: Option<&Path>,
    output: Option<&Path>,
) -> Result<(PathBuf, PathBuf)> {
    let base = template
        .to_str()
        .and_then(|s| s.strip_suffix(TEMPLATE_EXTENSION));

    let store_path = match (store, base) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(base)) => PathBuf::from(format!("{base}{STORE_EXTENSION}")),
        (None, None) => {
            return Err(JaegerError::InvalidArguments {
                detail: format!(
                    "no store file given and template does not end in {TEMPLATE_EXTENSION}"
                ),
            });
        }
    };

    let output_path = match (output, base) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(base)) => PathBuf::from(base),
        (None, None) => {
            return Err(JaegerError::InvalidArguments {
                detail: format!(
                    "no output file given and template does not end in {TEMPLATE_EXTENSION}"
                ),
            });
        }
    };

    Ok((store_path, output_path))
}
