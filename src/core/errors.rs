use std::path::PathBuf;

/// All domain errors for Jaeger.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum JaegerError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Store already exists: {path}\n\n  \
         'jaeger init' refuses to overwrite an existing store.\n  \
         Delete the file first if you really want to start over."
    )]
    StoreAlreadyExists { path: PathBuf },

    #[error(
        "Failed to parse store {path}: {detail}\n\n  \
         Expected a JSON document with a \"Properties\" array of\n  \
         {{ \"Name\": ..., \"EncryptedValue\": ... }} objects."
    )]
    StoreParse { path: PathBuf, detail: String },

    #[error(
        "Property '{name}' not found in the store\n\n  \
         Run 'jaeger list <store>' to see available properties."
    )]
    PropertyNotFound { name: String },

    #[error(
        "Property '{name}' already exists in the store\n\n  \
         Solutions:\n    \
         → Replace its value: jaeger change <store> {name} <value>\n    \
         → Append a shadowed duplicate anyway: jaeger add --shadow"
    )]
    DuplicateProperty { name: String },

    #[error("Encryption failed: {reason}")]
    EncryptionFailed { reason: String },

    #[error(
        "Decryption failed: {reason}\n\n  \
         The passphrase may be wrong, the ciphertext corrupted, or the\n  \
         keyring may not contain the private key this value was encrypted to."
    )]
    DecryptionFailed { reason: String },

    #[error("Property '{name}' holds malformed base64 ciphertext: {detail}")]
    CiphertextDecode { name: String, detail: String },

    #[error("Invalid keyring {path}: {detail}")]
    InvalidKeyring { path: PathBuf, detail: String },

    #[error(
        "Template references properties missing from the store: {names}\n\n  \
         Solutions:\n    \
         → Add them: jaeger add <store> <name> <value>\n    \
         → Render them as empty strings: jaeger render --allow-missing"
    )]
    MissingPlaceholder { names: String },

    #[error(
        "Invalid arguments: {detail}\n\n  \
         Name the store and output files explicitly, or use the\n  \
         '<base>.jgrt' / '<base>.jgrdb' naming convention."
    )]
    InvalidArguments { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JaegerError>;
