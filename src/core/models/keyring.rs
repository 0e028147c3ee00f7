/// Key material for one encrypt or decrypt batch.
///
/// Recipients are age public key strings (`age1...`); identities are
/// already-unlocked age secret key strings (`AGE-SECRET-KEY-...`).
/// The core never parses these — only the cipher adapter does.
///
/// A keyring is request-scoped: loaded by a `KeySource`, used once,
/// then dropped.
#[derive(Debug, Clone, Default)]
pub struct KeyRing {
    pub recipients: Vec<String>,
    pub identities: Vec<String>,
}

impl KeyRing {
    /// True if the ring carries public key material usable for sealing.
    pub fn has_recipients(&self) -> bool {
        !self.recipients.is_empty()
    }

    /// True if the ring carries private key material usable for opening.
    pub fn has_identities(&self) -> bool {
        !self.identities.is_empty()
    }
}
