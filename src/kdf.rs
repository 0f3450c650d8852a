//! KDF strategy and per-call options.
//!
//! The shared-secret x-coordinate is expanded into symmetric key material by
//! a pluggable KDF. The default is HKDF-SHA256 with the domain-separation
//! info string below; a custom strategy installed through [`Options`]
//! replaces the whole derivation and must be supplied identically at both
//! encrypt and decrypt time. A mismatch surfaces as an authentication
//! failure, never as silent corruption.

use std::sync::Arc;

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::engine::DERIVED_KEY_LEN;
use crate::error::{Error, Result};

const HKDF_INFO: &[u8] = b"ecc-ecies-key-material";

/// A KDF strategy: expands shared-secret bytes into key material.
///
/// Must be deterministic for a given input and produce at least
/// [`DERIVED_KEY_LEN`](crate::DERIVED_KEY_LEN) bytes.
pub type KdfFn = dyn Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync;

/// Per-call configuration for encrypt and decrypt.
///
/// `Options::default()` selects the built-in HKDF-SHA256 derivation.
#[derive(Clone, Default)]
pub struct Options {
    kdf: Option<Arc<KdfFn>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a custom KDF strategy.
    pub fn with_kdf<F>(mut self, kdf: F) -> Self
    where
        F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.kdf = Some(Arc::new(kdf));
        self
    }

    /// Runs the active KDF and enforces the minimum-output contract.
    pub(crate) fn derive(&self, shared_secret: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let material = match &self.kdf {
            Some(kdf) => Zeroizing::new(kdf(shared_secret)?),
            None => default_kdf(shared_secret)?,
        };
        if material.len() < DERIVED_KEY_LEN {
            return Err(Error::Kdf("KDF output shorter than required key material"));
        }
        Ok(material)
    }
}

impl core::fmt::Debug for Options {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Options")
            .field("kdf", &self.kdf.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Built-in derivation: HKDF-SHA256, no salt, expanded to exactly
/// `DERIVED_KEY_LEN` bytes.
fn default_kdf(shared_secret: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let hkdf = Hkdf::<Sha256>::new(None, shared_secret);
    let mut material = Zeroizing::new(vec![0u8; DERIVED_KEY_LEN]);
    hkdf.expand(HKDF_INFO, &mut material)
        .map_err(|_| Error::Kdf("HKDF expansion failed"))?;
    Ok(material)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kdf_is_deterministic_and_long_enough() {
        let a = Options::default().derive(b"shared secret").unwrap();
        let b = Options::default().derive(b"shared secret").unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
        assert_eq!(a.len(), DERIVED_KEY_LEN);
    }

    #[test]
    fn distinct_secrets_derive_distinct_material() {
        let a = Options::default().derive(b"secret one").unwrap();
        let b = Options::default().derive(b"secret two").unwrap();
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn short_custom_kdf_output_is_rejected() {
        let opts = Options::new().with_kdf(|_| Ok(vec![0u8; DERIVED_KEY_LEN - 1]));
        match opts.derive(b"secret") {
            Err(Error::Kdf(_)) => {}
            other => panic!("expected Kdf error, got {:?}", other),
        }
    }

    #[test]
    fn custom_kdf_errors_propagate() {
        let opts = Options::new().with_kdf(|_| Err(Error::Kdf("strategy refused")));
        assert!(matches!(opts.derive(b"secret"), Err(Error::Kdf(_))));
    }
}
