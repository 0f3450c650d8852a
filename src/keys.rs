//! Key pairs and the public encrypt / private decrypt entry points.

use elliptic_curve::rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::curve::{with_curve, Curve};
use crate::engine;
use crate::error::{Error, Result};
use crate::kdf::Options;

/// A public key: a point on a named curve. Freely shareable; can only
/// encrypt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    curve: Curve,
    point: Vec<u8>,
}

/// A private key: a scalar on a named curve. Never serialized by this
/// crate; can decrypt anything encrypted to its public half.
pub struct PrivateKey {
    curve: Curve,
    scalar: Zeroizing<Vec<u8>>,
}

/// A private/public pair on one curve, produced by [`KeyPair::generate`].
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl KeyPair {
    /// Generates a fresh key pair on `curve`: a uniform random scalar in
    /// `[1, order-1]` and its public point `scalar * basePoint`.
    pub fn generate<R>(curve: Curve, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        let (scalar, point) = with_curve!(curve, C => engine::generate_keypair::<C, R>(rng))?;
        Ok(Self {
            public: PublicKey { curve, point },
            private: PrivateKey { curve, scalar },
        })
    }
}

impl PublicKey {
    /// Reconstructs a public key from an uncompressed or compressed SEC1
    /// encoding, validating that it is a point on `curve` and not the
    /// identity. The key is stored uncompressed.
    pub fn from_sec1_bytes(curve: Curve, bytes: &[u8]) -> Result<Self> {
        let point = with_curve!(curve, C => engine::normalize_point::<C>(bytes))?;
        Ok(Self { curve, point })
    }

    /// The curve this key lives on.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Uncompressed SEC1 encoding of the point.
    pub fn as_bytes(&self) -> &[u8] {
        &self.point
    }

    /// Encrypts `message` to this key.
    ///
    /// The returned envelope is `ephemeralPublicKey || ciphertext || tag`
    /// and is `point_len + message.len() + TAG_LEN` bytes. Every call draws
    /// a fresh ephemeral key, so encrypting the same message twice yields
    /// different ciphertexts.
    pub fn encrypt<R>(&self, message: &[u8], options: &Options, rng: &mut R) -> Result<Vec<u8>>
    where
        R: RngCore + CryptoRng,
    {
        with_curve!(self.curve, C => engine::encrypt::<C, R>(&self.point, message, options, rng))
    }
}

impl PrivateKey {
    /// The curve this key lives on.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Decrypts an envelope produced for this key's public half.
    ///
    /// `curve` must match the curve the ciphertext was produced on; a
    /// mismatch fails deterministically. `options` must carry the same KDF
    /// strategy used at encrypt time — a different KDF is indistinguishable
    /// from tampering and fails authentication. The tag is verified before
    /// any plaintext is produced.
    pub fn decrypt(&self, ciphertext: &[u8], curve: Curve, options: &Options) -> Result<Vec<u8>> {
        if curve != self.curve {
            return Err(Error::Format("curve does not match the private key"));
        }
        with_curve!(curve, C => engine::decrypt::<C>(&self.scalar, ciphertext, options))
    }
}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The scalar stays out of debug output.
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}
