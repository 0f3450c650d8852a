//! Elliptic Curve Integrated Encryption Scheme (ECIES) over a pluggable set
//! of named curves.
//!
//! Hybrid public-key encryption: an ephemeral ECDH agreement per message, a
//! KDF (HKDF-SHA256 by default, replaceable per call) expanding the shared
//! x-coordinate into key material, AES-128-CTR for the payload, and
//! HMAC-SHA256 authenticating the ephemeral key together with the
//! ciphertext. Decryption verifies the tag before releasing any plaintext.
//!
//! Supported curves: NIST P-224, P-256, P-384, P-521, and secp256k1, with
//! arithmetic supplied by the RustCrypto curve crates.
//!
//! ```
//! use ecc::{Curve, KeyPair, Options};
//! use rand::rngs::OsRng;
//!
//! # fn main() -> ecc::Result<()> {
//! let mut rng = OsRng;
//! let pair = KeyPair::generate(Curve::P256, &mut rng)?;
//!
//! let ciphertext = pair.public.encrypt(b"hello", &Options::default(), &mut rng)?;
//! let plaintext = pair.private.decrypt(&ciphertext, Curve::P256, &Options::default())?;
//! assert_eq!(plaintext, b"hello");
//! # Ok(())
//! # }
//! ```
//!
//! The engine is stateless: keys and options are immutable once built, so
//! any number of threads may encrypt and decrypt concurrently.

mod curve;
mod engine;
mod envelope;
mod kdf;
mod keys;

pub mod error;

pub use curve::Curve;
pub use engine::DERIVED_KEY_LEN;
pub use envelope::TAG_LEN;
pub use error::{Error, Result};
pub use kdf::{KdfFn, Options};
pub use keys::{KeyPair, PrivateKey, PublicKey};
