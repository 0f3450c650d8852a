//! The generic ECIES core, monomorphized once per supported curve.
//!
//! Construction: ephemeral ECDH over the recipient's curve, HKDF (or a
//! caller-supplied KDF) over the shared x-coordinate, AES-128-CTR for the
//! payload, HMAC-SHA256 over `ephemeralPublicKey || ciphertext` binding the
//! ephemeral key to the message. Decrypt verifies the tag before touching
//! the payload.

use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};
use elliptic_curve::generic_array::typenum::Unsigned;
use elliptic_curve::group::Curve as _;
use elliptic_curve::rand_core::{CryptoRng, RngCore};
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, Group, NonZeroScalar, PrimeField,
    ProjectivePoint, PublicKey,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::envelope::{self, Envelope, TAG_LEN};
use crate::error::{Error, Result};
use crate::kdf::Options;

/// AES-128-CTR key width.
pub(crate) const ENC_KEY_LEN: usize = 16;
/// HMAC-SHA256 key width.
pub(crate) const MAC_KEY_LEN: usize = 16;
/// Minimum KDF output: `encKey || macKey`.
pub const DERIVED_KEY_LEN: usize = ENC_KEY_LEN + MAC_KEY_LEN;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

// The encryption key is derived from a fresh ephemeral secret on every call,
// so a fixed IV never repeats under the same key.
const ZERO_IV: [u8; 16] = [0u8; 16];

/// Draws a uniform nonzero scalar and derives its public point.
///
/// Returns `(scalar bytes, uncompressed SEC1 point bytes)`.
pub(crate) fn generate_keypair<C, R>(rng: &mut R) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    R: RngCore + CryptoRng,
{
    // Rejection-sampled, never reduced from a wider value.
    let scalar = NonZeroScalar::<C>::random(rng);
    let point = PublicKey::<C>::from_secret_scalar(&scalar)
        .to_encoded_point(false)
        .as_bytes()
        .to_vec();
    let mut repr = scalar.to_repr();
    let secret = Zeroizing::new(repr.to_vec());
    repr.as_mut_slice().zeroize();
    Ok((secret, point))
}

pub(crate) fn encrypt<C, R>(
    recipient_point: &[u8],
    message: &[u8],
    options: &Options,
    rng: &mut R,
) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    R: RngCore + CryptoRng,
{
    let recipient = PublicKey::<C>::from_sec1_bytes(recipient_point)
        .map_err(|_| Error::InvalidPoint("recipient key is not a valid point on the curve"))?;

    // Fresh ephemeral pair for every call; the scalar never leaves this frame.
    let ephemeral = NonZeroScalar::<C>::random(rng);
    let ephemeral_point = PublicKey::<C>::from_secret_scalar(&ephemeral).to_encoded_point(false);

    let shared = ProjectivePoint::<C>::from(*recipient.as_affine()) * *ephemeral;
    let secret = shared_x_coordinate::<C>(&shared)?;

    let material = options.derive(&secret)?;
    let enc_key = &material[..ENC_KEY_LEN];
    let mac_key = &material[ENC_KEY_LEN..ENC_KEY_LEN + MAC_KEY_LEN];

    let mut ciphertext = message.to_vec();
    apply_stream_cipher(enc_key, &mut ciphertext)?;
    let tag = compute_tag(mac_key, ephemeral_point.as_bytes(), &ciphertext)?;

    Ok(envelope::seal(ephemeral_point.as_bytes(), &ciphertext, &tag))
}

pub(crate) fn decrypt<C>(
    secret_scalar: &[u8],
    ciphertext: &[u8],
    options: &Options,
) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    let point_len = 1 + 2 * FieldBytesSize::<C>::USIZE;
    let parts = Envelope::parse(ciphertext, point_len)?;

    let ephemeral = PublicKey::<C>::from_sec1_bytes(parts.ephemeral_key)
        .map_err(|_| Error::InvalidPoint("ephemeral key is not a valid point on the curve"))?;

    if secret_scalar.len() != FieldBytesSize::<C>::USIZE {
        return Err(Error::Generation("private scalar width does not match curve"));
    }
    let mut repr = FieldBytes::<C>::default();
    repr.copy_from_slice(secret_scalar);
    let scalar = Option::<NonZeroScalar<C>>::from(NonZeroScalar::from_repr(repr))
        .ok_or(Error::Generation("private scalar out of range for curve"))?;

    let shared = ProjectivePoint::<C>::from(*ephemeral.as_affine()) * *scalar;
    let secret = shared_x_coordinate::<C>(&shared)?;

    let material = options.derive(&secret)?;
    let enc_key = &material[..ENC_KEY_LEN];
    let mac_key = &material[ENC_KEY_LEN..ENC_KEY_LEN + MAC_KEY_LEN];

    // Verify-then-decrypt: no plaintext exists until the tag checks out.
    let expected = compute_tag(mac_key, parts.ephemeral_key, parts.ciphertext)?;
    if !bool::from(expected.ct_eq(parts.tag)) {
        return Err(Error::Authentication);
    }

    let mut plaintext = parts.ciphertext.to_vec();
    apply_stream_cipher(enc_key, &mut plaintext)?;
    Ok(plaintext)
}

/// Parses and validates a SEC1 point encoding (on-curve, not the
/// identity), returning the uncompressed form.
pub(crate) fn normalize_point<C>(bytes: &[u8]) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    let key = PublicKey::<C>::from_sec1_bytes(bytes)
        .map_err(|_| Error::InvalidPoint("encoding is not a valid point on the curve"))?;
    Ok(key.to_encoded_point(false).as_bytes().to_vec())
}

/// Fixed-width big-endian x-coordinate of the shared point, or
/// `DegenerateSecret` if the point is the identity.
fn shared_x_coordinate<C>(point: &ProjectivePoint<C>) -> Result<Zeroizing<Vec<u8>>>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    if bool::from(point.is_identity()) {
        return Err(Error::DegenerateSecret);
    }
    let encoded = point.to_affine().to_encoded_point(false);
    let x = encoded.x().ok_or(Error::DegenerateSecret)?;
    Ok(Zeroizing::new(x.to_vec()))
}

fn apply_stream_cipher(key: &[u8], buffer: &mut [u8]) -> Result<()> {
    let mut cipher = Aes128Ctr::new_from_slices(key, &ZERO_IV)
        .map_err(|_| Error::Cipher("invalid AES-CTR key or IV width"))?;
    cipher.apply_keystream(buffer);
    Ok(())
}

fn compute_tag(mac_key: &[u8], ephemeral_key: &[u8], ciphertext: &[u8]) -> Result<[u8; TAG_LEN]> {
    let mut mac = Hmac::<Sha256>::new_from_slice(mac_key)
        .map_err(|_| Error::Cipher("invalid MAC key width"))?;
    mac.update(ephemeral_key);
    mac.update(ciphertext);
    Ok(mac.finalize().into_bytes().into())
}
