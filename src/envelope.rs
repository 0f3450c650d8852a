//! Wire codec for the ciphertext envelope.
//!
//! Layout: `ephemeralPublicKey || symmetricCiphertext || authenticationTag`.
//! Framing is fixed, not length-prefixed: the ephemeral key width is
//! determined by the curve's uncompressed point encoding and the tag width
//! by the MAC primitive, so everything in between is the symmetric
//! ciphertext. An envelope round-trips byte for byte.

use crate::error::{Error, Result};

/// Width in bytes of the authentication tag (HMAC-SHA256).
pub const TAG_LEN: usize = 32;

/// Borrowed view of a parsed envelope.
pub(crate) struct Envelope<'a> {
    pub ephemeral_key: &'a [u8],
    pub ciphertext: &'a [u8],
    pub tag: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Splits `bytes` by the fixed framing for a curve whose uncompressed
    /// point encoding is `point_len` bytes wide.
    pub fn parse(bytes: &'a [u8], point_len: usize) -> Result<Self> {
        if bytes.len() < point_len + TAG_LEN {
            return Err(Error::Format("ciphertext shorter than envelope minimum"));
        }
        let (ephemeral_key, rest) = bytes.split_at(point_len);
        let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);
        Ok(Self {
            ephemeral_key,
            ciphertext,
            tag,
        })
    }
}

/// Assembles the envelope from its three components.
pub(crate) fn seal(ephemeral_key: &[u8], ciphertext: &[u8], tag: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ephemeral_key.len() + ciphertext.len() + tag.len());
    out.extend_from_slice(ephemeral_key);
    out.extend_from_slice(ciphertext);
    out.extend_from_slice(tag);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINT_LEN: usize = 65;

    #[test]
    fn seal_parse_round_trip() {
        let ephemeral = vec![0x04; POINT_LEN];
        let ciphertext = b"not really encrypted".to_vec();
        let tag = vec![0xAA; TAG_LEN];

        let sealed = seal(&ephemeral, &ciphertext, &tag);
        assert_eq!(sealed.len(), POINT_LEN + ciphertext.len() + TAG_LEN);

        let parsed = Envelope::parse(&sealed, POINT_LEN).expect("parse failed");
        assert_eq!(parsed.ephemeral_key, &ephemeral[..]);
        assert_eq!(parsed.ciphertext, &ciphertext[..]);
        assert_eq!(parsed.tag, &tag[..]);
    }

    #[test]
    fn empty_ciphertext_is_valid_framing() {
        let sealed = seal(&[0x04; POINT_LEN], b"", &[0u8; TAG_LEN]);
        let parsed = Envelope::parse(&sealed, POINT_LEN).expect("parse failed");
        assert!(parsed.ciphertext.is_empty());
    }

    #[test]
    fn truncated_input_is_a_format_error() {
        let sealed = seal(&[0x04; POINT_LEN], b"m", &[0u8; TAG_LEN]);
        for len in [0, 1, POINT_LEN, POINT_LEN + TAG_LEN - 1] {
            match Envelope::parse(&sealed[..len], POINT_LEN) {
                Err(Error::Format(_)) => {}
                other => panic!("expected Format error at len {}, got {:?}", len, other.err()),
            }
        }
    }
}
