//! Named-curve abstraction.
//!
//! `Curve` identifies which elliptic curve a key lives on. All point and
//! scalar arithmetic is supplied by the RustCrypto curve crates; this module
//! only carries the identity and the encoding sizes that fix the envelope
//! framing.

/// A supported elliptic curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    /// NIST P-224 (secp224r1).
    P224,
    /// NIST P-256 (secp256r1).
    P256,
    /// NIST P-384 (secp384r1).
    P384,
    /// NIST P-521 (secp521r1).
    P521,
    /// secp256k1.
    Secp256k1,
}

impl Curve {
    /// Size in bytes of a field element (and of a serialized scalar).
    pub fn field_size(self) -> usize {
        match self {
            Curve::P224 => 28,
            Curve::P256 => 32,
            Curve::P384 => 48,
            Curve::P521 => 66,
            Curve::Secp256k1 => 32,
        }
    }

    /// Size in bytes of an uncompressed SEC1 point encoding: `0x04 || x || y`.
    pub fn point_len(self) -> usize {
        1 + 2 * self.field_size()
    }

    /// Canonical curve name.
    pub fn name(self) -> &'static str {
        match self {
            Curve::P224 => "P-224",
            Curve::P256 => "P-256",
            Curve::P384 => "P-384",
            Curve::P521 => "P-521",
            Curve::Secp256k1 => "secp256k1",
        }
    }

    /// All supported curves.
    pub const ALL: [Curve; 5] = [
        Curve::P224,
        Curve::P256,
        Curve::P384,
        Curve::P521,
        Curve::Secp256k1,
    ];
}

impl core::fmt::Display for Curve {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Dispatches `$body` with `$C` bound to the arithmetic type of `$curve`.
macro_rules! with_curve {
    ($curve:expr, $C:ident => $body:expr) => {
        match $curve {
            $crate::curve::Curve::P224 => {
                type $C = ::p224::NistP224;
                $body
            }
            $crate::curve::Curve::P256 => {
                type $C = ::p256::NistP256;
                $body
            }
            $crate::curve::Curve::P384 => {
                type $C = ::p384::NistP384;
                $body
            }
            $crate::curve::Curve::P521 => {
                type $C = ::p521::NistP521;
                $body
            }
            $crate::curve::Curve::Secp256k1 => {
                type $C = ::k256::Secp256k1;
                $body
            }
        }
    };
}

pub(crate) use with_curve;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_encoding_sizes() {
        assert_eq!(Curve::P224.point_len(), 57);
        assert_eq!(Curve::P256.point_len(), 65);
        assert_eq!(Curve::P384.point_len(), 97);
        assert_eq!(Curve::P521.point_len(), 133);
        assert_eq!(Curve::Secp256k1.point_len(), 65);
    }

    #[test]
    fn names_round_trip_display() {
        for curve in Curve::ALL {
            assert_eq!(curve.to_string(), curve.name());
        }
    }
}
