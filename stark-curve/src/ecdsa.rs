//! Elliptic Curve Digital Signature Algorithm (ECDSA) over the Stark curve.
//!
//! Messages are signed as field element digests (typically a Pedersen or
//! Poseidon hash), with nonces derived deterministically per [RFC 6979] using
//! the chain's `bits2int` conventions (see [`generate_k`]). Signatures are not
//! normalized to low-`s`.
//!
//! ## Algorithm
//!
//! ```text
//! sign(m, d):
//!   for k in nonces(d, m):
//!     r = (k·G).x mod n,         retry if r = 0
//!     s = k⁻¹·(m + r·d) mod n,   retry if s = 0
//!     return (r, s)
//!
//! verify(m, Q, (r, s)):
//!   reject unless 0 < r < n and 0 < s < n
//!   w = s⁻¹ mod n
//!   R = (m·w)·G + (r·w)·Q
//!   accept iff R ≠ O and R.x mod n = r
//! ```
//!
//! ## Usage
//!
#![cfg_attr(feature = "std", doc = "```")]
#![cfg_attr(not(feature = "std"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use rand_core::OsRng; // requires 'getrandom` feature
//! use stark_curve::{
//!     FieldElement, poseidon,
//!     ecdsa::{Signature, SigningKey, VerifyingKey, signature::hazmat::{PrehashSigner, PrehashVerifier}},
//! };
//!
//! // Signing
//! let signing_key = SigningKey::random(&mut OsRng);
//! let digest = poseidon::hash(&FieldElement::from_u64(1), &FieldElement::from_u64(2));
//! let signature = signing_key.sign_hash(&digest)?;
//!
//! // Verifying against the x-only public key
//! let stark_key = signing_key.verifying_key().stark_key();
//! let verifying_key = VerifyingKey::from_stark_key(&stark_key)?;
//! assert!(verifying_key.verify_hash(&digest, &signature));
//!
//! // The same through the `signature` traits, over the 32-byte digest
//! let signature: Signature = signing_key.sign_prehash(&digest.to_bytes())?;
//! verifying_key.verify_prehash(&digest.to_bytes(), &signature)?;
//! # Ok(())
//! # }
//! ```
//!
//! [RFC 6979]: https://datatracker.ietf.org/doc/html/rfc6979

mod rfc6979;
mod signing;
mod verifying;

pub use self::{
    rfc6979::{generate_k, generate_k_with_entropy},
    signing::SigningKey,
    verifying::VerifyingKey,
};
pub use signature;

use self::rfc6979::Nonces;
use crate::{
    AffinePoint, Error, FieldBytes, FieldElement, ProjectivePoint, Result, Scalar, U264,
    arithmetic::private_key_scalar, lincomb,
};
use core::fmt;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Stark curve ECDSA signature serialized as bytes.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// Stark curve ECDSA signature.
///
/// `r` and `s` are kept as the field elements they travel as, so a signature
/// can hold any pair of felts; [`verify`] rejects components outside `(0, N)`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Signature {
    r: FieldElement,
    s: FieldElement,
}

impl Signature {
    /// Size of an encoded signature in bytes: `r ‖ s`, each 32 bytes big-endian.
    pub const BYTE_SIZE: usize = 64;

    /// Create a [`Signature`] from its components.
    pub fn new(r: FieldElement, s: FieldElement) -> Self {
        Self { r, s }
    }

    /// Parse a signature from a byte array.
    ///
    /// Each half must be a canonical field element.
    pub fn from_bytes(bytes: &SignatureBytes) -> Result<Self> {
        let (r, s) = bytes.split_at(Self::BYTE_SIZE / 2);
        Ok(Self {
            r: canonical_field_element(r)?,
            s: canonical_field_element(s)?,
        })
    }

    /// Parse a signature from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = SignatureBytes::try_from(bytes).map_err(|_| Error::InvalidEncoding)?;
        Self::from_bytes(&bytes)
    }

    /// The `r` component.
    pub fn r(&self) -> FieldElement {
        self.r
    }

    /// The `s` component.
    pub fn s(&self) -> FieldElement {
        self.s
    }

    /// Serialize this signature as bytes.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut bytes = [0; Self::BYTE_SIZE];
        let (r, s) = bytes.split_at_mut(Self::BYTE_SIZE / 2);
        r.copy_from_slice(&self.r.to_bytes());
        s.copy_from_slice(&self.s.to_bytes());
        bytes
    }

    /// Convert this signature into a byte vector.
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &format_args!("{}", self.r))
            .field("s", &format_args!("{}", self.s))
            .finish()
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(signature: &Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl signature::SignatureEncoding for Signature {
    type Repr = SignatureBytes;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }

    fn encoded_len(&self) -> usize {
        Self::BYTE_SIZE
    }
}

impl TryFrom<SignatureBytes> for Signature {
    type Error = Error;

    fn try_from(signature: SignatureBytes) -> Result<Signature> {
        Signature::from_bytes(&signature)
    }
}

impl TryFrom<&SignatureBytes> for Signature {
    type Error = Error;

    fn try_from(signature: &SignatureBytes) -> Result<Signature> {
        Signature::from_bytes(signature)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        Signature::from_slice(bytes)
    }
}

/// Serialized as the 64-byte `r ‖ s` encoding; hex for text formats.
#[cfg(feature = "serde")]
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let mut bytes = [0u8; Self::BYTE_SIZE];
        serdect::array::deserialize_hex_or_bin(&mut bytes, deserializer)?;
        Self::from_bytes(&bytes).map_err(de::Error::custom)
    }
}

/// Sign `digest` with `private_key`.
///
/// Deterministic: the same inputs always produce the same signature. Returns
/// [`Error::KeyOutOfRange`] unless `0 < private_key < N`.
pub fn sign(digest: &FieldElement, private_key: &FieldElement) -> Result<Signature> {
    sign_with_entropy(digest, private_key, &FieldElement::ZERO)
}

/// Sign `digest` with `private_key`, mixing `extra_entropy` into the nonce
/// derivation as [`generate_k_with_entropy`] does.
pub fn sign_with_entropy(
    digest: &FieldElement,
    private_key: &FieldElement,
    extra_entropy: &FieldElement,
) -> Result<Signature> {
    let private_key = private_key_scalar(private_key)?;
    sign_with_scalar(&private_key, digest, extra_entropy)
}

/// Check `signature` over `digest` against `public_key`.
///
/// Malformed signatures and public keys are rejected with `false`, never an error.
pub fn verify(digest: &FieldElement, public_key: &AffinePoint, signature: &Signature) -> bool {
    let (Some(r), Some(s)) = (nonzero_scalar(&signature.r), nonzero_scalar(&signature.s)) else {
        return false;
    };
    if bool::from(public_key.is_identity()) || !public_key.is_on_curve() {
        return false;
    }
    let Ok(w) = s.invert() else {
        return false;
    };

    let m = reduce_to_scalar(digest);
    let point = lincomb(
        &ProjectivePoint::GENERATOR,
        &(m * w),
        &public_key.to_projective(),
        &(r * w),
    );

    if bool::from(point.is_identity()) {
        return false;
    }
    reduce_to_scalar(&point.to_affine().x()) == r
}

/// Check `signature` over `digest` against an x-only public key.
///
/// Either of the two points with x-coordinate `stark_key` is accepted. Returns
/// `false` if no curve point has that x-coordinate.
pub fn verify_stark_key(
    digest: &FieldElement,
    stark_key: &FieldElement,
    signature: &Signature,
) -> bool {
    match AffinePoint::from_x(stark_key) {
        Some(point) => verify(digest, &point, signature) || verify(digest, &-point, signature),
        None => false,
    }
}

fn sign_with_scalar(
    private_key: &Scalar,
    digest: &FieldElement,
    extra_entropy: &FieldElement,
) -> Result<Signature> {
    let m = reduce_to_scalar(digest);

    for k in Nonces::new(private_key, digest, extra_entropy) {
        let r = reduce_to_scalar(&(ProjectivePoint::GENERATOR * k).to_affine().x());
        if bool::from(r.is_zero()) {
            continue;
        }

        let s = k.invert()? * (m + r * private_key);
        if bool::from(s.is_zero()) {
            continue;
        }

        return Ok(Signature::new(scalar_to_field(&r), scalar_to_field(&s)));
    }

    Err(Error::SigningFailed)
}

/// Reduce a base field element modulo `N`.
fn reduce_to_scalar(value: &FieldElement) -> Scalar {
    Scalar::from_uint(&value.to_uint())
}

/// Lift a scalar into the base field; `N < P` so the value is unchanged.
fn scalar_to_field(scalar: &Scalar) -> FieldElement {
    FieldElement::from_uint(&U264::from(scalar))
}

/// The scalar with the same value as `value`, if that value is in `(0, N)`.
fn nonzero_scalar(value: &FieldElement) -> Option<Scalar> {
    let value = value.to_uint();
    (!value.is_zero() && value < Scalar::MODULUS).then(|| Scalar::from_uint(&value))
}

fn canonical_field_element(bytes: &[u8]) -> Result<FieldElement> {
    let bytes = FieldBytes::try_from(bytes).map_err(|_| Error::InvalidEncoding)?;
    FieldElement::from_canonical_bytes(&bytes).ok_or(Error::InvalidEncoding)
}

/// Interpret a big-endian prehash of at most 32 bytes as a digest below `P`.
fn digest_from_prehash(prehash: &[u8]) -> Result<FieldElement> {
    let offset = size_of::<FieldBytes>()
        .checked_sub(prehash.len())
        .ok_or(Error::InvalidEncoding)?;

    let mut bytes = FieldBytes::default();
    bytes[offset..].copy_from_slice(prehash);
    FieldElement::from_canonical_bytes(&bytes).ok_or(Error::InvalidEncoding)
}

#[cfg(test)]
mod tests {
    use super::{
        Signature, digest_from_prehash, sign, sign_with_entropy, verify, verify_stark_key,
    };
    use crate::{
        AffinePoint, Error, FieldElement, Scalar, get_public_key,
        test_vectors::ecdsa::{ECDSA_TEST_VECTORS, VERIFY_TEST_VECTORS},
    };
    use hex_literal::hex;
    use proptest::prelude::*;

    #[test]
    fn signing_known_answers() {
        for vector in ECDSA_TEST_VECTORS {
            let digest = FieldElement::from_be_bytes(vector.m);
            let private_key = FieldElement::from_be_bytes(vector.d);
            let seed = FieldElement::from_be_bytes(vector.seed);

            let signature = sign_with_entropy(&digest, &private_key, &seed).unwrap();
            assert_eq!(signature.r().to_bytes(), *vector.r);
            assert_eq!(signature.s().to_bytes(), *vector.s);

            let public_key = AffinePoint::from_coordinates(
                FieldElement::from_be_bytes(vector.q_x),
                FieldElement::from_be_bytes(vector.q_y),
            )
            .unwrap();
            assert_eq!(get_public_key(&private_key).unwrap(), public_key);
            assert!(verify(&digest, &public_key, &signature));
        }
    }

    #[test]
    fn verification_known_answers() {
        for vector in VERIFY_TEST_VECTORS {
            let signature = Signature::new(
                FieldElement::from_be_bytes(vector.r),
                FieldElement::from_be_bytes(vector.s),
            );
            assert_eq!(
                verify_stark_key(
                    &FieldElement::from_be_bytes(vector.m),
                    &FieldElement::from_be_bytes(vector.stark_key),
                    &signature,
                ),
                vector.valid
            );
        }
    }

    #[test]
    fn signing_is_deterministic() {
        let vector = &ECDSA_TEST_VECTORS[1];
        let digest = FieldElement::from_be_bytes(vector.m);
        let private_key = FieldElement::from_be_bytes(vector.d);
        assert_eq!(sign(&digest, &private_key), sign(&digest, &private_key));
    }

    #[test]
    fn signing_rejects_out_of_range_keys() {
        let digest = FieldElement::from_u64(2);
        assert_eq!(sign(&digest, &FieldElement::ZERO), Err(Error::KeyOutOfRange));
        assert_eq!(
            sign(&digest, &FieldElement::from_uint(&Scalar::MODULUS)),
            Err(Error::KeyOutOfRange)
        );
    }

    #[test]
    fn verification_rejects_out_of_range_components() {
        let vector = &ECDSA_TEST_VECTORS[0];
        let digest = FieldElement::from_be_bytes(vector.m);
        let private_key = FieldElement::from_be_bytes(vector.d);
        let public_key = get_public_key(&private_key).unwrap();
        let signature = sign(&digest, &private_key).unwrap();
        let order = FieldElement::from_uint(&Scalar::MODULUS);

        for (r, s) in [
            (FieldElement::ZERO, signature.s()),
            (signature.r(), FieldElement::ZERO),
            (order, signature.s()),
            (signature.r(), order),
        ] {
            assert!(!verify(&digest, &public_key, &Signature::new(r, s)));
        }

        assert!(!verify(&digest, &AffinePoint::IDENTITY, &signature));
    }

    #[test]
    fn verification_accepts_either_y_for_stark_keys() {
        let vector = &ECDSA_TEST_VECTORS[0];
        let digest = FieldElement::from_be_bytes(vector.m);
        let private_key = FieldElement::from_be_bytes(vector.d);
        let public_key = get_public_key(&private_key).unwrap();
        let signature = sign(&digest, &private_key).unwrap();

        assert!(verify(&digest, &public_key, &signature));
        assert!(!verify(&digest, &-public_key, &signature));
        assert!(verify_stark_key(&digest, &public_key.x(), &signature));
    }

    #[test]
    fn signature_encoding() {
        let vector = &ECDSA_TEST_VECTORS[0];
        let signature = Signature::new(
            FieldElement::from_be_bytes(vector.r),
            FieldElement::from_be_bytes(vector.s),
        );

        let bytes = signature.to_bytes();
        assert_eq!(&bytes[..32], vector.r);
        assert_eq!(&bytes[32..], vector.s);
        assert_eq!(Signature::from_bytes(&bytes), Ok(signature));
        assert_eq!(Signature::from_slice(&bytes[..63]), Err(Error::InvalidEncoding));

        let mut non_canonical = bytes;
        non_canonical[..32].copy_from_slice(&[0xff; 32]);
        assert_eq!(
            Signature::from_bytes(&non_canonical),
            Err(Error::InvalidEncoding)
        );
    }

    #[test]
    fn prehash_decoding() {
        assert_eq!(digest_from_prehash(&[0x02]), Ok(FieldElement::from_u64(2)));
        assert_eq!(digest_from_prehash(&[]), Ok(FieldElement::ZERO));
        assert_eq!(
            digest_from_prehash(&[0; 33]),
            Err(Error::InvalidEncoding)
        );
        assert_eq!(
            digest_from_prehash(&hex!(
                "0800000000000011000000000000000000000000000000000000000000000001"
            )),
            Err(Error::InvalidEncoding)
        );
    }

    /// `value` with bit `bit` flipped, if the result is still a canonical felt.
    fn flip_bit(value: &FieldElement, bit: usize) -> Option<FieldElement> {
        let mut bytes = value.to_bytes();
        bytes[31 - bit / 8] ^= 1 << (bit % 8);
        FieldElement::from_canonical_bytes(&bytes)
    }

    fn in_scalar_range(value: &FieldElement) -> bool {
        !bool::from(value.is_zero()) && value.to_uint() < Scalar::MODULUS
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn sign_verify_round_trip(d in 1u64.., m in any::<[u8; 32]>(), flip in 0usize..252) {
            let private_key = FieldElement::from_u64(d);
            let digest = FieldElement::from_be_bytes(&m);
            let public_key = get_public_key(&private_key).unwrap();

            let signature = sign(&digest, &private_key).unwrap();
            prop_assert!(verify(&digest, &public_key, &signature));

            if let Some(other) = flip_bit(&digest, flip) {
                prop_assert!(!verify(&other, &public_key, &signature));
            }
            if let Some(r) = flip_bit(&signature.r(), flip).filter(in_scalar_range) {
                let tampered = Signature::new(r, signature.s());
                prop_assert!(!verify(&digest, &public_key, &tampered));
            }
            if let Some(s) = flip_bit(&signature.s(), flip).filter(in_scalar_range) {
                let tampered = Signature::new(signature.r(), s);
                prop_assert!(!verify(&digest, &public_key, &tampered));
            }
        }
    }
}
