//! Support for signing Stark curve ECDSA signatures.

use super::{Signature, VerifyingKey, digest_from_prehash, sign_with_scalar};
use crate::{
    FieldBytes, FieldElement, ProjectivePoint, Result, Scalar, arithmetic::private_key_scalar,
};
use core::fmt::{self, Debug};
use rand_core::CryptoRngCore;
use signature::{KeypairRef, hazmat::PrehashSigner};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Stark curve secret key used for signing digests and producing signatures.
///
/// ## Usage
///
/// [`SigningKey::sign_hash`] signs a field element digest directly. The
/// [`signature`] crate's [`PrehashSigner`] signs the same digest given as at
/// most 32 big-endian bytes, which must encode a value below the field modulus.
///
/// The secret scalar is zeroized on drop.
#[derive(Clone)]
pub struct SigningKey {
    /// Secret scalar value in `(0, N)`.
    secret_scalar: Scalar,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Create a signing key from a private key in `(0, N)`.
    pub fn new(private_key: &FieldElement) -> Result<Self> {
        Ok(Self::from_scalar(private_key_scalar(private_key)?))
    }

    /// Generate a random signing key.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        loop {
            let scalar = Scalar::random(rng);
            if !bool::from(scalar.is_zero()) {
                return Self::from_scalar(scalar);
            }
        }
    }

    /// Parse a signing key from its big-endian encoding.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        let private_key =
            FieldElement::from_canonical_bytes(bytes).ok_or(crate::Error::InvalidEncoding)?;
        Self::new(&private_key)
    }

    fn from_scalar(secret_scalar: Scalar) -> Self {
        let public_key = (ProjectivePoint::GENERATOR * &secret_scalar).to_affine();
        Self {
            secret_scalar,
            verifying_key: VerifyingKey::from_public_point(public_key),
        }
    }

    /// Serialize as bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_scalar.to_bytes()
    }

    /// Borrow the secret [`Scalar`] value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &Scalar {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign a field element digest.
    pub fn sign_hash(&self, digest: &FieldElement) -> Result<Signature> {
        self.sign_hash_with_entropy(digest, &FieldElement::ZERO)
    }

    /// Sign a field element digest, mixing `extra_entropy` into the nonce.
    pub fn sign_hash_with_entropy(
        &self,
        digest: &FieldElement,
        extra_entropy: &FieldElement,
    ) -> Result<Signature> {
        sign_with_scalar(&self.secret_scalar, digest, extra_entropy)
    }
}

//
// `*Signer` trait impls
//

impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        let digest = digest_from_prehash(prehash)?;
        Ok(self.sign_hash(&digest)?)
    }
}

//
// Other trait impls
//

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_scalar.ct_eq(&other.secret_scalar)
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret_scalar.zeroize();
    }
}

impl ZeroizeOnDrop for SigningKey {}

/// Constant-time comparison
impl Eq for SigningKey {}
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key
    }
}

impl KeypairRef for SigningKey {
    type VerifyingKey = VerifyingKey;
}
