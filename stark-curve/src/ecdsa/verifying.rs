//! Support for verifying Stark curve ECDSA signatures.

use super::{Signature, digest_from_prehash, verify};
use crate::{AffinePoint, Error, FieldElement, Result};
use signature::hazmat::PrehashVerifier;

/// Stark curve public key used for verifying signatures.
///
/// Keys are usually exchanged as x-only "stark keys". A key built with
/// [`VerifyingKey::from_stark_key`] accepts signatures made for either of the
/// two points with that x-coordinate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    /// Public point.
    point: AffinePoint,

    /// Was this key recovered from its x-coordinate alone?
    x_only: bool,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns [`Error::InvalidEncoding`] if the point is the identity or is not
    /// on the curve.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        if bool::from(point.is_identity()) || !point.is_on_curve() {
            return Err(Error::InvalidEncoding);
        }
        Ok(Self::from_public_point(point))
    }

    /// Initialize [`VerifyingKey`] from a stark key, the x-coordinate of the
    /// public point.
    ///
    /// Returns [`Error::InvalidEncoding`] if no curve point has that x-coordinate.
    pub fn from_stark_key(stark_key: &FieldElement) -> Result<Self> {
        let point = AffinePoint::from_x(stark_key).ok_or(Error::InvalidEncoding)?;
        Ok(Self {
            point,
            x_only: true,
        })
    }

    pub(super) fn from_public_point(point: AffinePoint) -> Self {
        Self {
            point,
            x_only: false,
        }
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// The stark key: x-coordinate of the public point.
    pub fn stark_key(&self) -> FieldElement {
        self.point.x()
    }

    /// Check `signature` over a field element digest.
    pub fn verify_hash(&self, digest: &FieldElement, signature: &Signature) -> bool {
        verify(digest, &self.point, signature)
            || (self.x_only && verify(digest, &-self.point, signature))
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        let digest = digest_from_prehash(prehash)?;
        if self.verify_hash(&digest, signature) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

//
// Other trait impls
//

impl AsRef<AffinePoint> for VerifyingKey {
    fn as_ref(&self) -> &AffinePoint {
        self.as_affine()
    }
}

impl From<VerifyingKey> for AffinePoint {
    fn from(verifying_key: VerifyingKey) -> AffinePoint {
        verifying_key.point
    }
}

impl From<&VerifyingKey> for AffinePoint {
    fn from(verifying_key: &VerifyingKey) -> AffinePoint {
        verifying_key.point
    }
}

impl TryFrom<AffinePoint> for VerifyingKey {
    type Error = Error;

    fn try_from(point: AffinePoint) -> Result<VerifyingKey> {
        VerifyingKey::from_affine(point)
    }
}

#[cfg(test)]
mod tests {
    use super::VerifyingKey;
    use crate::{
        AffinePoint, Error, FieldElement, ecdsa::Signature,
        test_vectors::ecdsa::{ECDSA_TEST_VECTORS, VERIFY_TEST_VECTORS},
    };
    use signature::hazmat::PrehashVerifier;

    fn public_key(vector_index: usize) -> AffinePoint {
        let vector = &ECDSA_TEST_VECTORS[vector_index];
        AffinePoint::from_coordinates(
            FieldElement::from_be_bytes(vector.q_x),
            FieldElement::from_be_bytes(vector.q_y),
        )
        .unwrap()
    }

    #[test]
    fn verify_known_answers() {
        for (i, vector) in ECDSA_TEST_VECTORS.iter().enumerate() {
            let verifying_key = VerifyingKey::from_affine(public_key(i)).unwrap();
            let signature = Signature::new(
                FieldElement::from_be_bytes(vector.r),
                FieldElement::from_be_bytes(vector.s),
            );
            let digest = FieldElement::from_be_bytes(vector.m);

            assert!(verifying_key.verify_hash(&digest, &signature));
            assert!(verifying_key.verify_prehash(vector.m, &signature).is_ok());
            assert!(!verifying_key.verify_hash(&(digest + FieldElement::ONE), &signature));
        }
    }

    #[test]
    fn stark_keys_accept_either_point() {
        let vector = &ECDSA_TEST_VECTORS[0];
        let point = public_key(0);
        let signature = Signature::new(
            FieldElement::from_be_bytes(vector.r),
            FieldElement::from_be_bytes(vector.s),
        );
        let digest = FieldElement::from_be_bytes(vector.m);

        let exact = VerifyingKey::from_affine(-point).unwrap();
        assert!(!exact.verify_hash(&digest, &signature));

        let x_only = VerifyingKey::from_stark_key(&point.x()).unwrap();
        assert_eq!(x_only.stark_key(), point.x());
        assert!(x_only.verify_hash(&digest, &signature));
    }

    #[test]
    fn stark_key_vectors() {
        for vector in VERIFY_TEST_VECTORS {
            let signature = Signature::new(
                FieldElement::from_be_bytes(vector.r),
                FieldElement::from_be_bytes(vector.s),
            );
            let digest = FieldElement::from_be_bytes(vector.m);
            let stark_key = FieldElement::from_be_bytes(vector.stark_key);
            let valid = VerifyingKey::from_stark_key(&stark_key)
                .is_ok_and(|key| key.verify_hash(&digest, &signature));
            assert_eq!(valid, vector.valid);
        }
    }

    #[test]
    fn rejects_invalid_points() {
        assert_eq!(
            VerifyingKey::from_affine(AffinePoint::IDENTITY),
            Err(Error::InvalidEncoding)
        );

        let off_curve = FieldElement::from_hex_vartime(
            "03ee9bffffffffff26ffffffff60ffffffffffffffffffffffffffff004accff",
        );
        assert_eq!(
            VerifyingKey::from_stark_key(&off_curve),
            Err(Error::InvalidEncoding)
        );
    }
}
