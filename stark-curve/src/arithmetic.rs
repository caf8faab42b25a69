//! Pure Rust implementation of group operations on the Stark curve.

pub(crate) mod affine;
mod field;
mod mul;
pub(crate) mod projective;
mod scalar;

pub use self::{
    affine::AffinePoint,
    field::{FieldElement, FieldParams},
    mul::lincomb,
    projective::ProjectivePoint,
    scalar::{Scalar, ScalarParams},
};

use crate::{Error, Result};

/// α = 1
pub const CURVE_EQUATION_A: FieldElement = FieldElement::ONE;

/// β = 0x06f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89
pub const CURVE_EQUATION_B: FieldElement = FieldElement::from_hex_vartime(
    "06f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89",
);

/// Compute the public key `private_key · G`.
///
/// Returns [`Error::KeyOutOfRange`] unless `0 < private_key < N`.
pub fn get_public_key(private_key: &FieldElement) -> Result<AffinePoint> {
    let d = private_key_scalar(private_key)?;
    Ok((ProjectivePoint::GENERATOR * d).to_affine())
}

/// Interpret a base field element as a private scalar in `(0, N)`.
pub(crate) fn private_key_scalar(private_key: &FieldElement) -> Result<Scalar> {
    let value = private_key.to_uint();
    if value.is_zero() || value >= Scalar::MODULUS {
        return Err(Error::KeyOutOfRange);
    }
    Ok(Scalar::from_uint(&value))
}

#[cfg(test)]
mod tests {
    use super::{AffinePoint, FieldElement, get_public_key};
    use crate::Error;

    #[test]
    fn public_key_known_answers() {
        let private_key = FieldElement::from_hex_vartime(
            "03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc",
        );
        let public_key = get_public_key(&private_key).unwrap();
        assert_eq!(
            public_key.x(),
            FieldElement::from_hex_vartime(
                "077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"
            )
        );
        assert_eq!(
            public_key.y(),
            FieldElement::from_hex_vartime(
                "054d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06"
            )
        );

        let public_key = get_public_key(&FieldElement::from_u64(0x12)).unwrap();
        assert_eq!(
            public_key.x(),
            FieldElement::from_hex_vartime(
                "019661066e96a8b9f06a1d136881ee924dfb6a885239caa5fd3f87a54c6b25c4"
            )
        );
    }

    #[test]
    fn public_key_of_one_is_generator() {
        assert_eq!(
            get_public_key(&FieldElement::ONE).unwrap(),
            AffinePoint::GENERATOR
        );
    }

    #[test]
    fn private_key_range() {
        assert_eq!(
            get_public_key(&FieldElement::ZERO),
            Err(Error::KeyOutOfRange)
        );

        let order = FieldElement::from_uint(&super::Scalar::MODULUS);
        assert_eq!(get_public_key(&order), Err(Error::KeyOutOfRange));
        assert!(get_public_key(&(order - FieldElement::ONE)).is_ok());
    }
}
