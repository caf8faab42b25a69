//! Scalar field arithmetic modulo the order of the Stark curve group.

use primefield::PrimeFieldElement;

/// Order of the generator: n = 0x0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f
const ORDER_HEX: &str = "0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f";

/// Barrett constant ⌊2^{512} / n⌋.
const BARRETT_MU_HEX: &str = "1fffffffffffffbc000000000000908121fbb648d32e2267189ec175384d77b0fd";

primefield::field_params!(
    name: ScalarParams,
    modulus: ORDER_HEX,
    barrett_mu: BARRETT_MU_HEX,
    multiplicative_generator: 3,
    doc: "Parameters of the Stark curve scalar field modulo the group order n"
);

/// Element in the scalar field of the Stark curve, i.e. an integer modulo `n`.
pub type Scalar = PrimeFieldElement<ScalarParams>;

#[cfg(test)]
mod tests {
    use super::Scalar;
    use crate::FieldElement;
    use num_bigint::BigUint;
    use num_traits::One;
    use proptest::prelude::*;

    primefield::test_primefield!(Scalar);

    #[test]
    fn order_is_below_base_modulus() {
        assert!(Scalar::MODULUS < FieldElement::MODULUS);
        assert_eq!(Scalar::S, 1);
    }

    #[test]
    fn from_uint_reduces_modulo_order() {
        let n_plus_five = Scalar::MODULUS.checked_add(&fixint::U264::from_u64(5)).unwrap();
        assert_eq!(Scalar::from_uint(&n_plus_five), Scalar::from_u64(5));
    }

    prop_compose! {
        fn scalar()(bytes in any::<[u8; 32]>()) -> Scalar {
            Scalar::from_be_bytes(&bytes)
        }
    }

    fn order() -> BigUint {
        BigUint::from_bytes_be(&Scalar::MODULUS.to_be_bytes())
    }

    fn to_biguint(scalar: &Scalar) -> BigUint {
        BigUint::from_bytes_be(&scalar.to_bytes())
    }

    proptest! {
        #[test]
        fn mul_matches_biguint(a in scalar(), b in scalar()) {
            let expected = to_biguint(&a) * to_biguint(&b) % order();
            prop_assert_eq!(to_biguint(&(a * b)), expected);
        }

        #[test]
        fn invert_matches_biguint(a in scalar()) {
            prop_assume!(!bool::from(a.is_zero()));
            let inv = a.invert().unwrap();
            prop_assert_eq!(a * inv, Scalar::ONE);
            prop_assert!((to_biguint(&a) * to_biguint(&inv) % order()).is_one());
        }
    }
}
