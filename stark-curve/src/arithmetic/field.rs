//! Field arithmetic modulo p = 2^{251} + 17·2^{192} + 1

use primefield::PrimeFieldElement;

/// Constant representing the modulus: p = 2^{251} + 17·2^{192} + 1
const MODULUS_HEX: &str = "0800000000000011000000000000000000000000000000000000000000000001";

/// Barrett constant ⌊2^{512} / p⌋.
const BARRETT_MU_HEX: &str = "1fffffffffffffbc000000000000907ffffffffffeccf000000000028c81fffbff";

primefield::field_params!(
    name: FieldParams,
    modulus: MODULUS_HEX,
    barrett_mu: BARRETT_MU_HEX,
    multiplicative_generator: 3,
    doc: "Parameters of the Stark curve base field modulo p = 2^{251} + 17·2^{192} + 1"
);

/// Element in the Stark curve base field ("felt").
pub type FieldElement = PrimeFieldElement<FieldParams>;

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use alloc::string::ToString;
    use fixint::U264;

    primefield::test_primefield!(FieldElement);

    #[test]
    fn two_adicity() {
        assert_eq!(FieldElement::S, 192);
        assert_eq!(FieldElement::T, U264::from_u64(0x800000000000011));
    }

    #[test]
    fn modulus_minus_one_plus_one_is_zero() {
        let p_minus_one = FieldElement::from_hex(
            "0x800000000000011000000000000000000000000000000000000000000000000",
        )
        .unwrap();
        assert_eq!(p_minus_one + FieldElement::from_u64(1), FieldElement::ZERO);
    }

    #[test]
    fn canonical_hex() {
        assert_eq!(FieldElement::ZERO.to_string(), "0x0");
        assert_eq!(FieldElement::from_u64(0xabc).to_string(), "0xabc");
        assert_eq!(
            "0x00ABC".parse::<FieldElement>(),
            Ok(FieldElement::from_u64(0xabc))
        );
    }
}
