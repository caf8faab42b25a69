//! Macros for declaring field moduli.

/// Creates a ZST implementing [`FieldParams`](crate::FieldParams) for a given modulus.
///
/// Accepts the following parameters:
///
/// - name of the ZST representing the field modulus
/// - big-endian hex serialization of the modulus (at most 256 bits)
/// - big-endian hex serialization of the Barrett constant `⌊2^(128k) / modulus⌋`,
///   where `k` is the number of 64-bit limbs of the modulus
/// - a quadratic non-residue used as the multiplicative generator
/// - documentation string for the field modulus type
///
/// ```
/// primefield::field_params!(
///     name: FieldParams,
///     modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
///     barrett_mu: "100000000fffffffffffffffefffffffefffffffeffffffff0000000000000003",
///     multiplicative_generator: 6,
///     doc: "P-256 field modulus"
/// );
///
/// type Fe = primefield::PrimeFieldElement<FieldParams>;
/// assert_eq!(Fe::from_u64(3) * Fe::from_u64(5), Fe::from_u64(15));
/// ```
#[macro_export]
macro_rules! field_params {
    (
        name: $name:ident,
        modulus: $modulus_hex:expr,
        barrett_mu: $mu_hex:expr,
        multiplicative_generator: $multiplicative_generator:expr,
        doc: $doc:expr
    ) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $name;

        impl $crate::FieldParams for $name {
            const MODULUS: $crate::U264 = $crate::U264::from_be_hex($modulus_hex);
            const MODULUS_HEX: &'static str = $modulus_hex;
            const BARRETT: $crate::fixint::BarrettContext =
                $crate::fixint::BarrettContext::from_precomputed(
                    Self::MODULUS,
                    $crate::U264::from_be_hex($mu_hex),
                );
            const MULTIPLICATIVE_GENERATOR: u64 = $multiplicative_generator;
            const S: u32 = $crate::compute_s(&Self::MODULUS);
            const T: $crate::U264 = $crate::compute_t(&Self::MODULUS);
        }
    };
}
