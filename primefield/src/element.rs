//! Generic prime field element.

mod sqrt;

use core::{
    fmt,
    hash::Hash,
    iter::{Product, Sum},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use fixint::{BarrettContext, Error, Result, U264};
use rand_core::RngCore;
use subtle::{
    Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
};
use zeroize::DefaultIsZeroes;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Big-endian encoding of a field element.
pub type FieldBytes = [u8; 32];

/// Parameters of a prime field.
///
/// Usually implemented with the [`field_params!`](crate::field_params) macro.
pub trait FieldParams:
    Copy + Clone + fmt::Debug + Default + Eq + Hash + Ord + Send + Sync + 'static
{
    /// Field modulus: an odd prime below 2^256.
    const MODULUS: U264;

    /// Big-endian hex serialization of the modulus.
    const MODULUS_HEX: &'static str;

    /// Barrett context for the modulus.
    const BARRETT: BarrettContext;

    /// Quadratic non-residue modulo the field modulus.
    const MULTIPLICATIVE_GENERATOR: u64;

    /// 2-adicity: `modulus - 1 = 2^S * T` with `T` odd.
    const S: u32;

    /// Odd part of `modulus - 1`.
    const T: U264;
}

/// Element of the prime field described by `P`.
///
/// Always holds the canonical representative in `[0, P::MODULUS)`, so equality,
/// ordering and hashing are all defined on canonical values.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PrimeFieldElement<P: FieldParams> {
    value: U264,
    params: PhantomData<P>,
}

impl<P: FieldParams> PrimeFieldElement<P> {
    /// Zero element.
    pub const ZERO: Self = Self::from_uint_unchecked(U264::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_uint_unchecked(U264::ONE);

    /// Field modulus.
    pub const MODULUS: U264 = P::MODULUS;

    /// Multiplicative generator as a field element.
    pub const MULTIPLICATIVE_GENERATOR: Self =
        Self::from_uint_unchecked(U264::from_u64(P::MULTIPLICATIVE_GENERATOR));

    /// Barrett context for the modulus.
    pub const BARRETT: BarrettContext = P::BARRETT;

    /// 2-adicity of `modulus - 1`.
    pub const S: u32 = P::S;

    /// Odd part of `modulus - 1`.
    pub const T: U264 = P::T;

    /// Decode a field element from a big-endian hex string.
    ///
    /// Intended for constants.
    ///
    /// # Panics
    /// - if the input is not a valid hex string
    /// - if the value is not below the modulus
    pub const fn from_hex_vartime(hex: &str) -> Self {
        let value = U264::from_be_hex(hex);
        assert!(
            value.cmp_vartime(&P::MODULUS).is_lt(),
            "hex value is not below the field modulus"
        );
        Self::from_uint_unchecked(value)
    }

    /// Wrap a value already known to be below the modulus.
    pub(crate) const fn from_uint_unchecked(value: U264) -> Self {
        Self {
            value,
            params: PhantomData,
        }
    }

    /// Reduce an integer into the field.
    pub fn from_uint(uint: &U264) -> Self {
        Self::from_uint_unchecked(P::BARRETT.reduce(uint))
    }

    /// Reduce a `u64` into the field.
    pub fn from_u64(n: u64) -> Self {
        Self::from_uint(&U264::from_u64(n))
    }

    /// Parse a hex string (with or without `0x`) and reduce it into the field.
    pub fn from_hex(hex: &str) -> Result<Self> {
        U264::from_hex(hex).map(|uint| Self::from_uint(&uint))
    }

    /// Parse a decimal string and reduce it into the field.
    pub fn from_dec_str(dec: &str) -> Result<Self> {
        U264::from_dec_str(dec).map(|uint| Self::from_uint(&uint))
    }

    /// Decode 32 big-endian bytes, reducing the value into the field.
    pub fn from_be_bytes(bytes: &FieldBytes) -> Self {
        // 256 bits always fit
        Self::from_be_slice(bytes).unwrap_or(Self::ZERO)
    }

    /// Decode big-endian bytes of any length, reducing the value into the field.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        U264::from_be_slice(bytes).map(|uint| Self::from_uint(&uint))
    }

    /// Decode 32 big-endian bytes, rejecting values that are not below the modulus.
    pub fn from_canonical_bytes(bytes: &FieldBytes) -> Option<Self> {
        let value = U264::from_be_slice(bytes).ok()?;
        (value < P::MODULUS).then(|| Self::from_uint_unchecked(value))
    }

    /// Sample a uniformly random field element by rejection sampling.
    ///
    /// Only the low `bits(modulus)` bits of each candidate are drawn, so the
    /// expected number of draws is below two for any modulus.
    pub fn random(rng: &mut impl RngCore) -> Self {
        let bits = P::MODULUS.bits() as usize;
        let len = bits.div_ceil(8);
        let start = size_of::<FieldBytes>() - len;
        let top_mask = u8::MAX >> (len * 8 - bits);

        let mut bytes = FieldBytes::default();
        loop {
            rng.fill_bytes(&mut bytes[start..]);
            bytes[start] &= top_mask;
            if let Some(fe) = Self::from_canonical_bytes(&bytes) {
                return fe;
            }
        }
    }

    /// Canonical integer representative.
    pub const fn to_uint(&self) -> U264 {
        self.value
    }

    /// Encode as 32 big-endian bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        const { assert!(P::MODULUS.bits() <= 256, "modulus exceeds 256 bits") };
        let mut bytes = FieldBytes::default();
        bytes.copy_from_slice(&self.value.to_be_bytes()[1..]);
        bytes
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is the canonical representative odd?
    pub fn is_odd(&self) -> Choice {
        Choice::from(self.value.is_odd() as u8)
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Self {
        // both operands are below 2^256, so the sum cannot wrap
        let (sum, _) = self.value.overflowing_add(&rhs.value);
        let (reduced, borrow) = sum.borrowing_sub(&P::MODULUS);
        Self::from_uint_unchecked(U264::conditional_select(
            &reduced,
            &sum,
            Choice::from(borrow as u8),
        ))
    }

    /// Returns `2 * self mod p`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = self.value.borrowing_sub(&rhs.value);
        let (wrapped, _) = diff.overflowing_add(&P::MODULUS);
        Self::from_uint_unchecked(U264::conditional_select(
            &diff,
            &wrapped,
            Choice::from(borrow as u8),
        ))
    }

    /// Returns `self * rhs mod p`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_uint_unchecked(P::BARRETT.mul_mod(&self.value, &rhs.value))
    }

    /// Returns `-self mod p`.
    pub fn neg(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Returns `self^2 mod p`.
    pub fn square(&self) -> Self {
        Self::from_uint_unchecked(P::BARRETT.square_mod(&self.value))
    }

    /// Returns `self^(2^n) mod p`.
    pub fn sqn_vartime(&self, n: u32) -> Self {
        (0..n).fold(*self, |acc, _| acc.square())
    }

    /// Returns `self^exp mod p`.
    ///
    /// Variable time with respect to the exponent.
    pub fn pow_vartime(&self, exp: &U264) -> Self {
        Self::from_uint_unchecked(P::BARRETT.pow_mod(&self.value, exp))
    }

    /// Multiplicative inverse `self^(p-2) mod p`.
    ///
    /// Returns [`Error::DivisionByZero`] for zero.
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::DivisionByZero);
        }
        let p_minus_2 = P::MODULUS.borrowing_sub(&U264::from_u64(2)).0;
        Ok(self.pow_vartime(&p_minus_2))
    }
}

impl<P: FieldParams> ConditionallySelectable for PrimeFieldElement<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_uint_unchecked(U264::conditional_select(&a.value, &b.value, choice))
    }
}

impl<P: FieldParams> ConstantTimeEq for PrimeFieldElement<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.value.ct_eq(&other.value)
    }
}

impl<P: FieldParams> ConstantTimeLess for PrimeFieldElement<P> {}

impl<P: FieldParams> ConstantTimeGreater for PrimeFieldElement<P> {
    fn ct_gt(&self, other: &Self) -> Choice {
        let (_, borrow) = other.value.borrowing_sub(&self.value);
        Choice::from(borrow as u8)
    }
}

impl<P: FieldParams> DefaultIsZeroes for PrimeFieldElement<P> {}

impl<P: FieldParams> From<u64> for PrimeFieldElement<P> {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl<P: FieldParams> From<u32> for PrimeFieldElement<P> {
    fn from(n: u32) -> Self {
        Self::from_u64(n.into())
    }
}

impl<P: FieldParams> From<PrimeFieldElement<P>> for U264 {
    fn from(fe: PrimeFieldElement<P>) -> U264 {
        fe.value
    }
}

impl<P: FieldParams> From<&PrimeFieldElement<P>> for U264 {
    fn from(fe: &PrimeFieldElement<P>) -> U264 {
        fe.value
    }
}

impl<P: FieldParams> From<PrimeFieldElement<P>> for FieldBytes {
    fn from(fe: PrimeFieldElement<P>) -> FieldBytes {
        fe.to_bytes()
    }
}

/// Parses `0x`-prefixed hex or plain decimal, reducing into the field.
impl<P: FieldParams> FromStr for PrimeFieldElement<P> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        U264::from_str(s).map(|uint| Self::from_uint(&uint))
    }
}

impl<P: FieldParams> fmt::Debug for PrimeFieldElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeFieldElement({:#x})", self.value)
    }
}

/// Canonical `0x`-prefixed lowercase hex.
impl<P: FieldParams> fmt::Display for PrimeFieldElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<P: FieldParams> fmt::LowerHex for PrimeFieldElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl<P: FieldParams> fmt::UpperHex for PrimeFieldElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl<P: FieldParams> $op for PrimeFieldElement<P> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                PrimeFieldElement::$inner(&self, &rhs)
            }
        }

        impl<P: FieldParams> $op<&PrimeFieldElement<P>> for PrimeFieldElement<P> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: &Self) -> Self {
                PrimeFieldElement::$inner(&self, rhs)
            }
        }

        impl<P: FieldParams> $op<&PrimeFieldElement<P>> for &PrimeFieldElement<P> {
            type Output = PrimeFieldElement<P>;

            #[inline]
            fn $op_fn(self, rhs: &PrimeFieldElement<P>) -> PrimeFieldElement<P> {
                PrimeFieldElement::$inner(self, rhs)
            }
        }

        impl<P: FieldParams> $op<PrimeFieldElement<P>> for &PrimeFieldElement<P> {
            type Output = PrimeFieldElement<P>;

            #[inline]
            fn $op_fn(self, rhs: PrimeFieldElement<P>) -> PrimeFieldElement<P> {
                PrimeFieldElement::$inner(self, &rhs)
            }
        }

        impl<P: FieldParams> $assign for PrimeFieldElement<P> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = PrimeFieldElement::$inner(self, &rhs);
            }
        }

        impl<P: FieldParams> $assign<&PrimeFieldElement<P>> for PrimeFieldElement<P> {
            #[inline]
            fn $assign_fn(&mut self, rhs: &Self) {
                *self = PrimeFieldElement::$inner(self, rhs);
            }
        }
    };
}

impl_field_op!(Add, add, AddAssign, add_assign, add);
impl_field_op!(Sub, sub, SubAssign, sub_assign, sub);
impl_field_op!(Mul, mul, MulAssign, mul_assign, multiply);

impl<P: FieldParams> Neg for PrimeFieldElement<P> {
    type Output = Self;

    fn neg(self) -> Self {
        PrimeFieldElement::neg(&self)
    }
}

impl<P: FieldParams> Neg for &PrimeFieldElement<P> {
    type Output = PrimeFieldElement<P>;

    fn neg(self) -> PrimeFieldElement<P> {
        PrimeFieldElement::neg(self)
    }
}

impl<P: FieldParams> Sum for PrimeFieldElement<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a, P: FieldParams> Sum<&'a Self> for PrimeFieldElement<P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<P: FieldParams> Product for PrimeFieldElement<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a, P: FieldParams> Product<&'a Self> for PrimeFieldElement<P> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

/// Serialized as 32 big-endian bytes; hex encoded for text formats.
#[cfg(feature = "serde")]
impl<P: FieldParams> Serialize for PrimeFieldElement<P> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: FieldParams> Deserialize<'de> for PrimeFieldElement<P> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let mut bytes = FieldBytes::default();
        serdect::array::deserialize_hex_or_bin(&mut bytes, deserializer)?;
        Self::from_canonical_bytes(&bytes)
            .ok_or_else(|| de::Error::custom("field element is not canonical"))
    }
}

#[cfg(test)]
mod tests {
    use super::PrimeFieldElement;
    use crate::{Error, U264, field_params};
    use alloc::string::ToString;
    use num_bigint::BigUint;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    field_params!(
        name: StarkParams,
        modulus: "0800000000000011000000000000000000000000000000000000000000000001",
        barrett_mu: "1fffffffffffffbc000000000000907ffffffffffeccf000000000028c81fffbff",
        multiplicative_generator: 3,
        doc: "Stark base field modulus"
    );

    type Fe = PrimeFieldElement<StarkParams>;

    crate::test_primefield!(Fe);

    fn modulus() -> BigUint {
        BigUint::from_bytes_be(&Fe::MODULUS.to_be_bytes())
    }

    fn to_biguint(fe: &Fe) -> BigUint {
        BigUint::from_bytes_be(&fe.to_bytes())
    }

    prop_compose! {
        fn field_element()(bytes in any::<[u8; 32]>()) -> Fe {
            Fe::from_be_bytes(&bytes)
        }
    }

    #[test]
    fn p_minus_one_plus_one_wraps_to_zero() {
        let a = Fe::from_hex("0x800000000000011000000000000000000000000000000000000000000000000")
            .unwrap();
        let sum = a + Fe::from_u64(1);
        assert_eq!(sum, Fe::ZERO);
        assert_eq!(sum.to_string(), "0x0");
    }

    #[test]
    fn construction_reduces() {
        let p = Fe::from_hex("0x800000000000011000000000000000000000000000000000000000000000001");
        assert_eq!(p, Ok(Fe::ZERO));
        assert_eq!(Fe::from_uint(&U264::MAX) + Fe::ONE, {
            let reduced = U264::MAX.checked_rem(&Fe::MODULUS).unwrap();
            Fe::from_uint(&reduced.checked_add(&U264::ONE).unwrap())
        });
        assert_eq!(Fe::from_dec_str("7"), Ok(Fe::from_u64(7)));
        assert_eq!(Fe::from_hex("xyz"), Err(Error::InvalidEncoding));
    }

    #[test]
    fn canonical_bytes_reject_modulus() {
        let mut bytes = [0u8; 32];
        Fe::MODULUS.write_be_bytes(&mut bytes).unwrap();
        assert!(Fe::from_canonical_bytes(&bytes).is_none());
        assert_eq!(Fe::from_be_bytes(&bytes), Fe::ZERO);
    }

    #[test]
    fn to_bytes_of_largest_element() {
        let mut expected = [0u8; 32];
        expected[0] = 0x08;
        expected[7] = 0x11;
        assert_eq!((-Fe::ONE).to_bytes(), expected);
        assert_eq!(Fe::ZERO.to_bytes(), [0u8; 32]);
    }

    #[test]
    fn invert_zero_is_error() {
        assert_eq!(Fe::ZERO.invert(), Err(Error::DivisionByZero));
    }

    field_params!(
        name: P192ScalarParams,
        modulus: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
        barrett_mu: "1000000000000000000000000662107c9eb94364e4b2dd7cf",
        multiplicative_generator: 3,
        doc: "P-192 scalar modulus"
    );

    /// Counts how many candidates `random` draws.
    struct CountingRng {
        inner: rand_core::OsRng,
        draws: usize,
    }

    impl rand_core::RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dest);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.draws += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    #[test]
    fn random_small_modulus() {
        type Small = PrimeFieldElement<P192ScalarParams>;

        let mut rng = CountingRng {
            inner: rand_core::OsRng,
            draws: 0,
        };
        let mut widest = 0;
        for _ in 0..32 {
            rng.draws = 0;
            let fe = Small::random(&mut rng);
            assert!(fe.to_uint() < Small::MODULUS);
            assert!(rng.draws <= 8, "random() drew {} candidates", rng.draws);
            widest = widest.max(fe.to_uint().bits());
        }
        // the top byte is drawn too, not just the low bits
        assert!(widest > 184);
    }

    #[test]
    fn random_is_canonical() {
        let mut rng = rand_core::OsRng;
        for _ in 0..32 {
            let fe = Fe::random(&mut rng);
            assert!(fe.to_uint() < Fe::MODULUS);
        }
    }

    proptest! {
        #[test]
        fn bytes_and_hex_roundtrip(a in field_element()) {
            prop_assert_eq!(Fe::from_canonical_bytes(&a.to_bytes()), Some(a));
            prop_assert_eq!(Fe::from_hex(&a.to_string()), Ok(a));
        }

        #[test]
        fn add_matches_biguint(a in field_element(), b in field_element()) {
            prop_assert_eq!(to_biguint(&(a + b)), (to_biguint(&a) + to_biguint(&b)) % modulus());
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn sub_matches_biguint(a in field_element(), b in field_element()) {
            let expected = (to_biguint(&a) + modulus() - to_biguint(&b)) % modulus();
            prop_assert_eq!(to_biguint(&(a - b)), expected);
            prop_assert_eq!(a - b + b, a);
        }

        #[test]
        fn mul_matches_biguint(a in field_element(), b in field_element(), c in field_element()) {
            prop_assert_eq!(to_biguint(&(a * b)), (to_biguint(&a) * to_biguint(&b)) % modulus());
            prop_assert_eq!(a * b, b * a);
            prop_assert_eq!((a * b) * c, a * (b * c));
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn negate(a in field_element()) {
            prop_assert_eq!(a + (-a), Fe::ZERO);
            let expected = (modulus() - to_biguint(&a)) % modulus();
            prop_assert_eq!(to_biguint(&-a), expected);
        }

        #[test]
        fn square(a in field_element()) {
            prop_assert_eq!(a.square(), a * a);
        }

        #[test]
        fn invert_matches_biguint(a in field_element()) {
            match a.invert() {
                Ok(inv) => {
                    prop_assert_eq!(a * inv, Fe::ONE);
                    prop_assert!((to_biguint(&a) * to_biguint(&inv) % modulus()).is_one());
                }
                Err(_) => prop_assert!(to_biguint(&a).is_zero()),
            }
        }

        #[test]
        fn sqrt_of_square(a in field_element()) {
            let square = a.square();
            let root = square.sqrt().unwrap();
            prop_assert!(root == a || root == -a);
        }
    }
}
