//! Limb-level helpers shared by the integer and reduction code.
//!
//! Multi-limb values are little-endian slices of [`Limb`]s.

use core::cmp::Ordering;

/// Single machine word of a multi-limb integer.
pub type Limb = u64;

/// Double-width limb for carries.
pub(crate) type WideLimb = u128;

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let ret = (a as WideLimb) + (b as WideLimb) + (carry as WideLimb);
    (ret as Limb, (ret >> 64) as Limb)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow
/// (`0` or `1`).
#[inline(always)]
pub(crate) const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let ret = (a as WideLimb).wrapping_sub((b as WideLimb) + (borrow as WideLimb));
    (ret as Limb, ((ret >> 64) as Limb) & 1)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: Limb, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
    let ret = (a as WideLimb) + ((b as WideLimb) * (c as WideLimb)) + (carry as WideLimb);
    (ret as Limb, (ret >> 64) as Limb)
}

/// Schoolbook product `out = a * b`.
///
/// `out` must hold at least `a.len() + b.len()` limbs; any limbs beyond that are
/// zeroed.
pub(crate) fn mul_into(a: &[Limb], b: &[Limb], out: &mut [Limb]) {
    debug_assert!(out.len() >= a.len() + b.len());
    out.fill(0);

    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, &bj) in b.iter().enumerate() {
            let (lo, hi) = mac(out[i + j], ai, bj, carry);
            out[i + j] = lo;
            carry = hi;
        }
        out[i + b.len()] = carry;
    }
}

/// Compares two equal-length values.
pub(crate) fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// `a -= b` over equal-length values, returning the final borrow.
pub(crate) fn sub_assign(a: &mut [Limb], b: &[Limb]) -> Limb {
    let mut borrow = 0;
    for (x, &y) in a.iter_mut().zip(b) {
        (*x, borrow) = sbb(*x, y, borrow);
    }
    borrow
}

/// Number of significant bits in a little-endian value.
pub(crate) fn bit_len(a: &[Limb]) -> usize {
    for (i, &limb) in a.iter().enumerate().rev() {
        if limb != 0 {
            return i * 64 + (64 - limb.leading_zeros() as usize);
        }
    }
    0
}

/// Binary long division of an arbitrary-length numerator by a divisor occupying the
/// same number of limbs as the remainder.
///
/// Writes the quotient into `quo` (which must be as long as `num`) and returns the
/// remainder. The divisor must be non-zero and leave one spare bit of headroom in
/// its top limb.
pub(crate) fn div_rem_into<const N: usize>(
    num: &[Limb],
    den: &[Limb; N],
    quo: &mut [Limb],
) -> [Limb; N] {
    debug_assert!(quo.len() >= num.len());
    debug_assert!(den[N - 1] >> 63 == 0);
    quo.fill(0);

    let mut rem = [0; N];
    for i in (0..bit_len(num)).rev() {
        let bit = (num[i / 64] >> (i % 64)) & 1;

        let mut carry = bit;
        for limb in rem.iter_mut() {
            let next = *limb >> 63;
            *limb = (*limb << 1) | carry;
            carry = next;
        }

        if cmp(&rem, den) != Ordering::Less {
            sub_assign(&mut rem, den);
            quo[i / 64] |= 1 << (i % 64);
        }
    }

    rem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbb_borrow_is_zero_or_one() {
        assert_eq!(sbb(0, 1, 0), (u64::MAX, 1));
        assert_eq!(sbb(5, 3, 1), (1, 0));
        assert_eq!(sbb(0, u64::MAX, 1), (0, 1));
    }

    #[test]
    fn mul_into_full_width() {
        let mut out = [0; 4];
        mul_into(&[u64::MAX, u64::MAX], &[u64::MAX, u64::MAX], &mut out);
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        assert_eq!(out, [1, 0, u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn long_division() {
        let mut quo = [0; 2];
        let rem = div_rem_into(&[7, 1], &[10], &mut quo);
        // (2^64 + 7) = 10 * 1844674407370955162 + 3
        assert_eq!(quo, [1844674407370955162, 0]);
        assert_eq!(rem, [3]);
    }
}
