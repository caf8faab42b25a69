//! Scalar multiplication.
//!
//! Double-and-add over the bits of the scalar, most significant first. Not
//! constant time; see the crate-level security notes.

use super::{ProjectivePoint, Scalar};
use core::ops::{Mul, MulAssign};
use fixint::U264;

impl ProjectivePoint {
    /// Multiply this point by an arbitrary integer `k`, without reducing it modulo
    /// the group order.
    ///
    /// Runs in time proportional to the bit length of `k`.
    pub fn mul_by_bits(&self, k: &U264) -> ProjectivePoint {
        let mut acc = ProjectivePoint::IDENTITY;
        for i in (0..k.bits()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc += self;
            }
        }
        acc
    }
}

/// Calculates `x * k + y * l`.
///
/// Both multiplications share their doublings (Shamir's trick), which is what
/// signature verification spends most of its time on.
pub fn lincomb(
    x: &ProjectivePoint,
    k: &Scalar,
    y: &ProjectivePoint,
    l: &Scalar,
) -> ProjectivePoint {
    let k = k.to_uint();
    let l = l.to_uint();
    let xy = x + y;

    let mut acc = ProjectivePoint::IDENTITY;
    for i in (0..k.bits().max(l.bits())).rev() {
        acc = acc.double();
        match (k.bit(i), l.bit(i)) {
            (true, true) => acc += &xy,
            (true, false) => acc += x,
            (false, true) => acc += y,
            (false, false) => {}
        }
    }
    acc
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: Scalar) -> ProjectivePoint {
        self.mul_by_bits(&scalar.to_uint())
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        self.mul_by_bits(&scalar.to_uint())
    }
}

impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        self.mul_by_bits(&scalar.to_uint())
    }
}

impl Mul<Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: Scalar) -> ProjectivePoint {
        self.mul_by_bits(&scalar.to_uint())
    }
}

impl MulAssign<Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = *self * rhs;
    }
}

impl MulAssign<&Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: &Scalar) {
        *self = *self * rhs;
    }
}
