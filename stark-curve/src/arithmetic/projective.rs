//! Projective points in Jacobian coordinates.

#![allow(clippy::op_ref)]

use super::{AffinePoint, CURVE_EQUATION_A, FieldElement};
use core::{
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// A point on the Stark curve in Jacobian coordinates.
///
/// `(X, Y, Z)` represents the affine point `(X / Z², Y / Z³)`; `Z = 0` is the
/// point at infinity. Addition and doubling never invert, so long chains of group
/// operations convert back to affine only once.
///
/// Group operations branch on their inputs and are not constant time.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl ProjectivePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ONE,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// Base point of the Stark curve.
    pub const GENERATOR: Self = Self {
        x: AffinePoint::GENERATOR.x,
        y: AffinePoint::GENERATOR.y,
        z: FieldElement::ONE,
    };

    /// Returns the affine representation of this point.
    ///
    /// Performs a single field inversion.
    pub fn to_affine(&self) -> AffinePoint {
        match self.z.invert() {
            Ok(zinv) => self.to_affine_internal(zinv),
            Err(_) => AffinePoint::IDENTITY,
        }
    }

    fn to_affine_internal(self, zinv: FieldElement) -> AffinePoint {
        let zinv2 = zinv.square();
        let x = self.x * &zinv2;
        let y = self.y * &(zinv2 * &zinv);
        AffinePoint::new(x, y)
    }

    /// Convert a batch of points to affine coordinates with a single inversion.
    pub fn batch_normalize<const N: usize>(points: &[Self; N]) -> [AffinePoint; N] {
        let mut zs = [FieldElement::ONE; N];
        let mut affine_points = [AffinePoint::IDENTITY; N];
        batch_normalize_generic(points, &mut zs, &mut affine_points);
        affine_points
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns `-self`.
    fn neg(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Doubles this point.
    pub fn double(&self) -> ProjectivePoint {
        if bool::from(self.is_identity() | self.y.is_zero()) {
            return Self::IDENTITY;
        }

        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();

        // S = 4·X·Y²
        let s = (self.x * &yy).double().double();
        // M = 3·X² + α·Z⁴
        let m = xx.double() + &xx + &(CURVE_EQUATION_A * &zz.square());

        let x = m.square() - &s.double();
        let y = m * &(s - &x) - &yy.square().double().double().double();
        let z = (self.y * &self.z).double();

        ProjectivePoint { x, y, z }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &ProjectivePoint) -> ProjectivePoint {
        if bool::from(self.is_identity()) {
            return *other;
        }
        if bool::from(other.is_identity()) {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * &z2z2;
        let u2 = other.x * &z1z1;
        let s1 = self.y * &z2z2 * &other.z;
        let s2 = other.y * &z1z1 * &self.z;

        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let h = u2 - &u1;
        let r = s2 - &s1;
        self.add_internal(&u1, &s1, &h, &r, h * &self.z * &other.z)
    }

    /// Returns `self + other` for an affine `other`, saving the work of `Z₂ = 1`.
    pub fn add_mixed(&self, other: &AffinePoint) -> ProjectivePoint {
        if bool::from(other.is_identity()) {
            return *self;
        }
        if bool::from(self.is_identity()) {
            return ProjectivePoint::from(*other);
        }

        let z1z1 = self.z.square();
        let u2 = other.x * &z1z1;
        let s2 = other.y * &z1z1 * &self.z;

        if self.x == u2 {
            return if self.y == s2 {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let h = u2 - &self.x;
        let r = s2 - &self.y;
        self.add_internal(&self.x, &self.y, &h, &r, h * &self.z)
    }

    /// Shared tail of the addition formulas, given `U₁`, `S₁`, `H = U₂ − U₁`,
    /// `R = S₂ − S₁` and the output `Z`.
    fn add_internal(
        &self,
        u1: &FieldElement,
        s1: &FieldElement,
        h: &FieldElement,
        r: &FieldElement,
        z: FieldElement,
    ) -> ProjectivePoint {
        let hh = h.square();
        let hhh = hh * h;
        let v = u1 * &hh;

        let x = r.square() - &hhh - &v.double();
        let y = r * &(v - &x) - &(s1 * &hhh);

        ProjectivePoint { x, y, z }
    }

    /// Returns `self - other`.
    fn sub(&self, other: &ProjectivePoint) -> ProjectivePoint {
        self.add(&other.neg())
    }

    /// Returns `self - other`.
    fn sub_mixed(&self, other: &AffinePoint) -> ProjectivePoint {
        self.add_mixed(&other.neg())
    }

    /// Check whether `self` is equal to an affine point.
    ///
    /// This is a lot faster than first converting `self` to an `AffinePoint` and then doing the
    /// comparison.
    pub fn eq_affine(&self, other: &AffinePoint) -> Choice {
        let lhs_identity = self.is_identity();
        let rhs_identity = other.is_identity();

        let z1z1 = self.z.square();
        let x_eq = self.x.ct_eq(&(other.x * &z1z1));
        let y_eq = self.y.ct_eq(&(other.y * &z1z1 * &self.z));

        (lhs_identity & rhs_identity) | (!lhs_identity & !rhs_identity & x_eq & y_eq)
    }
}

fn batch_normalize_generic(
    points: &[ProjectivePoint],
    zs: &mut [FieldElement],
    out: &mut [AffinePoint],
) {
    // Montgomery's trick: `zs[i]` holds the product of every preceding non-identity `Z`.
    let mut acc = FieldElement::ONE;
    for (point, z) in points.iter().zip(zs.iter_mut()) {
        *z = acc;
        if !bool::from(point.is_identity()) {
            acc *= &point.z;
        }
    }

    // identity points are skipped above, so `acc` is nonzero
    let mut inv = acc.invert().unwrap_or_default();

    for ((point, z), affine) in points.iter().zip(zs.iter()).zip(out.iter_mut()).rev() {
        if bool::from(point.is_identity()) {
            *affine = AffinePoint::IDENTITY;
            continue;
        }
        let zinv = inv * z;
        inv *= &point.z;
        *affine = point.to_affine_internal(zinv);
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        Self::from(*p)
    }
}

impl From<ProjectivePoint> for AffinePoint {
    fn from(p: ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}

impl From<&ProjectivePoint> for AffinePoint {
    fn from(p: &ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X₁, Y₁, Z₁) and (X₂, Y₂, Z₂) are equal iff X₁·Z₂² = X₂·Z₁² and
        // Y₁·Z₂³ = Y₂·Z₁³, unless one of them is the point at infinity.
        let lhs_identity = self.is_identity();
        let rhs_identity = other.is_identity();

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let x_eq = (self.x * &z2z2).ct_eq(&(other.x * &z1z1));
        let y_eq = (self.y * &z2z2 * &other.z).ct_eq(&(other.y * &z1z1 * &self.z));

        (lhs_identity & rhs_identity) | (!lhs_identity & !rhs_identity & x_eq & y_eq)
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl PartialEq<AffinePoint> for ProjectivePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        self.eq_affine(other).into()
    }
}

impl PartialEq<ProjectivePoint> for AffinePoint {
    fn eq(&self, other: &ProjectivePoint) -> bool {
        other.eq_affine(self).into()
    }
}

impl Eq for ProjectivePoint {}

impl Default for ProjectivePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DefaultIsZeroes for ProjectivePoint {}

impl Add<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(self, other)
    }
}

impl Add<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, &other)
    }
}

impl Add<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, other)
    }
}

impl AddAssign<ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl AddAssign<&ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: &ProjectivePoint) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl Add<AffinePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: AffinePoint) -> ProjectivePoint {
        ProjectivePoint::add_mixed(&self, &other)
    }
}

impl Add<&AffinePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint::add_mixed(self, other)
    }
}

impl Add<&AffinePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint::add_mixed(&self, other)
    }
}

impl AddAssign<AffinePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: AffinePoint) {
        *self = ProjectivePoint::add_mixed(self, &rhs);
    }
}

impl AddAssign<&AffinePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: &AffinePoint) {
        *self = ProjectivePoint::add_mixed(self, rhs);
    }
}

impl Sum for ProjectivePoint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ProjectivePoint::IDENTITY, |a, b| a + b)
    }
}

impl<'a> Sum<&'a ProjectivePoint> for ProjectivePoint {
    fn sum<I: Iterator<Item = &'a ProjectivePoint>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl Sub<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, &other)
    }
}

impl Sub<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(self, other)
    }
}

impl Sub<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, other)
    }
}

impl SubAssign<ProjectivePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl SubAssign<&ProjectivePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: &ProjectivePoint) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl Sub<AffinePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: AffinePoint) -> ProjectivePoint {
        ProjectivePoint::sub_mixed(&self, &other)
    }
}

impl Sub<&AffinePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint::sub_mixed(self, other)
    }
}

impl Sub<&AffinePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint::sub_mixed(&self, other)
    }
}

impl SubAssign<AffinePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: AffinePoint) {
        *self = ProjectivePoint::sub_mixed(self, &rhs);
    }
}

impl SubAssign<&AffinePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: &AffinePoint) {
        *self = ProjectivePoint::sub_mixed(self, rhs);
    }
}

impl Neg for ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(&self)
    }
}

impl Neg for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{AffinePoint, ProjectivePoint};
    use crate::{FieldElement, test_vectors::group::ADD_TEST_VECTORS};

    #[test]
    fn affine_to_projective() {
        let basepoint_affine = AffinePoint::GENERATOR;
        let basepoint_projective = ProjectivePoint::GENERATOR;

        assert_eq!(
            ProjectivePoint::from(basepoint_affine),
            basepoint_projective,
        );
        assert_eq!(basepoint_projective.to_affine(), basepoint_affine);
        assert!(!bool::from(basepoint_projective.to_affine().is_identity()));

        assert!(bool::from(
            ProjectivePoint::IDENTITY.to_affine().is_identity()
        ));
        assert_eq!(
            ProjectivePoint::from(AffinePoint::IDENTITY),
            ProjectivePoint::IDENTITY
        );
    }

    #[test]
    fn batch_normalize() {
        let g = ProjectivePoint::GENERATOR;
        let h = g.double() + &g;

        let expected = [g.to_affine(), AffinePoint::IDENTITY, h.to_affine()];
        assert_eq!(
            ProjectivePoint::batch_normalize(&[g, ProjectivePoint::IDENTITY, h]),
            expected
        );
        assert_eq!(
            ProjectivePoint::batch_normalize(&[ProjectivePoint::IDENTITY; 2]),
            [AffinePoint::IDENTITY; 2]
        );
    }

    #[test]
    fn projective_identity_addition() {
        let identity = ProjectivePoint::IDENTITY;
        let generator = ProjectivePoint::GENERATOR;

        assert_eq!(identity + &generator, generator);
        assert_eq!(generator + &identity, generator);
        assert_eq!(identity.double(), identity);
    }

    #[test]
    fn projective_mixed_addition() {
        let identity = ProjectivePoint::IDENTITY;
        let basepoint_affine = AffinePoint::GENERATOR;
        let basepoint_projective = ProjectivePoint::GENERATOR;

        assert_eq!(identity + &basepoint_affine, basepoint_projective);
        assert_eq!(
            basepoint_projective + &basepoint_affine,
            basepoint_projective + &basepoint_projective
        );
    }

    #[test]
    fn test_vector_repeated_add() {
        let generator = ProjectivePoint::GENERATOR;
        let mut p = generator;

        for (expected_x, expected_y) in ADD_TEST_VECTORS {
            let affine = p.to_affine();
            assert_eq!(affine.x().to_bytes(), *expected_x);
            assert_eq!(affine.y().to_bytes(), *expected_y);

            p += &generator;
        }
    }

    #[test]
    fn test_vector_repeated_add_mixed() {
        let generator = AffinePoint::GENERATOR;
        let mut p = ProjectivePoint::GENERATOR;

        for (expected_x, expected_y) in ADD_TEST_VECTORS {
            let affine = p.to_affine();
            assert_eq!(affine.x().to_bytes(), *expected_x);
            assert_eq!(affine.y().to_bytes(), *expected_y);

            p += &generator;
        }
    }

    #[test]
    fn test_vector_add_mixed_identity() {
        let generator = ProjectivePoint::GENERATOR;
        let p0 = generator + ProjectivePoint::IDENTITY;
        let p1 = generator + AffinePoint::IDENTITY;
        assert_eq!(p0, p1);
    }

    #[test]
    fn test_vector_double_generator() {
        let generator = ProjectivePoint::GENERATOR;
        let mut p = generator;

        for i in 0..2 {
            let affine = p.to_affine();

            let (expected_x, expected_y) = ADD_TEST_VECTORS[(1 << i) - 1];
            assert_eq!(affine.x().to_bytes(), expected_x);
            assert_eq!(affine.y().to_bytes(), expected_y);

            p = p.double();
        }
    }

    #[test]
    fn projective_add_vs_double() {
        let generator = ProjectivePoint::GENERATOR;

        let r1 = generator + &generator;
        let r2 = generator.double();
        assert_eq!(r1, r2);

        let r1 = (generator + &generator) + &(generator + &generator);
        let r2 = generator.double().double();
        assert_eq!(r1, r2);
    }

    #[test]
    fn projective_add_and_sub() {
        let basepoint_affine = AffinePoint::GENERATOR;
        let basepoint_projective = ProjectivePoint::GENERATOR;

        assert_eq!(
            (basepoint_projective + &basepoint_projective) - &basepoint_projective,
            basepoint_projective
        );
        assert_eq!(
            (basepoint_projective + &basepoint_affine) - &basepoint_affine,
            basepoint_projective
        );
    }

    #[test]
    fn projective_double_and_sub() {
        let generator = ProjectivePoint::GENERATOR;
        assert_eq!(generator.double() - &generator, generator);
    }

    #[test]
    fn adding_negation_gives_identity() {
        let generator = ProjectivePoint::GENERATOR;
        assert_eq!(generator + &(-generator), ProjectivePoint::IDENTITY);
        assert_eq!(generator - AffinePoint::GENERATOR, ProjectivePoint::IDENTITY);
    }

    #[test]
    fn double_of_point_with_zero_y() {
        // y = 0 means order two; no such point is on the curve, but doubling must not divide by it
        let point = ProjectivePoint {
            x: FieldElement::ONE,
            y: FieldElement::ZERO,
            z: FieldElement::ONE,
        };
        assert_eq!(point.double(), ProjectivePoint::IDENTITY);
    }

    #[test]
    fn projective_equality() {
        use core::ops::Neg;
        assert_ne!(ProjectivePoint::GENERATOR, ProjectivePoint::IDENTITY);
        assert_ne!(ProjectivePoint::IDENTITY, ProjectivePoint::GENERATOR);
        assert_eq!(ProjectivePoint::IDENTITY, ProjectivePoint::IDENTITY);
        assert_eq!(ProjectivePoint::IDENTITY.neg(), ProjectivePoint::IDENTITY);
        assert_eq!(ProjectivePoint::GENERATOR, ProjectivePoint::GENERATOR);
        assert_ne!(ProjectivePoint::GENERATOR, ProjectivePoint::GENERATOR.neg());

        assert_ne!(ProjectivePoint::GENERATOR, AffinePoint::IDENTITY);
        assert_ne!(ProjectivePoint::IDENTITY, AffinePoint::GENERATOR);
        assert_eq!(ProjectivePoint::IDENTITY, AffinePoint::IDENTITY);
        assert_eq!(ProjectivePoint::IDENTITY.neg(), AffinePoint::IDENTITY);
        assert_eq!(ProjectivePoint::GENERATOR, AffinePoint::GENERATOR);
        assert_ne!(ProjectivePoint::GENERATOR.neg(), AffinePoint::GENERATOR);
        assert_eq!(
            ProjectivePoint::GENERATOR.neg(),
            AffinePoint::GENERATOR.neg()
        );

        // same point, different Z
        let doubled = ProjectivePoint::GENERATOR.double();
        assert_eq!(doubled, ProjectivePoint::from(doubled.to_affine()));
    }
}
