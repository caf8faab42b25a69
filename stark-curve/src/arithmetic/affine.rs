//! Affine points

#![allow(clippy::op_ref)]

use super::{CURVE_EQUATION_A, CURVE_EQUATION_B, FieldElement, ProjectivePoint, Scalar};
use crate::{Error, Result};
use core::ops::{Mul, Neg};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// Stark curve point expressed in affine coordinates.
///
/// The point at infinity is tagged explicitly rather than encoded as a
/// coordinate pair; its `x` and `y` are both zero.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: FieldElement,

    /// y-coordinate
    pub(crate) y: FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    pub(super) infinity: u8,
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of the Stark curve.
    ///
    /// ```text
    /// Gₓ = 01ef15c1 8599971b 7beced41 5a40f0c7 deacfd9b 0d1819e0 3d723d8b c943cfca
    /// Gᵧ = 00566806 0aa49730 b7be4801 df46ec62 de53ecd1 1abe43a3 2873000c 36e8dc1f
    /// ```
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_hex_vartime(
            "01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca",
        ),
        y: FieldElement::from_hex_vartime(
            "005668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f",
        ),
        infinity: 0,
    };

    /// Create a new [`AffinePoint`] with the given coordinates.
    pub(crate) const fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y, infinity: 0 }
    }

    /// Create a point from its coordinates, checking that it lies on the curve.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Self::new(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::InvalidEncoding)
        }
    }

    /// Recover the point with the given x-coordinate and y parity.
    ///
    /// Returns `None` if `x³ + αx + β` is not a square.
    pub fn decompress(x: &FieldElement, y_is_odd: Choice) -> Option<Self> {
        let beta = curve_equation(x).sqrt()?;
        let y = FieldElement::conditional_select(&-beta, &beta, beta.is_odd().ct_eq(&y_is_odd));
        Some(Self::new(*x, y))
    }

    /// Recover a point from its x-coordinate alone, picking the even y.
    ///
    /// This is how x-only ("stark key") public keys are lifted back onto the curve.
    pub fn from_x(x: &FieldElement) -> Option<Self> {
        Self::decompress(x, Choice::from(0))
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Does this point satisfy `y² = x³ + αx + β`?
    ///
    /// The identity is considered to be on the curve.
    pub fn is_on_curve(&self) -> bool {
        bool::from(self.is_identity()) || self.y.square() == curve_equation(&self.x)
    }

    /// Convert to its Jacobian representation.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint::from(*self)
    }
}

/// Right-hand side of the curve equation: `x³ + αx + β`.
fn curve_equation(x: &FieldElement) -> FieldElement {
    (x.square() * x) + &(CURVE_EQUATION_A * x) + &CURVE_EQUATION_B
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &AffinePoint, b: &AffinePoint, choice: Choice) -> AffinePoint {
        AffinePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &AffinePoint) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DefaultIsZeroes for AffinePoint {}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl Mul<Scalar> for AffinePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: Scalar) -> ProjectivePoint {
        ProjectivePoint::from(self) * scalar
    }
}

impl Mul<&Scalar> for AffinePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        ProjectivePoint::from(self) * scalar
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> Self::Output {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;
    use crate::{Error, FieldElement};
    use subtle::Choice;

    #[test]
    fn generator_is_on_curve() {
        assert!(AffinePoint::GENERATOR.is_on_curve());
        assert!(AffinePoint::IDENTITY.is_on_curve());
        assert!(!AffinePoint::new(FieldElement::ZERO, FieldElement::ZERO).is_on_curve());
    }

    #[test]
    fn affine_negation() {
        let basepoint = AffinePoint::GENERATOR;
        assert_eq!(-(-basepoint), basepoint);
        assert_ne!(-basepoint, basepoint);
        assert!((-basepoint).is_on_curve());
        assert_eq!(-AffinePoint::IDENTITY, AffinePoint::IDENTITY);
    }

    #[test]
    fn from_coordinates() {
        let g = AffinePoint::GENERATOR;
        assert_eq!(AffinePoint::from_coordinates(g.x(), g.y()), Ok(g));
        assert_eq!(
            AffinePoint::from_coordinates(g.x(), g.y() + FieldElement::ONE),
            Err(Error::InvalidEncoding)
        );
    }

    #[test]
    fn decompress_round_trip() {
        let g = AffinePoint::GENERATOR;
        assert_eq!(AffinePoint::decompress(&g.x(), g.y().is_odd()), Some(g));
        assert_eq!(AffinePoint::decompress(&g.x(), !g.y().is_odd()), Some(-g));
    }

    #[test]
    fn from_x_picks_even_y() {
        let point = AffinePoint::from_x(&AffinePoint::GENERATOR.x()).unwrap();
        assert!(!bool::from(point.y().is_odd()));
        assert_eq!(point.x(), AffinePoint::GENERATOR.x());
        assert!(point.is_on_curve());
    }

    #[test]
    fn from_x_rejects_x_off_curve() {
        let x = FieldElement::from_hex_vartime(
            "03ee9bffffffffff26ffffffff60ffffffffffffffffffffffffffff004accff",
        );
        assert_eq!(AffinePoint::from_x(&x), None);
        assert_eq!(AffinePoint::decompress(&x, Choice::from(1)), None);
    }
}
