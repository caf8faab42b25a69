//! Pedersen hash base points.

use crate::{AffinePoint, FieldElement};

/// Starting point of the accumulator.
pub(crate) const SHIFT_POINT: AffinePoint = AffinePoint::new(
    FieldElement::from_hex_vartime(
        "049ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804",
    ),
    FieldElement::from_hex_vartime(
        "03ca0cfe4b3bc6ddf346d49d06ea0ed34e621062c0e056c1d0405d266e10268a",
    ),
);

/// Base for the low 248 bits of the first input.
pub(crate) const P0: AffinePoint = AffinePoint::new(
    FieldElement::from_hex_vartime(
        "0234287dcbaffe7f969c748655fca9e58fa8120b6d56eb0c1080d17957ebe47b",
    ),
    FieldElement::from_hex_vartime(
        "03b056f100f96fb21e889527d41f4e39940135dd7a6c94cc6ed0268ee89e5615",
    ),
);

/// Base for the high 4 bits of the first input.
pub(crate) const P1: AffinePoint = AffinePoint::new(
    FieldElement::from_hex_vartime(
        "04fa56f376c83db33f9dab2656558f3399099ec1de5e3018b7a6932dba8aa378",
    ),
    FieldElement::from_hex_vartime(
        "03fa0984c931c9e38113e0c0e47e4401562761f92a7a23b45168f4e80ff5b54d",
    ),
);

/// Base for the low 248 bits of the second input.
pub(crate) const P2: AffinePoint = AffinePoint::new(
    FieldElement::from_hex_vartime(
        "04ba4cc166be8dec764910f75b45f74b40c690c74709e90f3aa372f0bd2d6997",
    ),
    FieldElement::from_hex_vartime(
        "0040301cf5c1751f4b971e46c4ede85fcac5c59a5ce5ae7c48151f27b24b219c",
    ),
);

/// Base for the high 4 bits of the second input.
pub(crate) const P3: AffinePoint = AffinePoint::new(
    FieldElement::from_hex_vartime(
        "054302dcb0e6cc1c6e44cca8f61a63bb2ca65048d53fb325d36ff12c49a58202",
    ),
    FieldElement::from_hex_vartime(
        "01b77b3e37d13504b348046268d8ae25ce98ad783c25561a879dcc77e99c2426",
    ),
);

#[cfg(test)]
mod tests {
    use super::{P0, P1, P2, P3, SHIFT_POINT};

    #[test]
    fn points_are_on_curve() {
        for point in [SHIFT_POINT, P0, P1, P2, P3] {
            assert!(point.is_on_curve());
        }
    }
}
