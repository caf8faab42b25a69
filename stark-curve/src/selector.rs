//! Entry point selectors.

use crate::FieldElement;
use stark_digests::keccak256;

/// Keccak-256 of `data`, truncated to its low 250 bits so it always fits a field element.
pub fn sn_keccak(data: &[u8]) -> FieldElement {
    let mut digest = keccak256(data);
    digest[0] &= 0x03;
    FieldElement::from_be_bytes(&digest)
}

/// Selector of a contract entry point: the [`sn_keccak`] of its name.
pub fn get_selector_from_name(name: &str) -> FieldElement {
    sn_keccak(name.as_bytes())
}
