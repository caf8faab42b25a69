//! Deterministic nonce generation.
//!
//! HMAC-DRBG over SHA-256 as described in [RFC 6979 § 3.2], seeded with
//! `int2octets(d) ‖ int2octets(h) ‖ extra_entropy`, with two departures from the
//! generic algorithm that the chain's signers share:
//!
//! - `bits2int` strips leading zero bytes before shifting a candidate down to
//!   252 bits, so a candidate whose first byte is zero is not shifted at all;
//! - a digest that is exactly 63 hex digits long is padded with a trailing zero
//!   digit before `bits2int`, which undoes the 4-bit shift and keeps the digest
//!   intact.
//!
//! [RFC 6979 § 3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-3.2

use crate::{Error, FieldElement, Result, Scalar, U264, arithmetic::private_key_scalar};
use stark_digests::{HmacSha256, hmac_sha256};
use zeroize::Zeroize;

/// Bit length of the group order.
const ORDER_BITS: usize = 252;

/// Upper bound on DRBG outputs drawn for a single signature.
const MAX_ITERATIONS: usize = 1000;

/// Derive the deterministic nonce `k` for signing `digest` with `private_key`.
///
/// Returns [`Error::KeyOutOfRange`] unless `0 < private_key < N`.
pub fn generate_k(digest: &FieldElement, private_key: &FieldElement) -> Result<Scalar> {
    generate_k_with_entropy(digest, private_key, &FieldElement::ZERO)
}

/// Like [`generate_k`], with `extra_entropy` appended to the DRBG seed as its
/// minimal big-endian encoding. Zero adds nothing, so it is the same as
/// [`generate_k`].
pub fn generate_k_with_entropy(
    digest: &FieldElement,
    private_key: &FieldElement,
    extra_entropy: &FieldElement,
) -> Result<Scalar> {
    let private_key = private_key_scalar(private_key)?;
    Nonces::new(&private_key, digest, extra_entropy)
        .next()
        .ok_or(Error::SigningFailed)
}

/// Stream of acceptable nonces in `(0, N)`.
///
/// Ends once [`MAX_ITERATIONS`] DRBG outputs have been drawn, counting rejected
/// candidates.
pub(super) struct Nonces {
    drbg: HmacDrbg,
    remaining: usize,
}

impl Nonces {
    pub(super) fn new(
        private_key: &Scalar,
        digest: &FieldElement,
        extra_entropy: &FieldElement,
    ) -> Self {
        let h = bits2int_mod_n(digest);
        let extra_entropy = extra_entropy.to_bytes();
        let start = leading_zeros(&extra_entropy);

        let mut private_key = private_key.to_bytes();
        let drbg = HmacDrbg::new(&private_key, &h.to_bytes(), &extra_entropy[start..]);
        private_key.zeroize();

        Self {
            drbg,
            remaining: MAX_ITERATIONS,
        }
    }
}

impl Iterator for Nonces {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        while self.remaining > 0 {
            self.remaining -= 1;

            let mut candidate = [0u8; 32];
            self.drbg.fill_bytes(&mut candidate);
            let k = bits2int(&candidate);
            candidate.zeroize();

            if !k.is_zero() && k < Scalar::MODULUS {
                return Some(Scalar::from_uint(&k));
            }
        }
        None
    }
}

/// HMAC-DRBG instantiated with HMAC-SHA-256.
struct HmacDrbg {
    k: [u8; 32],
    v: [u8; 32],
}

impl HmacDrbg {
    fn new(entropy_input: &[u8], nonce: &[u8], personalization_string: &[u8]) -> Self {
        let mut drbg = Self {
            k: [0x00; 32],
            v: [0x01; 32],
        };

        for i in 0..=1 {
            let mut mac = HmacSha256::new(&drbg.k);
            mac.update(&drbg.v);
            mac.update(&[i]);
            mac.update(entropy_input);
            mac.update(nonce);
            mac.update(personalization_string);
            drbg.k = mac.finalize();
            drbg.v = hmac_sha256(&drbg.k, &drbg.v);
        }

        drbg
    }

    /// Write the next 32 output bytes and advance the state.
    fn fill_bytes(&mut self, out: &mut [u8; 32]) {
        self.v = hmac_sha256(&self.k, &self.v);
        out.copy_from_slice(&self.v);

        let mut mac = HmacSha256::new(&self.k);
        mac.update(&self.v);
        mac.update(&[0x00]);
        self.k = mac.finalize();
        self.v = hmac_sha256(&self.k, &self.v);
    }
}

impl Drop for HmacDrbg {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}

fn leading_zeros(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| b == 0).count()
}

/// Interpret bytes as a big-endian integer of at most 252 bits.
///
/// Leading zero bytes are dropped first; only what remains counts towards the
/// length that decides the shift.
fn bits2int(bytes: &[u8]) -> U264 {
    let bytes = &bytes[leading_zeros(bytes)..];
    // callers pass at most 33 bytes
    let value = U264::from_be_slice(bytes).unwrap_or(U264::ZERO);
    let bits = bytes.len() * 8;
    if bits > ORDER_BITS {
        value.shr_vartime((bits - ORDER_BITS) as u32)
    } else {
        value
    }
}

/// `bits2int` of a digest, reduced modulo `N`.
fn bits2int_mod_n(digest: &FieldElement) -> Scalar {
    let value = digest.to_uint();
    let mut bytes = value.to_be_bytes();
    if value.bits().div_ceil(4) == 63 {
        shl_nibble(&mut bytes);
    }
    Scalar::from_uint(&bits2int(&bytes))
}

/// Shift a big-endian byte string left by four bits; the top nibble is dropped.
fn shl_nibble(bytes: &mut [u8]) {
    for i in 0..bytes.len() {
        let next = bytes.get(i + 1).map_or(0, |b| b >> 4);
        bytes[i] = (bytes[i] << 4) | next;
    }
}

#[cfg(test)]
mod tests {
    use super::{bits2int, bits2int_mod_n, generate_k, generate_k_with_entropy};
    use crate::{
        Error, FieldElement, Scalar, U264, test_vectors::ecdsa::ECDSA_TEST_VECTORS,
    };
    use hex_literal::hex;

    #[test]
    fn rfc6979_known_answers() {
        for vector in ECDSA_TEST_VECTORS {
            let digest = FieldElement::from_be_bytes(vector.m);
            let private_key = FieldElement::from_be_bytes(vector.d);
            let seed = FieldElement::from_be_bytes(vector.seed);

            let k = generate_k_with_entropy(&digest, &private_key, &seed).unwrap();
            assert_eq!(k.to_bytes(), *vector.k);
        }
    }

    #[test]
    fn zero_entropy_is_no_entropy() {
        let vector = &ECDSA_TEST_VECTORS[0];
        let digest = FieldElement::from_be_bytes(vector.m);
        let private_key = FieldElement::from_be_bytes(vector.d);

        assert_eq!(
            generate_k(&digest, &private_key),
            generate_k_with_entropy(&digest, &private_key, &FieldElement::ZERO)
        );
    }

    #[test]
    fn rejects_out_of_range_keys() {
        let digest = FieldElement::from_u64(2);
        assert_eq!(
            generate_k(&digest, &FieldElement::ZERO),
            Err(Error::KeyOutOfRange)
        );
        assert_eq!(
            generate_k(&digest, &FieldElement::from_uint(&Scalar::MODULUS)),
            Err(Error::KeyOutOfRange)
        );
    }

    #[test]
    fn bits2int_strips_leading_zeros() {
        // 32 significant bytes are shifted down to 252 bits
        let full = hex!("f000000000000000000000000000000000000000000000000000000000000001");
        assert_eq!(
            bits2int(&full),
            U264::from_be_hex("0f00000000000000000000000000000000000000000000000000000000000000")
        );

        // with a zero first byte only 31 bytes count, so nothing is shifted
        let short = hex!("00f0000000000000000000000000000000000000000000000000000000000001");
        assert_eq!(bits2int(&short), U264::from_be_slice(&short).unwrap());

        assert_eq!(bits2int(&[0; 32]), U264::ZERO);
    }

    #[test]
    fn bits2int_mod_n_keeps_field_elements_intact() {
        for hex in [
            "02",
            "0397e76d1667c4454bfb83514e120583af836f8e32a516765497823eabe16a3f",
            "00f97e76d1667c4454bfb83514e120583af836f8e32a516765497823eabe16a3",
            "0800000000000011000000000000000000000000000000000000000000000000",
        ] {
            let digest = FieldElement::from_hex(hex).unwrap();
            assert_eq!(
                bits2int_mod_n(&digest),
                Scalar::from_uint(&digest.to_uint())
            );
        }
    }
}
