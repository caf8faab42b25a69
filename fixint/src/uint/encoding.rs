//! Hex, decimal and big-endian byte encodings.

use super::{LIMBS, U264};
use crate::{Error, Result, limb::Limb};
use core::{fmt, str::FromStr};

/// Maximum number of significant hex digits.
const MAX_NIBBLES: usize = 66;

impl U264 {
    /// Parse a big-endian hex string, with or without a `0x` prefix.
    ///
    /// Intended for constants.
    ///
    /// # Panics
    /// - if the string is empty or contains a non-hex character
    /// - if the value does not fit in 264 bits
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        let start = hex_digits_start(bytes);
        assert!(bytes.len() > start, "empty hex string");

        let mut limbs = [0; LIMBS];
        let mut nibble = 0;
        let mut i = bytes.len();
        while i > start {
            i -= 1;
            let digit = match decode_nibble(bytes[i]) {
                Some(digit) => digit,
                None => panic!("invalid hex digit"),
            };
            if digit != 0 {
                assert!(nibble < MAX_NIBBLES, "hex value exceeds 264 bits");
                limbs[nibble / 16] |= (digit as Limb) << ((nibble % 16) * 4);
            }
            nibble += 1;
        }

        Self::from_limbs_unchecked(limbs)
    }

    /// Parse a big-endian hex string, with or without a `0x` prefix.
    ///
    /// Leading zeros are accepted. Returns [`Error::InvalidEncoding`] for an empty
    /// string or a non-hex character and [`Error::ArithmeticOverflow`] if the value
    /// does not fit in 264 bits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex.as_bytes();
        let digits = &bytes[hex_digits_start(bytes)..];
        if digits.is_empty() {
            return Err(Error::InvalidEncoding);
        }

        let mut limbs = [0; LIMBS];
        for (nibble, &c) in digits.iter().rev().enumerate() {
            let digit = decode_nibble(c).ok_or(Error::InvalidEncoding)?;
            if digit != 0 {
                if nibble >= MAX_NIBBLES {
                    return Err(Error::ArithmeticOverflow);
                }
                limbs[nibble / 16] |= (digit as Limb) << ((nibble % 16) * 4);
            }
        }

        Ok(Self::from_limbs_unchecked(limbs))
    }

    /// Parse an unsigned decimal string.
    pub fn from_dec_str(dec: &str) -> Result<Self> {
        if dec.is_empty() {
            return Err(Error::InvalidEncoding);
        }

        let ten = Self::from_u64(10);
        dec.bytes().try_fold(Self::ZERO, |acc, c| {
            if !c.is_ascii_digit() {
                return Err(Error::InvalidEncoding);
            }
            acc.checked_mul(&ten)?
                .checked_add(&Self::from_u64((c - b'0').into()))
        })
    }

    /// Decode a big-endian byte string of any length.
    ///
    /// Returns [`Error::ArithmeticOverflow`] if the value does not fit in 264 bits.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        let mut limbs = [0; LIMBS];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            if byte == 0 {
                continue;
            }
            if i >= Self::BYTES {
                return Err(Error::ArithmeticOverflow);
            }
            limbs[i / 8] |= (byte as Limb) << ((i % 8) * 8);
        }
        Ok(Self::from_limbs_unchecked(limbs))
    }

    /// Encode as 33 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; Self::BYTES] {
        let mut out = [0; Self::BYTES];
        self.fill_be_bytes(&mut out);
        out
    }

    /// Write the value into `out` as big-endian bytes, left-padded with zeros.
    ///
    /// Returns [`Error::ArithmeticOverflow`] if `out` is too short to hold the value.
    pub fn write_be_bytes(&self, out: &mut [u8]) -> Result<()> {
        if self.bits().div_ceil(8) as usize > out.len() {
            return Err(Error::ArithmeticOverflow);
        }
        self.fill_be_bytes(out);
        Ok(())
    }

    /// Write the low `out.len()` bytes of the value, big-endian.
    fn fill_be_bytes(&self, out: &mut [u8]) {
        for (i, byte) in out.iter_mut().rev().enumerate() {
            *byte = if i < Self::BYTES {
                (self.limbs[i / 8] >> ((i % 8) * 8)) as u8
            } else {
                0
            };
        }
    }
}

const fn hex_digits_start(bytes: &[u8]) -> usize {
    if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    }
}

const fn decode_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses `0x`-prefixed input as hex and anything else as decimal.
impl FromStr for U264 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if hex_digits_start(s.as_bytes()) == 2 {
            Self::from_hex(s)
        } else {
            Self::from_dec_str(s)
        }
    }
}

/// Canonical `0x`-prefixed lowercase hex without leading zeros; zero is `0x0`.
impl fmt::Display for U264 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl fmt::LowerHex for U264 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        let top = self.limbs.iter().rposition(|&limb| limb != 0).unwrap_or(0);
        write!(f, "{:x}", self.limbs[top])?;
        for limb in self.limbs[..top].iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for U264 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        let top = self.limbs.iter().rposition(|&limb| limb != 0).unwrap_or(0);
        write!(f, "{:X}", self.limbs[top])?;
        for limb in self.limbs[..top].iter().rev() {
            write!(f, "{:016X}", limb)?;
        }
        Ok(())
    }
}
