use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{AbiError, Result};

/// A scalar value already tagged with the Solidity type it must be encoded
/// as — the ABI encoder never infers width or signedness from the value
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    /// `bool`.
    Bool(bool),
    /// `intN`, `1 <= N <= 256`.
    Int {
        /// Declared bit width.
        width: u16,
        /// Signed value.
        value: BigInt,
    },
    /// `uintN`, `1 <= N <= 256`.
    Uint {
        /// Declared bit width.
        width: u16,
        /// Unsigned value.
        value: BigUint,
    },
    /// `address`, a 20-byte value.
    Address([u8; 20]),
    /// `bytesN`, `1 <= N <= 32`, right-padded.
    FixedBytes {
        /// Declared byte width.
        width: u16,
        /// Raw bytes, length `<= width`.
        bytes: Vec<u8>,
    },
}

/// Encodes a single scalar as its canonical 32-byte ABI word.
pub fn abi_encode_single(value: &AbiValue) -> Result<[u8; 32]> {
    match value {
        AbiValue::Bool(b) => {
            let mut out = [0u8; 32];
            out[31] = *b as u8;
            Ok(out)
        }
        AbiValue::Uint { width, value } => encode_uint(*width, value),
        AbiValue::Int { width, value } => encode_int(*width, value),
        AbiValue::Address(addr) => {
            let mut out = [0u8; 32];
            out[12..].copy_from_slice(addr);
            Ok(out)
        }
        AbiValue::FixedBytes { width, bytes } => encode_fixed_bytes(*width, bytes),
    }
}

fn encode_uint(width: u16, value: &BigUint) -> Result<[u8; 32]> {
    let bytes = value.to_bytes_be();
    if bytes.len() > 32 || bit_length(&bytes) > width as usize {
        return Err(AbiError::UnsignedTooWide { width });
    }
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

fn encode_int(width: u16, value: &BigInt) -> Result<[u8; 32]> {
    let min = -(BigInt::from(1) << (width as usize - 1));
    let max = (BigInt::from(1) << (width as usize - 1)) - BigInt::from(1);
    if value < &min || value > &max {
        return Err(AbiError::IntegerTooWide { width });
    }
    // Two's complement over 256 bits: for non-negative values this is just
    // the big-endian magnitude; for negative values it's `2^256 + value`.
    let modulus = BigInt::from(1) << 256;
    let wrapped = if value.sign() == Sign::Minus { value + &modulus } else { value.clone() };
    let (_, bytes) = wrapped.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

fn encode_fixed_bytes(width: u16, bytes: &[u8]) -> Result<[u8; 32]> {
    if width == 0 || width > 32 || bytes.len() > width as usize {
        return Err(AbiError::FixedBytesLengthMismatch { width, max: 32, actual: bytes.len() });
    }
    let mut out = [0u8; 32];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

fn bit_length(be_bytes: &[u8]) -> usize {
    let Some(first_nonzero) = be_bytes.iter().position(|&b| b != 0) else {
        return 0;
    };
    let leading = be_bytes[first_nonzero];
    let leading_bits = 8 - leading.leading_zeros() as usize;
    leading_bits + (be_bytes.len() - first_nonzero - 1) * 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_encodes_as_0_or_1() {
        assert_eq!(abi_encode_single(&AbiValue::Bool(false)).unwrap(), [0u8; 32]);
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(abi_encode_single(&AbiValue::Bool(true)).unwrap(), expected);
    }

    #[test]
    fn uint256_left_pads() {
        let value = AbiValue::Uint { width: 256, value: BigUint::from(1024u32) };
        let encoded = abi_encode_single(&value).unwrap();
        assert_eq!(&encoded[30..], &[0x04, 0x00]);
        assert!(encoded[..30].iter().all(|&b| b == 0));
    }

    #[test]
    fn uint8_rejects_overflow() {
        let value = AbiValue::Uint { width: 8, value: BigUint::from(256u32) };
        assert!(abi_encode_single(&value).is_err());
    }

    #[test]
    fn negative_int_is_twos_complement() {
        let value = AbiValue::Int { width: 256, value: BigInt::from(-1) };
        assert_eq!(abi_encode_single(&value).unwrap(), [0xffu8; 32]);
    }

    #[test]
    fn int8_rejects_out_of_range() {
        let value = AbiValue::Int { width: 8, value: BigInt::from(200) };
        assert!(abi_encode_single(&value).is_err());
    }

    #[test]
    fn address_is_left_padded() {
        let addr = [0xabu8; 20];
        let encoded = abi_encode_single(&AbiValue::Address(addr)).unwrap();
        assert_eq!(&encoded[..12], &[0u8; 12]);
        assert_eq!(&encoded[12..], &addr);
    }

    #[test]
    fn bytes4_is_right_padded() {
        let value = AbiValue::FixedBytes { width: 4, bytes: vec![0xde, 0xad, 0xbe, 0xef] };
        let encoded = abi_encode_single(&value).unwrap();
        assert_eq!(&encoded[..4], &[0xde, 0xad, 0xbe, 0xef]);
        assert!(encoded[4..].iter().all(|&b| b == 0));
    }
}
