use evmcodec_keccak::keccak256_str;

use crate::error::{AbiError, Result};

/// Parses an Ethereum address string (`0x`-prefixed or not, 40 hex digits).
///
/// If the string mixes upper- and lowercase letters, it's validated against
/// the EIP-55 checksum and rejected on mismatch. An all-lowercase or
/// all-uppercase string is accepted without checksum validation, matching
/// widely deployed tooling that treats those as "no checksum asserted".
pub fn parse_address(s: &str) -> Result<[u8; 20]> {
    let stripped = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    if is_mixed_case(stripped) && checksum_address(stripped) != stripped {
        return Err(AbiError::ChecksumMismatch(s.to_string()));
    }
    let bytes = hex::decode(stripped).map_err(|e| AbiError::InvalidHex(e.to_string()))?;
    <[u8; 20]>::try_from(bytes.as_slice()).map_err(|_| AbiError::InvalidAddressLength(bytes.len()))
}

fn is_mixed_case(hex_digits: &str) -> bool {
    let has_lower = hex_digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex_digits.bytes().any(|b| b.is_ascii_uppercase());
    has_lower && has_upper
}

/// Computes the EIP-55 checksummed form of a 40-character hex address
/// string (without `0x` prefix).
fn checksum_address(hex_digits: &str) -> String {
    let lower = hex_digits.to_ascii_lowercase();
    let hash = keccak256_str(&lower);
    lower
        .char_indices()
        .map(|(i, c)| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let nibble = if i % 2 == 0 { hash[i / 2] >> 4 } else { hash[i / 2] & 0x0f };
            if nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
