#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/alloy-rs/core/main/assets/alloy.jpg",
    html_favicon_url = "https://raw.githubusercontent.com/alloy-rs/core/main/assets/favicon.ico"
)]
#![warn(missing_docs, rustdoc::all)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

use sha3::{Digest, Keccak256};

/// The length in bytes of a Keccak-256 digest.
pub const DIGEST_LENGTH: usize = 32;

/// Hashes an arbitrary byte sequence with Keccak-256.
///
/// This is the original Keccak padding (`0x01`), not NIST's standardized
/// SHA3-256 (`0x06`): the two hash to different digests for the same input.
pub fn keccak256(bytes: impl AsRef<[u8]>) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Keccak256::new();
    hasher.update(bytes.as_ref());
    hasher.finalize().into()
}

/// Hashes a fixed-size byte array view with Keccak-256.
///
/// Equivalent to [`keccak256`], provided separately so callers working with
/// `&[u8; N]` views (e.g. ABI-encoded words) don't need to reslice first.
pub fn keccak256_array<const N: usize>(bytes: &[u8; N]) -> [u8; DIGEST_LENGTH] {
    keccak256(bytes.as_slice())
}

/// Hashes the UTF-8 bytes of a string with Keccak-256.
///
/// The string's bytes are hashed directly with no length framing or
/// null-termination — equivalent to `keccak256(s.as_bytes())`.
pub fn keccak256_str(s: impl AsRef<str>) -> [u8; DIGEST_LENGTH] {
    keccak256(s.as_ref().as_bytes())
}
