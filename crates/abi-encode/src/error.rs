use thiserror::Error;

/// Errors raised while ABI-encoding a scalar value or parsing an address.
#[derive(Debug, Clone, Error)]
pub enum AbiError {
    /// A signed integer did not fit in the declared bit width.
    #[error("value does not fit in a signed {width}-bit integer")]
    IntegerTooWide {
        /// The declared bit width.
        width: u16,
    },
    /// An unsigned integer did not fit in the declared bit width.
    #[error("value does not fit in an unsigned {width}-bit integer")]
    UnsignedTooWide {
        /// The declared bit width.
        width: u16,
    },
    /// A `bytesN` value's length didn't match the declared width, or exceeded 32.
    #[error("bytesN value has {actual} bytes, expected at most {max} (declared width {width})")]
    FixedBytesLengthMismatch {
        /// Declared width `N`.
        width: u16,
        /// Ceiling enforced regardless of width (32 bytes, one ABI word).
        max: u16,
        /// Actual byte length supplied.
        actual: usize,
    },
    /// Hex decoding failed (malformed digits or wrong parity).
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// An address string was not exactly 20 bytes once hex-decoded.
    #[error("address must decode to exactly 20 bytes, got {0}")]
    InvalidAddressLength(usize),
    /// A mixed-case address string failed EIP-55 checksum validation.
    #[error("address {0} fails EIP-55 checksum validation")]
    ChecksumMismatch(String),
}

/// Crate-local result alias.
pub type Result<T, E = AbiError> = core::result::Result<T, E>;
