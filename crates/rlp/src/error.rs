use thiserror::Error;

/// Errors raised while encoding a value into RLP.
#[derive(Debug, Clone, Error)]
pub enum EncodingError {
    /// The value's length (for a byte string or a list's encoded payload)
    /// reached or exceeded `2^256`, the framing format's hard ceiling.
    #[error("length {0} is too large to encode (must be < 2^256)")]
    LengthOverflow(String),
    /// A requested byte range fell outside the buffer being sliced.
    #[error("slice range {start}..{end} is out of bounds for a buffer of length {len}")]
    OutOfBounds {
        /// Start of the requested range.
        start: usize,
        /// End of the requested range.
        end: usize,
        /// Length of the buffer being sliced.
        len: usize,
    },
}

/// Errors raised while decoding an RLP buffer.
#[derive(Debug, Clone, Error)]
pub enum DecodingError {
    /// The buffer ended before a declared length could be satisfied.
    #[error("unexpected end of input: needed {needed} bytes, had {available}")]
    UnexpectedEof {
        /// Bytes required to satisfy the header/body being parsed.
        needed: usize,
        /// Bytes actually remaining in the buffer.
        available: usize,
    },
    /// A multi-byte length field was empty or otherwise could not be
    /// interpreted as a big-endian integer.
    #[error("invalid length field")]
    InvalidLengthField,
}
