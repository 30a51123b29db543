use num_bigint::BigUint;
use num_traits::Zero;

/// The single-byte prefix marking the shortest long-form length header.
///
/// Payload lengths below this use a one-byte length prefix; at or above it
/// the length itself is framed as a big-endian integer.
pub const SHORT_LIMIT: usize = 56;

/// A value accepted by [`crate::encode`].
///
/// This mirrors the dynamically-typed encoder contract of the RLP
/// specification (byte string, UTF-8 string, arbitrary-precision
/// non-negative integer, or nested list) as an explicit sum type rather
/// than dispatching on a trait object or `dyn Any`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encodable {
    /// A raw byte string of arbitrary length, including zero.
    Bytes(Vec<u8>),
    /// A non-negative, arbitrary-precision integer.
    ///
    /// Zero encodes as the empty byte string, never as a single `0x00`
    /// byte.
    Uint(BigUint),
    /// An ordered, possibly nested, list of values.
    List(Vec<Encodable>),
}

impl Encodable {
    /// Builds a byte-string value from a string, choosing hex or UTF-8
    /// interpretation the way the encoding contract requires: a string is
    /// treated as hex (with or without a `0x`/`0X` prefix) only if,
    /// stripped of that prefix, it has even length and consists entirely
    /// of hex digits; otherwise it is encoded as its UTF-8 bytes.
    pub fn str(s: &str) -> Self {
        let stripped = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let looks_like_hex =
            !stripped.is_empty() && stripped.len() % 2 == 0 && stripped.bytes().all(|b| b.is_ascii_hexdigit());
        if looks_like_hex {
            if let Ok(bytes) = hex::decode(stripped) {
                return Self::Bytes(bytes);
            }
        }
        Self::Bytes(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for Encodable {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Encodable {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<u64> for Encodable {
    fn from(value: u64) -> Self {
        Self::Uint(BigUint::from(value))
    }
}

impl From<Vec<Encodable>> for Encodable {
    fn from(items: Vec<Encodable>) -> Self {
        Self::List(items)
    }
}

/// A decoded RLP value: either the empty-input sentinel, a byte string, or
/// a list of child values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpValue {
    /// Sentinel returned by [`crate::decode`] for a zero-length input.
    Empty,
    /// A decoded byte string of arbitrary length, including zero.
    Bytes(Vec<u8>),
    /// A decoded list: its children, the nesting depth at which it was
    /// decoded, and the exact input bytes (header plus body) it came from.
    List {
        /// The list's child values, in order.
        children: Vec<RlpValue>,
        /// Nesting depth of this list: `0` for a list decoded directly from
        /// the top-level input, incremented by one per level of recursion.
        depth: usize,
        /// The originating byte slice (header + body) for this list, so
        /// callers can re-hash or re-emit the subtree without re-encoding.
        raw: Vec<u8>,
    },
}

impl RlpValue {
    /// Returns `true` if this is the [`RlpValue::Empty`] sentinel.
    #[inline]
    pub fn is_empty_sentinel(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if this is a [`RlpValue::Bytes`] value.
    #[inline]
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }

    /// Returns `true` if this is a [`RlpValue::List`] value.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// Returns the byte string if this is [`RlpValue::Bytes`].
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the children if this is [`RlpValue::List`].
    pub fn as_list(&self) -> Option<&[RlpValue]> {
        match self {
            Self::List { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Returns the originating raw bytes if this is [`RlpValue::List`].
    pub fn raw(&self) -> Option<&[u8]> {
        match self {
            Self::List { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Returns the nesting depth if this is [`RlpValue::List`].
    pub fn depth(&self) -> Option<usize> {
        match self {
            Self::List { depth, .. } => Some(*depth),
            _ => None,
        }
    }
}

pub(crate) fn biguint_to_minimal_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}
