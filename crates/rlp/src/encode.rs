use crate::error::EncodingError;
use crate::value::{biguint_to_minimal_bytes, Encodable, SHORT_LIMIT};

/// The number of bytes a length field may occupy before it is rejected:
/// `crate::MAX_LEN_BITS` (`2^256`) fits in this many bytes, and no real
/// buffer ever needs more.
const MAX_LENGTH_FIELD_BYTES: usize = (crate::MAX_LEN_BITS / 8) as usize;

/// Encodes a value as RLP bytes.
///
/// See the module-level fixtures in `tests/` for the canonical scenarios
/// this must satisfy (single-byte identity, empty list/string, nested
/// lists, long strings).
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn encode(value: &Encodable) -> Result<Vec<u8>, EncodingError> {
    match value {
        Encodable::Bytes(bytes) => encode_bytes(bytes),
        Encodable::Uint(n) => encode_bytes(&biguint_to_minimal_bytes(n)),
        Encodable::List(items) => {
            let mut payload = Vec::new();
            for item in items {
                payload.extend(encode(item)?);
            }
            encode_list_payload(&payload)
        }
    }
}

/// Encodes a byte string per rules 1–3 of the encoding contract:
/// a lone sub-`0x80` byte encodes as itself, short strings get a one-byte
/// length prefix, long strings get a length-of-length prefix.
fn encode_bytes(data: &[u8]) -> Result<Vec<u8>, EncodingError> {
    if data.len() == 1 && data[0] < 0x80 {
        return Ok(vec![data[0]]);
    }
    let mut out = encode_length(data.len(), 0x80)?;
    out.extend_from_slice(data);
    Ok(out)
}

/// Wraps an already-concatenated list payload with its header per rules
/// 4–5 of the encoding contract.
fn encode_list_payload(payload: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let mut out = encode_length(payload.len(), 0xc0)?;
    out.extend_from_slice(payload);
    Ok(out)
}

/// Produces the header bytes for a payload of length `len`, given the base
/// offset for the item's kind (`0x80` for strings, `0xc0` for lists).
///
/// For `len < 56` this is the single byte `offset + len`. Otherwise it is
/// `offset + 55 + k` followed by `len` as a big-endian, non-leading-zero
/// integer in `k` bytes.
pub fn encode_length(len: usize, offset: u8) -> Result<Vec<u8>, EncodingError> {
    if len < SHORT_LIMIT {
        return Ok(vec![offset + len as u8]);
    }
    let len_bytes = minimal_be_bytes(len);
    if len_bytes.len() > MAX_LENGTH_FIELD_BYTES {
        return Err(EncodingError::LengthOverflow(len.to_string()));
    }
    let mut out = Vec::with_capacity(1 + len_bytes.len());
    out.push(offset + (SHORT_LIMIT - 1) as u8 + len_bytes.len() as u8);
    out.extend(len_bytes);
    Ok(out)
}

fn minimal_be_bytes(len: usize) -> Vec<u8> {
    let bytes = len.to_be_bytes();
    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
    bytes[first_nonzero..].to_vec()
}

/// Checked slicing: returns the requested range or an
/// [`EncodingError::OutOfBounds`] if it extends past the buffer.
pub fn checked_slice(buf: &[u8], start: usize, end: usize) -> Result<&[u8], EncodingError> {
    if end > buf.len() || start > end {
        return Err(EncodingError::OutOfBounds { start, end, len: buf.len() });
    }
    Ok(&buf[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_below_0x80_is_its_own_encoding() {
        assert_eq!(encode(&Encodable::Bytes(vec![0x00])).unwrap(), vec![0x00]);
        assert_eq!(encode(&Encodable::Bytes(vec![0x7f])).unwrap(), vec![0x7f]);
    }

    #[test]
    fn single_byte_at_or_above_0x80_gets_a_length_prefix() {
        assert_eq!(encode(&Encodable::Bytes(vec![0x80])).unwrap(), vec![0x81, 0x80]);
    }

    #[test]
    fn short_string() {
        assert_eq!(encode(&Encodable::str("dog")).unwrap(), vec![0x83, b'd', b'o', b'g']);
    }

    #[test]
    fn empty_string_and_empty_list() {
        assert_eq!(encode(&Encodable::Bytes(Vec::new())).unwrap(), vec![0x80]);
        assert_eq!(encode(&Encodable::List(Vec::new())).unwrap(), vec![0xc0]);
    }

    #[test]
    fn zero_encodes_as_empty_string_not_as_a_zero_byte() {
        assert_eq!(encode(&Encodable::from(0u64)).unwrap(), vec![0x80]);
    }

    #[test]
    fn long_string_uses_length_of_length_header() {
        let payload = vec![b'a'; 1024];
        let encoded = encode(&Encodable::Bytes(payload.clone())).unwrap();
        assert_eq!(&encoded[..3], &[0xb9, 0x04, 0x00]);
        assert_eq!(&encoded[3..], payload.as_slice());
    }

    #[test]
    fn nested_list_fixture() {
        // [ [], [[]], [[], [[]]] ]
        let value = Encodable::List(vec![
            Encodable::List(vec![]),
            Encodable::List(vec![Encodable::List(vec![])]),
            Encodable::List(vec![Encodable::List(vec![]), Encodable::List(vec![Encodable::List(vec![])])]),
        ]);
        let encoded = encode(&value).unwrap();
        assert_eq!(encoded, vec![0xc7, 0xc0, 0xc1, 0xc0, 0xc3, 0xc0, 0xc1, 0xc0]);
    }

    #[test]
    fn checked_slice_rejects_out_of_range() {
        let buf = [1u8, 2, 3];
        assert!(checked_slice(&buf, 0, 2).is_ok());
        assert!(checked_slice(&buf, 0, 4).is_err());
        assert!(checked_slice(&buf, 2, 1).is_err());
    }
}
