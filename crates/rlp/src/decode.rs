use crate::error::DecodingError;
use crate::value::{RlpValue, SHORT_LIMIT};

/// The kind of item a header byte identifies, per the decoding contract's
/// prefix-byte table.
enum Kind {
    SingleByte,
    String,
    List,
}

struct Header {
    offset: usize,
    data_length: usize,
    kind: Kind,
}

/// Decodes an entire RLP buffer into a tagged value tree.
///
/// A zero-length input decodes to [`RlpValue::Empty`]. If the buffer holds
/// exactly one complete RLP item, that item is returned directly. If it
/// holds more than one concatenated item, they are wrapped into a
/// synthetic outermost [`RlpValue::List`] tagged with the original bytes.
///
/// Non-canonical encodings (a long-form header used where the short form
/// would have sufficed, or a length field with leading zero bytes) are
/// accepted, not rejected — this decoder is deliberately tolerant, matching
/// behavior observed across deployed Ethereum tooling. Callers that need
/// strict canonicality should check [`crate::is_canonical`] separately.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn decode(input: &[u8]) -> Result<RlpValue, DecodingError> {
    if input.is_empty() {
        return Ok(RlpValue::Empty);
    }
    let mut items = decode_items(input, 0)?;
    if items.len() == 1 {
        Ok(items.pop().expect("len checked above"))
    } else {
        Ok(RlpValue::List { children: items, depth: 0, raw: input.to_vec() })
    }
}

/// Decodes a run of zero or more complete RLP items from `buf`, used both
/// for a list's body and (at `depth == 0`) for the whole top-level input.
fn decode_items(mut buf: &[u8], depth: usize) -> Result<Vec<RlpValue>, DecodingError> {
    let mut items = Vec::new();
    while !buf.is_empty() {
        let (item, rest) = decode_one(buf, depth)?;
        items.push(item);
        buf = rest;
    }
    Ok(items)
}

/// Decodes exactly one RLP item from the front of `input`, returning it
/// along with the unconsumed remainder.
fn decode_one(input: &[u8], depth: usize) -> Result<(RlpValue, &[u8]), DecodingError> {
    let header = decode_header(input)?;
    match header.kind {
        Kind::SingleByte => Ok((RlpValue::Bytes(vec![input[0]]), &input[1..])),
        Kind::String => {
            let end = header.offset + header.data_length;
            let data = require(input, end)?[header.offset..end].to_vec();
            Ok((RlpValue::Bytes(data), &input[end..]))
        }
        Kind::List => {
            let body_start = header.offset;
            let body_end = header.offset + header.data_length;
            require(input, body_end)?;
            let body = &input[body_start..body_end];
            let children = decode_items(body, depth + 1)?;
            let raw = input[..body_end].to_vec();
            Ok((RlpValue::List { children, depth, raw }, &input[body_end..]))
        }
    }
}

/// Parses the header of the item at the front of `input`, per the
/// decoding contract's prefix-byte table. Does not consume `input`; the
/// caller uses the returned `offset`/`data_length` to slice it.
fn decode_header(input: &[u8]) -> Result<Header, DecodingError> {
    let first = input[0];
    match first {
        0x00..=0x7f => Ok(Header { offset: 0, data_length: 1, kind: Kind::SingleByte }),
        0x80..=0xb7 => {
            let len = (first - 0x80) as usize;
            require(input, 1 + len)?;
            Ok(Header { offset: 1, data_length: len, kind: Kind::String })
        }
        0xb8..=0xbf => {
            let k = (first - 0xb7) as usize;
            require(input, 1 + k)?;
            let len = to_big_uint(&input[1..1 + k])?;
            require(input, 1 + k + len)?;
            Ok(Header { offset: 1 + k, data_length: len, kind: Kind::String })
        }
        0xc0..=0xf7 => {
            let len = (first - 0xc0) as usize;
            require(input, 1 + len)?;
            Ok(Header { offset: 1, data_length: len, kind: Kind::List })
        }
        0xf8..=0xff => {
            let k = (first - 0xf7) as usize;
            require(input, 1 + k)?;
            let len = to_big_uint(&input[1..1 + k])?;
            require(input, 1 + k + len)?;
            Ok(Header { offset: 1 + k, data_length: len, kind: Kind::List })
        }
    }
}

fn require(input: &[u8], needed: usize) -> Result<&[u8], DecodingError> {
    if input.len() < needed {
        Err(DecodingError::UnexpectedEof { needed, available: input.len() })
    } else {
        Ok(input)
    }
}

/// Deserializes a big-endian multi-byte length field. Leading zero bytes
/// are tolerated (non-canonical but accepted, per the decoder's tolerance
/// policy); an empty slice is an error.
pub fn to_big_uint(bytes: &[u8]) -> Result<usize, DecodingError> {
    if bytes.is_empty() {
        return Err(DecodingError::InvalidLengthField);
    }
    let mut value: u128 = 0;
    for &b in bytes {
        value = value
            .checked_shl(8)
            .and_then(|v| v.checked_add(b as u128))
            .ok_or(DecodingError::InvalidLengthField)?;
    }
    usize::try_from(value).map_err(|_| DecodingError::InvalidLengthField)
}

/// Returns `true` if `bytes` would round-trip through [`decode`] and
/// [`crate::encode`] without [`decode`] having tolerated any non-minimal
/// length encoding along the way.
///
/// The default decoder deliberately accepts non-canonical (non-minimal)
/// length headers; this helper is the documented opt-in for callers (e.g.
/// transaction-hash validators) that must reject them.
pub fn is_canonical(bytes: &[u8]) -> bool {
    fn check(buf: &[u8]) -> Result<(), ()> {
        let mut buf = buf;
        while !buf.is_empty() {
            let first = buf[0];
            let header = decode_header(buf).map_err(|_| ())?;

            // A single data byte < 0x80 must use the one-byte form, not a
            // short-string header wrapping it.
            if matches!(first, 0x80..=0xb7) && header.data_length == 1 && buf[1] < 0x80 {
                return Err(());
            }
            // Long-form headers must only be used when the short form
            // would not fit, and the length field itself must have no
            // leading zero byte.
            if matches!(first, 0xb8..=0xbf | 0xf8..=0xff) {
                if header.data_length < SHORT_LIMIT {
                    return Err(());
                }
                if buf[1] == 0 {
                    return Err(());
                }
            }

            let consumed = header.offset + header.data_length;
            if matches!(first, 0xc0..=0xff) {
                let body = &buf[header.offset..consumed];
                check(body)?;
            }
            buf = &buf[consumed..];
        }
        Ok(())
    }
    check(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_the_empty_sentinel() {
        assert_eq!(decode(&[]).unwrap(), RlpValue::Empty);
    }

    #[test]
    fn single_byte_round_trips_as_bytes() {
        assert_eq!(decode(&[0x42]).unwrap(), RlpValue::Bytes(vec![0x42]));
    }

    #[test]
    fn short_string() {
        let decoded = decode(&[0x83, b'd', b'o', b'g']).unwrap();
        assert_eq!(decoded.as_bytes(), Some(b"dog".as_slice()));
    }

    #[test]
    fn empty_list() {
        let decoded = decode(&[0xc0]).unwrap();
        assert!(decoded.is_list());
        assert_eq!(decoded.as_list(), Some([].as_slice()));
        assert_eq!(decoded.depth(), Some(0));
        assert_eq!(decoded.raw(), Some([0xc0].as_slice()));
    }

    #[test]
    fn list_wrapping_a_single_empty_list_keeps_both_levels() {
        // [[]], i.e. a one-element list whose element is itself empty.
        let decoded = decode(&[0xc1, 0xc0]).unwrap();
        let children = decoded.as_list().unwrap();
        assert_eq!(children.len(), 1);
        assert!(children[0].is_list());
        assert_eq!(children[0].as_list(), Some([].as_slice()));
    }

    #[test]
    fn nested_list_fixture() {
        let decoded = decode(&[0xc7, 0xc0, 0xc1, 0xc0, 0xc3, 0xc0, 0xc1, 0xc0]).unwrap();
        let top = decoded.as_list().unwrap();
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].as_list(), Some([].as_slice()));
        assert_eq!(top[1].as_list().unwrap().len(), 1);
        assert_eq!(top[2].as_list().unwrap().len(), 2);
    }

    #[test]
    fn multiple_top_level_items_are_wrapped_in_a_synthetic_list() {
        let decoded = decode(&[0x01, 0x02]).unwrap();
        let children = decoded.as_list().unwrap();
        assert_eq!(children, &[RlpValue::Bytes(vec![0x01]), RlpValue::Bytes(vec![0x02])]);
        assert_eq!(decoded.raw(), Some([0x01, 0x02].as_slice()));
    }

    #[test]
    fn long_string_round_trips() {
        let payload = vec![b'a'; 1024];
        let mut input = vec![0xb9, 0x04, 0x00];
        input.extend_from_slice(&payload);
        let decoded = decode(&input).unwrap();
        assert_eq!(decoded.as_bytes(), Some(payload.as_slice()));
    }

    #[test]
    fn truncated_buffer_is_an_error() {
        assert!(matches!(decode(&[0x83, b'd', b'o']), Err(DecodingError::UnexpectedEof { .. })));
    }

    #[test]
    fn canonical_encodings_pass() {
        assert!(is_canonical(&[0x00]));
        assert!(is_canonical(&[0x83, b'd', b'o', b'g']));
        assert!(is_canonical(&[0xc0]));
        assert!(is_canonical(&[0xc7, 0xc0, 0xc1, 0xc0, 0xc3, 0xc0, 0xc1, 0xc0]));
    }

    #[test]
    fn non_minimal_single_byte_wrapping_is_rejected() {
        // 0x00 should be encoded as itself, not wrapped as a one-byte string.
        assert!(!is_canonical(&[0x81, 0x00]));
    }

    #[test]
    fn long_form_used_below_the_short_limit_is_rejected() {
        // "dog" (len 3) framed with a long-form header instead of the short one.
        assert!(!is_canonical(&[0xb8, 0x03, b'd', b'o', b'g']));
    }

    #[test]
    fn leading_zero_in_long_form_length_is_rejected() {
        let payload = vec![b'a'; 1024];
        // Same declared length (1024) as the canonical 0xb9 04 00 header, but
        // padded to a 3-byte length field with a leading zero.
        let mut input = vec![0xba, 0x00, 0x04, 0x00];
        input.extend_from_slice(&payload);
        assert!(!is_canonical(&input));
    }
}
