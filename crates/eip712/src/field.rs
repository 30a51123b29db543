use std::collections::HashMap;
use std::str::FromStr;

use evmcodec_abi::{abi_encode_single, parse_address, AbiValue};
use evmcodec_keccak::keccak256;
use num_bigint::{BigInt, BigUint};

use crate::encode_type::strip_one_array_suffix;
use crate::error::{ProcessingError, Result};
use crate::hash::hash_struct;
use crate::types::FieldDecl;

/// Encodes one field's value as its 32-byte contribution to `encodeData`,
/// dispatching on its declared Solidity type.
pub fn encode_field(
    types: &HashMap<String, Vec<FieldDecl>>,
    field_name: &str,
    type_: &str,
    value: &serde_json::Value,
) -> Result<[u8; 32]> {
    if type_ == "bool" {
        let b = value
            .as_bool()
            .ok_or_else(|| ProcessingError::UnexpectedShape { type_: type_.to_string(), field: field_name.to_string() })?;
        return Ok(abi_encode_single(&AbiValue::Bool(b))?);
    }

    if let Some(element_type) = strip_one_array_suffix(type_) {
        let array = value
            .as_array()
            .ok_or_else(|| ProcessingError::ExpectedArray(type_.to_string()))?;
        let mut concatenated = Vec::with_capacity(array.len() * 32);
        for element in array {
            concatenated.extend(encode_field(types, field_name, element_type, element)?);
        }
        return Ok(keccak256(&concatenated));
    }

    if types.contains_key(type_) {
        return hash_struct(types, type_, value);
    }

    if type_ == "string" {
        let s = value
            .as_str()
            .ok_or_else(|| ProcessingError::UnexpectedShape { type_: type_.to_string(), field: field_name.to_string() })?;
        return Ok(keccak256(s.as_bytes()));
    }

    if type_ == "bytes" {
        let bytes = decode_hex_field(type_, field_name, value)?;
        return Ok(keccak256(&bytes));
    }

    if let Some(width) = parse_fixed_bytes_width(type_) {
        let bytes = decode_hex_field(type_, field_name, value)?;
        return Ok(abi_encode_single(&AbiValue::FixedBytes { width, bytes })?);
    }

    if type_ == "address" {
        let s = value
            .as_str()
            .ok_or_else(|| ProcessingError::UnexpectedShape { type_: type_.to_string(), field: field_name.to_string() })?;
        let address = parse_address(s)?;
        return Ok(abi_encode_single(&AbiValue::Address(address))?);
    }

    if let Some((is_signed, width)) = parse_int_type(type_) {
        let literal = json_number_as_str(value)
            .ok_or_else(|| ProcessingError::UnexpectedShape { type_: type_.to_string(), field: field_name.to_string() })?;
        return if is_signed {
            let parsed = BigInt::from_str(&literal)
                .map_err(|_| ProcessingError::MalformedInteger { type_: type_.to_string(), value: literal.clone() })?;
            Ok(abi_encode_single(&AbiValue::Int { width, value: parsed })?)
        } else {
            let parsed = BigUint::from_str(&literal)
                .map_err(|_| ProcessingError::MalformedInteger { type_: type_.to_string(), value: literal.clone() })?;
            Ok(abi_encode_single(&AbiValue::Uint { width, value: parsed })?)
        };
    }

    Err(ProcessingError::UnrecognizedType(type_.to_string()))
}

/// Accepts a JSON string or number for an integer field — string form is
/// canonical (and required for widths a JSON number can't represent).
fn json_number_as_str(value: &serde_json::Value) -> Option<String> {
    if let Some(s) = value.as_str() {
        return Some(s.to_string());
    }
    if let Some(n) = value.as_i64() {
        return Some(n.to_string());
    }
    if let Some(n) = value.as_u64() {
        return Some(n.to_string());
    }
    None
}

fn decode_hex_field(type_: &str, field_name: &str, value: &serde_json::Value) -> Result<Vec<u8>> {
    let s = value
        .as_str()
        .ok_or_else(|| ProcessingError::UnexpectedShape { type_: type_.to_string(), field: field_name.to_string() })?;
    let stripped = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    hex::decode(stripped).map_err(|e| ProcessingError::MalformedHex { type_: type_.to_string(), source: e.to_string() })
}

/// Matches `^(u?)int\d*$`; the digit suffix is the bit width, defaulting to
/// 256 when absent. No validation that the width is a multiple of 8 or
/// within `1..=256` — invalid widths are passed through to the ABI encoder.
pub(crate) fn parse_int_type(type_: &str) -> Option<(bool, u16)> {
    let (is_signed, rest) = if let Some(rest) = type_.strip_prefix("uint") {
        (false, rest)
    } else if let Some(rest) = type_.strip_prefix("int") {
        (true, rest)
    } else {
        return None;
    };
    if rest.is_empty() {
        return Some((is_signed, 256));
    }
    rest.parse::<u16>().ok().map(|width| (is_signed, width))
}

/// Matches `^bytes\d+$` (the fixed-size sibling of dynamic `bytes`).
pub(crate) fn parse_fixed_bytes_width(type_: &str) -> Option<u16> {
    let rest = type_.strip_prefix("bytes")?;
    if rest.is_empty() {
        return None;
    }
    rest.parse::<u16>().ok()
}
