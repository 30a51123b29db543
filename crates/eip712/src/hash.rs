use std::collections::HashMap;

use evmcodec_keccak::keccak256;

use crate::encode_type::encode_type;
use crate::error::{ProcessingError, Result};
use crate::field::encode_field;
use crate::types::{FieldDecl, TypedData};

/// `keccak256(encode_type(types, type_name))`.
pub fn type_hash(types: &HashMap<String, Vec<FieldDecl>>, type_name: &str) -> Result<[u8; 32]> {
    Ok(keccak256(encode_type(types, type_name)?.as_bytes()))
}

/// Concatenates each declared field's 32-byte encoding, in declaration
/// order. A field declared in `types[type_name]` but absent from `value`
/// (or present with a JSON `null`) is skipped entirely — it contributes no
/// bytes at all, rather than 32 zero bytes.
pub fn encode_data(
    types: &HashMap<String, Vec<FieldDecl>>,
    type_name: &str,
    value: &serde_json::Value,
) -> Result<Vec<u8>> {
    let fields = types.get(type_name).ok_or_else(|| ProcessingError::UnknownType(type_name.to_string()))?;
    let object = value.as_object().ok_or_else(|| ProcessingError::ExpectedObject(type_name.to_string()))?;

    let mut out = Vec::with_capacity(fields.len() * 32);
    for field in fields {
        let Some(field_value) = object.get(&field.name) else { continue };
        if field_value.is_null() {
            continue;
        }
        out.extend(encode_field(types, &field.name, &field.type_, field_value)?);
    }
    Ok(out)
}

/// `keccak256(type_hash(type_name) ++ encode_data(type_name, value))`.
pub fn hash_struct(
    types: &HashMap<String, Vec<FieldDecl>>,
    type_name: &str,
    value: &serde_json::Value,
) -> Result<[u8; 32]> {
    let mut buf = Vec::with_capacity(64);
    buf.extend(type_hash(types, type_name)?);
    buf.extend(encode_data(types, type_name, value)?);
    Ok(keccak256(buf))
}

/// `keccak256(0x19 ++ 0x01 ++ hash_struct("EIP712Domain", domain) ++
/// hash_struct(primary_type, message))`.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn digest(typed_data: &TypedData) -> Result<[u8; 32]> {
    typed_data.validate()?;
    let domain_hash = hash_struct(&typed_data.types, "EIP712Domain", &typed_data.domain)?;
    let message_hash = hash_struct(&typed_data.types, &typed_data.primary_type, &typed_data.message)?;

    let mut buf = Vec::with_capacity(2 + 32 + 32);
    buf.push(0x19);
    buf.push(0x01);
    buf.extend(domain_hash);
    buf.extend(message_hash);
    Ok(keccak256(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(type_: &str, name: &str) -> FieldDecl {
        FieldDecl { name: name.to_string(), type_: type_.to_string() }
    }

    #[test]
    fn missing_field_contributes_no_bytes() {
        let mut types = HashMap::new();
        types.insert("Person".to_string(), vec![field("string", "name"), field("uint256", "age")]);

        let with_age = encode_data(&types, "Person", &json!({"name": "Cow", "age": "3"})).unwrap();
        let without_age = encode_data(&types, "Person", &json!({"name": "Cow"})).unwrap();

        assert_eq!(with_age.len(), 64);
        assert_eq!(without_age.len(), 32);
        assert_eq!(&with_age[..32], without_age.as_slice());
    }

    #[test]
    fn null_field_is_treated_the_same_as_absent() {
        let mut types = HashMap::new();
        types.insert("Person".to_string(), vec![field("string", "name"), field("uint256", "age")]);

        let with_null_age = encode_data(&types, "Person", &json!({"name": "Cow", "age": null})).unwrap();
        let without_age = encode_data(&types, "Person", &json!({"name": "Cow"})).unwrap();
        assert_eq!(with_null_age, without_age);
    }
}
