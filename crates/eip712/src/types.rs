use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};

/// A JSON-driven EIP-712 typed-data document, deserialized straight off the
/// wire in the shape wallets exchange for `eth_signTypedData_v4`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypedData {
    /// Declared struct types, each an ordered list of field declarations.
    pub types: HashMap<String, Vec<FieldDecl>>,
    /// The name of the struct type in `message` that is being signed.
    #[serde(rename = "primaryType")]
    pub primary_type: String,
    /// The `EIP712Domain` struct's field values.
    pub domain: serde_json::Value,
    /// The `primaryType` struct's field values.
    pub message: serde_json::Value,
}

/// A single field declaration within a struct type: its name and its
/// Solidity type expression (an atomic type, a user-defined type name, or
/// either followed by any number of `[]`/`[N]` array suffixes).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldDecl {
    /// The field's name, as it appears as a JSON object key in `message`.
    pub name: String,
    /// The field's Solidity type expression.
    #[serde(rename = "type")]
    pub type_: String,
}

impl TypedData {
    /// Confirms `types` declares both `primaryType` and `EIP712Domain`, per
    /// the data model's invariant. `digest`, `encode_type`, and `hash_struct`
    /// call this before doing any work.
    pub fn validate(&self) -> Result<()> {
        if !self.types.contains_key(&self.primary_type) {
            return Err(ProcessingError::UnknownType(self.primary_type.clone()));
        }
        if !self.types.contains_key("EIP712Domain") {
            return Err(ProcessingError::UnknownType("EIP712Domain".to_string()));
        }
        Ok(())
    }
}
