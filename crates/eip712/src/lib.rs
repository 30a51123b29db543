#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/alloy-rs/core/main/assets/alloy.jpg",
    html_favicon_url = "https://raw.githubusercontent.com/alloy-rs/core/main/assets/favicon.ico"
)]
#![warn(missing_docs, rustdoc::all)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::{ProcessingError, Result};

mod types;
pub use types::{FieldDecl, TypedData};

mod encode_type;
mod field;
mod hash;

/// Computes the canonical EIP-712 type string for `type_name` within
/// `typed_data.types` — its own primary definition, followed by the
/// primaries of every other struct type it transitively references,
/// sorted lexicographically.
pub fn eip712_encode_type(typed_data: &TypedData, type_name: &str) -> Result<String> {
    encode_type::encode_type(&typed_data.types, type_name)
}

/// Computes `hashStruct(type_name, value)` for an arbitrary JSON value
/// against `typed_data.types`, independent of `digest`. Useful for hashing
/// the domain separator or a substructure on its own.
pub fn eip712_hash_struct(
    typed_data: &TypedData,
    type_name: &str,
    value: &serde_json::Value,
) -> Result<[u8; 32]> {
    hash::hash_struct(&typed_data.types, type_name, value)
}

/// Computes the top-level EIP-712 signing digest for a typed-data document.
pub fn eip712_digest(typed_data: &TypedData) -> Result<[u8; 32]> {
    hash::digest(typed_data)
}
