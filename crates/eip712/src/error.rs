use thiserror::Error;

/// Errors raised while processing an EIP-712 typed-data document.
#[derive(Debug, Clone, Error)]
pub enum ProcessingError {
    /// `types` is missing an entry referenced by `primaryType`, a field
    /// declaration, or the required `EIP712Domain` entry.
    #[error("type `{0}` is not declared in `types`")]
    UnknownType(String),
    /// A struct-typed field's JSON value wasn't a JSON object.
    #[error("expected a JSON object for struct type `{0}`")]
    ExpectedObject(String),
    /// An array-typed field's JSON value wasn't a JSON array.
    #[error("expected a JSON array for array type `{0}`")]
    ExpectedArray(String),
    /// A field's JSON value didn't have the shape its declared type requires
    /// (e.g. a number/string expected but something else was found).
    #[error("field `{field}` of type `{type_}` has an unexpected JSON shape")]
    UnexpectedShape {
        /// The field's declared Solidity type.
        type_: String,
        /// The field's name.
        field: String,
    },
    /// A hex string (for `bytes`, `bytesN`, or `address`) was malformed.
    #[error("invalid hex value for type `{type_}`: {source}")]
    MalformedHex {
        /// The field's declared Solidity type.
        type_: String,
        /// The underlying hex-decoding error.
        source: String,
    },
    /// A decimal integer literal (for `intN`/`uintN`) could not be parsed.
    #[error("invalid decimal integer for type `{type_}`: {value}")]
    MalformedInteger {
        /// The field's declared Solidity type.
        type_: String,
        /// The literal that failed to parse.
        value: String,
    },
    /// A type name matched neither an atomic Solidity type nor a key of
    /// `types`.
    #[error("unrecognized type expression `{0}`")]
    UnrecognizedType(String),
    /// The scalar ABI encoder rejected a value (e.g. integer overflow for
    /// its declared width, or a checksum mismatch on an address).
    #[error(transparent)]
    Abi(#[from] evmcodec_abi::AbiError),
}

/// Crate-local result alias.
pub type Result<T, E = ProcessingError> = core::result::Result<T, E>;
