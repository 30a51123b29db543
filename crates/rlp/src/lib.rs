#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/alloy-rs/core/main/assets/alloy.jpg",
    html_favicon_url = "https://raw.githubusercontent.com/alloy-rs/core/main/assets/favicon.ico"
)]
#![warn(missing_docs, rustdoc::all)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::{DecodingError, EncodingError};

mod value;
pub use value::{Encodable, RlpValue, SHORT_LIMIT};

mod encode;
pub use encode::{checked_slice, encode, encode_length};

mod decode;
pub use decode::{decode, is_canonical, to_big_uint};

/// Length at or above which a byte string or list payload is rejected by
/// [`encode`].
pub const MAX_LEN_BITS: u32 = 256;
